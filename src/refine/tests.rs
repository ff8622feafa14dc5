//! Tests for classification, header handling and injection passes.

use super::*;
use crate::config::StubSettings;
use crate::manifest::MANIFEST_FILE;
use crate::stubs::StubWriter;
use tempfile::TempDir;

const TASK_LIST: &str = "\
## EPIC 1 — Foundation
### Task 000: Repository Layout
### Task 007: Operating Modes
#### Alpha
#### Beta
## EPIC 2 — Runtime
### Task 010: Model Provider Interface
";

fn fixture() -> (TaskList, TemplateSet) {
    (TaskList::parse(TASK_LIST), TemplateSet::builtin())
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

// =========================================================================
// Classification
// =========================================================================

#[test]
fn test_classify_task() {
    let kind = classify("intro\n# Task 007: Operating Modes\nbody").unwrap();
    assert_eq!(
        kind,
        DocKind::Task {
            number: 7,
            subtask: None,
            title: "Operating Modes".to_string()
        }
    );
    assert_eq!(kind.source_id(), "Task 007");
}

#[test]
fn test_classify_subtask() {
    let kind = classify("# Task 007.b: Beta\n").unwrap();
    assert_eq!(
        kind,
        DocKind::Task {
            number: 7,
            subtask: Some(1),
            title: "Beta".to_string()
        }
    );
    assert_eq!(kind.source_id(), "Task 007.b");
}

#[test]
fn test_classify_epic() {
    let kind = classify("# EPIC 2 — Runtime\n").unwrap();
    assert_eq!(
        kind,
        DocKind::Epic {
            code: "EPIC 2".to_string(),
            title: "Runtime".to_string()
        }
    );
}

#[test]
fn test_classify_requires_level_one_and_three_digits() {
    assert_eq!(classify("## Task 007: Nested\n"), None);
    assert_eq!(classify("# Task 7: Short number\n"), None);
    assert_eq!(classify("plain text\n"), None);
}

#[test]
fn test_classify_earliest_heading_wins() {
    let kind = classify("# EPIC 1 — Foundation\n\n# Task 000: Layout\n").unwrap();
    assert!(matches!(kind, DocKind::Epic { .. }));

    let kind = classify("# Task 000: Layout\n\n# EPIC 1 — Foundation\n").unwrap();
    assert!(matches!(kind, DocKind::Task { .. }));
}

// =========================================================================
// Header and context helpers
// =========================================================================

#[test]
fn test_strip_instructions() {
    let text = "\n# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS TASK\nstuff\n---\n# Task 007: X\nbody";
    assert_eq!(strip_instructions(text), "# Task 007: X\nbody");
}

#[test]
fn test_strip_leaves_plain_documents() {
    let text = "# Task 007: X\nbody";
    assert_eq!(strip_instructions(text), text);

    let no_heading = "# INSTRUCTIONS FOR CLAUDE\nonly instructions";
    assert_eq!(strip_instructions(no_heading), no_heading);
}

#[test]
fn test_strip_trims_leading_whitespace_before_marker() {
    let text = "\n\n  # INSTRUCTIONS FOR CLAUDE\nonly instructions";
    assert_eq!(
        strip_instructions(text),
        "# INSTRUCTIONS FOR CLAUDE\nonly instructions"
    );
}

#[test]
fn test_refine_indented_header_without_heading_is_stable() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let header = templates.render(TemplateKind::TaskHeader, &Vars::new()).unwrap();

    let text = format!("\n  {}loose notes\n", header);
    let once = injector.refine(Pass::Tasks, &text).unwrap();
    let twice = injector.refine(Pass::Tasks, &once.content).unwrap();

    assert_eq!(once.outcome, Outcome::Unclassified);
    assert_eq!(once.content.matches(INSTRUCTION_MARKER).count(), 1);
    assert_eq!(once.content, twice.content);
}

#[test]
fn test_ensure_header_does_not_duplicate() {
    assert_eq!(ensure_header("H\n", "body"), "H\nbody");
    assert_eq!(ensure_header("H\n", "H\nbody"), "H\nbody");
}

#[test]
fn test_insert_context_after_first_break() {
    let doc = "head\n---\n\nbody\n---\n\nmore";
    assert_eq!(
        insert_context(doc, "CTX\n"),
        "head\n---\n\nCTX\nbody\n---\n\nmore"
    );
}

#[test]
fn test_insert_context_without_break_prepends() {
    assert_eq!(insert_context("body", "CTX\n"), "CTX\nbody");
}

#[test]
fn test_sibling_lines() {
    let list = TaskList::parse(TASK_LIST);
    let index = list.index();

    assert_eq!(
        sibling_lines(index.task(7).unwrap()),
        "  - Task 007.a: Alpha\n  - Task 007.b: Beta"
    );
    assert_eq!(sibling_lines(index.task(0).unwrap()), "  - (none)");
}

#[test]
fn test_epic_task_lines() {
    let list = TaskList::parse(TASK_LIST);
    let epic = list.index().epic("EPIC 1").unwrap();

    assert_eq!(
        epic_task_lines(epic),
        "- Task 000: Repository Layout\n\
         - Task 007: Operating Modes\n  - Task 007.a: Alpha\n  - Task 007.b: Beta"
    );
}

// =========================================================================
// Single-document refinement
// =========================================================================

#[test]
fn test_refine_task_document() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector
        .refine(Pass::Tasks, "# Task 007: Operating Modes\n\nBody text.\n")
        .unwrap();

    assert_eq!(doc.outcome, Outcome::Refined);
    assert_eq!(doc.source.as_deref(), Some("Task 007"));
    assert!(doc.content.starts_with(
        "# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS TASK (REFINED SPEC TARGET)"
    ));
    assert!(doc.content.contains("## Canonical Context (from task-list.md)"));
    assert!(doc.content.contains("- **Epic:** EPIC 1 — Foundation"));
    assert!(
        doc.content
            .contains("- **Canonical Task Title:** Task 007: Operating Modes")
    );
    assert!(doc.content.contains("  - Task 007.b: Beta"));

    let context_at = doc.content.find("## Canonical Context").unwrap();
    let body_at = doc.content.find("# Task 007: Operating Modes").unwrap();
    assert!(context_at < body_at);
}

#[test]
fn test_refine_subtask_uses_canonical_subtask_title() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector
        .refine(Pass::Tasks, "# Task 007.a: Old Alpha Title\n")
        .unwrap();

    assert_eq!(doc.outcome, Outcome::Refined);
    assert!(doc.content.contains("- **Canonical Task Title:** Task 007.a: Alpha"));
}

#[test]
fn test_refine_epic_document() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector.refine(Pass::Epics, "# EPIC 2 — Runtime\n").unwrap();

    assert_eq!(doc.outcome, Outcome::Refined);
    assert!(doc.content.starts_with(
        "# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS EPIC SUMMARY"
    ));
    assert!(doc.content.contains("- Task 010: Model Provider Interface"));
}

#[test]
fn test_refine_unknown_task_is_header_only() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector.refine(Pass::Tasks, "# Task 999: Ghost\n").unwrap();

    assert_eq!(doc.outcome, Outcome::NoCanonicalEntry);
    assert_eq!(doc.source.as_deref(), Some("Task 999"));
    assert!(!doc.content.contains("Canonical Context"));
    assert!(doc.content.ends_with("# Task 999: Ghost\n"));
}

#[test]
fn test_refine_unknown_subtask_uses_parent_title() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector
        .refine(Pass::Tasks, "# Task 007.c: Gamma\n\n---\n\nBody.\n")
        .unwrap();

    assert_eq!(doc.outcome, Outcome::Refined);
    assert_eq!(doc.source.as_deref(), Some("Task 007.c"));
    assert!(doc.content.contains("Canonical Context"));
    assert!(doc.content.contains("- **Canonical Task Title:** Task 007.c: Operating Modes"));
    assert!(doc.content.contains("  - Task 007.a: Alpha"));
    assert!(doc.content.contains("  - Task 007.b: Beta"));
}

#[test]
fn test_refine_wrong_kind_is_unclassified() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector.refine(Pass::Epics, "# Task 007: Operating Modes\n").unwrap();
    assert_eq!(doc.outcome, Outcome::Unclassified);
    assert!(doc.source.is_none());

    let doc = injector.refine(Pass::Tasks, "just notes\n").unwrap();
    assert_eq!(doc.outcome, Outcome::Unclassified);
    assert!(doc.content.ends_with("just notes\n"));
}

#[test]
fn test_refine_replaces_stub_instructions() {
    let (list, templates) = fixture();
    let settings = StubSettings::default();
    let writer = StubWriter::new(&settings, &templates, Path::new("unused"));
    let stub = writer.render(list.index().task(7).unwrap(), None).unwrap();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let doc = injector.refine(Pass::Tasks, &stub.content).unwrap();

    assert_eq!(doc.content.matches(INSTRUCTION_MARKER).count(), 1);
    assert!(!doc.content.contains("NOW PROCEED TO EXPAND THE TASK STUB"));
    assert!(doc.content.contains("**END OF TASK 007**"));
}

#[test]
fn test_refine_is_idempotent() {
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    for (pass, text) in [
        (Pass::Tasks, "# Task 007: Operating Modes\n\n---\n\nBody.\n"),
        (Pass::Tasks, "# Task 999: Ghost\n"),
        (Pass::Tasks, "loose notes without a heading\n"),
        (Pass::Epics, "# EPIC 1 — Foundation\n\nOverview.\n"),
    ] {
        let once = injector.refine(pass, text).unwrap();
        let twice = injector.refine(pass, &once.content).unwrap();
        assert_eq!(once.content, twice.content, "not idempotent for {text:?}");
        assert_eq!(once.outcome, twice.outcome);
    }
}

// =========================================================================
// Passes
// =========================================================================

#[test]
fn test_run_pass_writes_flat_normalized_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("docs");
    write(
        &input.join("tasks/task-007-operating-modes (NEEDS-REFINEMENT).md"),
        "# Task 007: Operating Modes\n",
    );
    write(&input.join("tasks/nested/task-007a-alpha.md"), "# Task 007.a: Alpha\n");
    write(&input.join("tasks/readme.md"), "notes\n");
    write(&input.join("tasks/ignored.txt"), "# Task 000: Nope\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let report = injector
        .run_pass(Pass::Tasks, &input, &dir.path().join("out"))
        .unwrap();

    assert_eq!(report.written(), 3);
    assert_eq!(
        names(&report.refined),
        vec!["task-007a-alpha.md", "task-007-operating-modes.md"]
    );
    assert_eq!(names(&report.unclassified), vec!["readme.md"]);
    assert!(report.failures.is_empty());
    assert!(dir.path().join("out/refined-tasks/task-007-operating-modes.md").is_file());
    assert!(dir.path().join("out/refined-tasks/task-007a-alpha.md").is_file());
}

#[test]
fn test_run_pass_falls_back_to_input_root() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("epic-1.md"), "# EPIC 1 — Foundation\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let out = dir.path().join("refined");
    let report = injector.run_pass(Pass::Epics, dir.path(), &out).unwrap();

    assert_eq!(names(&report.refined), vec!["epic-1.md"]);
    assert!(out.join("refined-epics/epic-1.md").is_file());
}

#[test]
fn test_run_pass_skips_output_root() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("task.md"), "# Task 000: Repository Layout\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let out = dir.path().join("refined");

    injector.run_pass(Pass::Tasks, dir.path(), &out).unwrap();
    let second = injector.run_pass(Pass::Tasks, dir.path(), &out).unwrap();

    assert_eq!(second.written(), 1);
    assert!(!out.join("refined-tasks/refined-tasks").exists());
}

#[test]
fn test_run_pass_rerun_is_stable() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("in/task.md"), "# Task 000: Repository Layout\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let out = dir.path().join("out");
    let target = out.join("refined-tasks/task.md");

    injector.run_pass(Pass::Tasks, &dir.path().join("in"), &out).unwrap();
    let first = std::fs::read_to_string(&target).unwrap();

    // Feed the output back in as input.
    std::fs::copy(&target, dir.path().join("in/task.md")).unwrap();
    injector.run_pass(Pass::Tasks, &dir.path().join("in"), &out).unwrap();
    let second = std::fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_run_pass_writes_manifest() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("in/a.md"), "# Task 007: Operating Modes\n");
    write(&dir.path().join("in/b.md"), "# Task 999: Ghost\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let report = injector
        .run_pass(Pass::Tasks, &dir.path().join("in"), &dir.path().join("out"))
        .unwrap();

    assert_eq!(names(&report.no_canonical_entry), vec!["b.md"]);
    let manifest = Manifest::load(&report.manifest.unwrap()).unwrap();
    assert_eq!(manifest.command, "refine");
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.artifacts[0].kind, ArtifactKind::RefinedTask);
    assert_eq!(manifest.artifacts[0].template, "task-context@v1");
    assert_eq!(manifest.artifacts[1].kind, ArtifactKind::HeaderOnly);
    assert!(
        dir.path()
            .join("out/refined-tasks")
            .join(MANIFEST_FILE)
            .is_file()
    );
}

#[test]
fn test_run_pass_missing_input() {
    let dir = TempDir::new().unwrap();
    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");

    let err = injector
        .run_pass(Pass::Tasks, &dir.path().join("nope"), &dir.path().join("out"))
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_run_all_modes() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("in/tasks/t.md"), "# Task 000: Repository Layout\n");
    write(&dir.path().join("in/epics/e.md"), "# EPIC 1 — Foundation\n");

    let (list, templates) = fixture();
    let injector = ContextInjector::new(&list, &templates, "task-list.md");
    let out = dir.path().join("out");
    let reports = injector
        .run(RefineMode::All, &dir.path().join("in"), &out)
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].pass, Pass::Tasks);
    assert_eq!(names(&reports[0].refined), vec!["t.md"]);
    assert_eq!(reports[1].pass, Pass::Epics);
    assert_eq!(names(&reports[1].refined), vec!["e.md"]);

    let only_epics = injector
        .run(RefineMode::Epics, &dir.path().join("in"), &out)
        .unwrap();
    assert_eq!(only_epics.len(), 1);
    assert_eq!(only_epics[0].pass, Pass::Epics);
}
