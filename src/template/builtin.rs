//! Built-in template bodies.

/// Instruction block placed at the top of every generated stub.
pub(super) const STUB_INSTRUCTIONS: &str = r#"# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS TASK

**READ THIS SECTION CAREFULLY BEFORE PROCEEDING**

You are being asked to expand this task stub into a complete, production-ready task specification for the **Agentic Coding Bot (Acode)**.

## Required Sections and Quality Standards

Your completed task MUST include all of the following sections with the specified level of detail:

### 1. Header (Already Complete)
- Priority, Tier, Complexity, Phase, Dependencies are already filled out
- Do not modify these unless explicitly instructed by the task list

### 2. Description (Expand)
- **Length:** 3–6 paragraphs
- Include: Business Value, Technical Details, Integration points (reference other tasks), Constraints/Considerations
- Must clearly state what is **in scope** and **out of scope**

### 3. Use Cases (3 scenarios)
Use personas:
- **Neil** (Owner/Developer)
- **DevBot** (Automation runner)
- **Jordan** (Contributor)

Each scenario:
- 10–15 lines
- Before/After workflow
- Explicit outcomes and verification cues

### 4. User Manual Documentation
- Overview
- Step-by-step instructions (commands/config paths)
- Settings/Configuration
- Best Practices (5–7)
- Troubleshooting (3–5)
- **Length:** 150–300 lines (unless task requires more)

### 5. Acceptance Criteria / Definition of Done
- **Length:** 40–80 items (depending on task size)
- Must be objectively verifiable checkboxes
- Include categories: Functionality, Safety/Policy, UX/CLI, Logging/Audit, Performance, Docs, Tests

### 6. Testing Requirements (All 5 types)
- Unit tests (5–8)
- Integration tests (3–5)
- End-to-End tests (3–5)
- Performance tests (3–4 benchmarks with targets)
- Regression tests (list impacted areas or state N/A)

### 7. User Verification Steps
- 8–10 manual scenarios with “Verify:” expectations

### 8. Implementation Prompt for Claude
- 100–250 lines minimum
- Include file paths, class names, interfaces, and why decisions are made
- Must respect Clean Architecture boundaries (Domain → Application → Infrastructure → CLI)
- Must include validation steps and next steps

## Quality Checklist
- [ ] No TODOs/placeholders remain
- [ ] AC/DoD is measurable and complete
- [ ] Tooling, safety, and docs are included
- [ ] Fits the repo structure established by Task 000
- [ ] References Task 001 constraints where applicable

---

**NOW PROCEED TO EXPAND THE TASK STUB BELOW INTO A COMPLETE SPECIFICATION**

---

"#;

// Metadata lines end in two spaces (Markdown hard line break).
pub(super) const STUB_BODY: &str = "# Task {task_id}: {title}\n\
\n\
**Priority:** {priority} / {priority_scale}  \n\
**Tier:** {tier}  \n\
**Complexity:** {complexity} (Fibonacci points)  \n\
**Phase:** {phase}  \n\
**Dependencies:** {dependencies}  \n\
\n\
---\n\
\n\
## Description (EXPAND THIS)\n\
\n\
{description}\n\
\n\
---\n\
\n\
## Use Cases (CREATE 3 DETAILED SCENARIOS)\n\
\n\
---\n\
\n\
## User Manual Documentation (WRITE COMPLETE DOCUMENTATION)\n\
\n\
---\n\
\n\
## Acceptance Criteria / Definition of Done (CREATE COMPREHENSIVE CHECKLIST)\n\
\n\
---\n\
\n\
## Testing Requirements (WRITE ALL 5 TEST TYPES)\n\
\n\
---\n\
\n\
## User Verification Steps (CREATE 8-10 MANUAL TESTS)\n\
\n\
---\n\
\n\
## Implementation Prompt for Claude (WRITE DETAILED GUIDE)\n\
\n\
---\n\
\n\
**END OF TASK {task_id}**\n";

pub(super) const TASK_HEADER: &str = r#"# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS TASK (REFINED SPEC TARGET)

You are expanding a **task stub** into a *complete, enterprise-grade, implementation-ready* specification for **Agentic Coding Bot (Acode)**.

These specs must be on par with our e-commerce task samples:
- Typical length: **8,457–22,968 words** (target **~10k–18k** unless task is genuinely smaller/larger)
- Acceptance Criteria / Definition of Done: typically **103–341 checkboxes** (target **~180–260**)

## Non-negotiable quality bar
- Write as if a mediocre automation engineer will implement it verbatim.
- No “hand-wavy” language (avoid: *should*, *ideally*, *nice to have*). Use *MUST* and *MUST NOT*.
- Every section must be objectively testable or auditable.
- Respect Clean Architecture boundaries (Domain → Application → Infrastructure → CLI).
- Respect Task 001 constraints (no external LLM APIs; mode rules).

## Required Sections (all required; do not delete)
1) Description
   - 6–12 paragraphs
   - Include: business value, scope boundaries, integration points (with task numbers), failure modes, assumptions
2) Glossary / Terms (10–25 entries where relevant)
3) Out-of-Scope (explicit bullets)
4) Functional Requirements (grouped; 40–120 items)
5) Non-Functional Requirements (security, performance, reliability; 20–60 items)
6) User Manual Documentation
   - 250–600 lines typical
   - Include: quick start, config knobs, CLI examples, best practices, troubleshooting, FAQs
7) Acceptance Criteria / Definition of Done
   - Target: 180–260 checkbox items
   - Must include categories: Functionality, Safety/Policy, CLI/UX, Logging/Audit, Performance, Docs, Tests, Compatibility
8) Testing Requirements (all 5 types)
   - Unit (15–30)
   - Integration (10–20)
   - E2E (8–15)
   - Performance/Benchmarks (5–10, with targets)
   - Regression (explicit impacted areas)
9) User Verification Steps
   - 12–20 scenarios with “Verify:” expectations
10) Implementation Prompt
   - 200–600 lines
   - Must include: file paths, class/interface names, contracts, error codes, logging fields
   - Must include “Validation checklist before merge”
   - Must include “Rollout plan” (even if local-only)

## Anti-footgun requirements
- Specify exit codes for CLI errors
- Specify logging schema fields
- Specify default config values and precedence
- Specify how secrets are redacted in logs/artifacts

---

"#;

pub(super) const EPIC_HEADER: &str = r#"# INSTRUCTIONS FOR CLAUDE TO COMPLETE THIS EPIC SUMMARY (REFINED SPEC TARGET)

You are expanding an **epic stub** into a complete EPIC specification for **Agentic Coding Bot (Acode)**.

Quality bar:
- This EPIC doc must make it easy to implement every task in the epic.
- It must define boundaries, shared interfaces, and cross-cutting constraints.

## Required Sections
1) Epic Overview (purpose, boundaries, dependencies)
2) Outcomes (10–25)
3) Non-Goals (10–25)
4) Architecture & Integration Points (interfaces, events, data contracts)
5) Operational Considerations (modes/safety/audit)
6) Acceptance Criteria / Definition of Done (50–120 checkboxes)
7) Risks & Mitigations (12+)
8) Milestone Plan (3–7 milestones mapping to tasks)
9) “Definition of Epic Complete” checklist (20–40)

---

"#;

pub(super) const TASK_CONTEXT: &str = r#"## Canonical Context (from {source})

- **Epic:** {epic_code} — {epic_title}
- **Canonical Task Title:** Task {task_id}: {canonical_title}
- **Sibling Subtasks (if applicable):**
{siblings}

- **Hard constraints reminder:** MUST comply with Task 001 operating modes and the “no external LLM API” constraint set.
- **Repo contract reminder:** MUST align with Task 002 `.agent/config.yml` contract where relevant.

---

"#;

pub(super) const EPIC_CONTEXT: &str = r#"## Canonical Context (from {source})

- **Epic:** {epic_code} — {epic_title}
- **Tasks in this epic:**
{task_lines}

---

"#;
