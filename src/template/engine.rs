//! `{variable}` substitution for document templates.
//!
//! - `{name}` substitutes the value of `name`
//! - `{{` and `}}` render literal braces
//!
//! Undefined variables are errors, never empty strings, so a typo in a
//! template cannot silently produce a stub with a blank metadata field.

use std::collections::BTreeMap;
use thiserror::Error;

/// Variables available to a template render.
pub type Vars = BTreeMap<String, String>;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },

    /// A subtask index has no single-letter suffix (more than 26 subtasks).
    #[error("subtask index {index} of task {task:03} has no letter suffix")]
    SuffixOverflow { task: u32, index: usize },
}

/// Render a template string by substituting variables.
///
/// ```
/// use taskdoc::template::{render_template, vars};
///
/// let v = vars([("title", "Repo layout")]);
/// assert_eq!(render_template("# {title}", &v).unwrap(), "# Repo layout");
/// ```
pub fn render_template(template: &str, variables: &Vars) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` passes through.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Vars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
