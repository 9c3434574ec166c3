//! Allow-list validation for agent fields.
//!
//! Validation never fails. Unknown values are dropped or replaced with the
//! field default, and each substitution is reported as a
//! [`ValidationWarning`] alongside the cleaned value so callers decide how to
//! surface it.


use crate::definition::{Model, PermissionMode, is_known_tool};
use thiserror::Error;

/// A rejected input value and what was done about it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("unknown tool '{0}' ignored")]
    UnknownTool(String),

    #[error("unknown model '{0}', using 'sonnet'")]
    UnknownModel(String),

    #[error("unknown permission mode '{0}', using 'default'")]
    UnknownPermissionMode(String),
}

/// A validated value plus the warnings produced while cleaning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    pub value: T,
    pub warnings: Vec<ValidationWarning>,
}

impl<T> Checked<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Move the warnings into `sink` and return the value.
    pub fn into_value(self, sink: &mut Vec<ValidationWarning>) -> T {
        sink.extend(self.warnings);
        self.value
    }
}

/// Keep only allow-listed tools, preserving first-seen order.
///
/// Returns `None` (inherit all tools) when nothing was requested or nothing
/// survived filtering.
pub fn validate_tools(requested: Option<&[String]>) -> Checked<Option<Vec<String>>> {
    let Some(requested) = requested else {
        return Checked::clean(None);
    };

    let mut kept: Vec<String> = Vec::new();
    let mut warnings = Vec::new();
    for tool in requested {
        if !is_known_tool(tool) {
            warnings.push(ValidationWarning::UnknownTool(tool.clone()));
        } else if !kept.contains(tool) {
            kept.push(tool.clone());
        }
    }

    Checked {
        value: (!kept.is_empty()).then_some(kept),
        warnings,
    }
}

/// Parse a model name, falling back to the default.
pub fn validate_model(requested: &str) -> Checked<Model> {
    match requested.parse::<Model>() {
        Ok(model) => Checked::clean(model),
        Err(()) => Checked {
            value: Model::default(),
            warnings: vec![ValidationWarning::UnknownModel(requested.to_string())],
        },
    }
}

/// Parse a permission mode, falling back to the default.
pub fn validate_permission_mode(requested: &str) -> Checked<PermissionMode> {
    match requested.parse::<PermissionMode>() {
        Ok(mode) => Checked::clean(mode),
        Err(()) => Checked {
            value: PermissionMode::default(),
            warnings: vec![ValidationWarning::UnknownPermissionMode(
                requested.to_string(),
            )],
        },
    }
}
