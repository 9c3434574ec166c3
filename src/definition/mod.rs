//! Agent definition model.
//!
//! An [`AgentConfig`] is the fully synthesized and validated description of one
//! agent. It is built once per run and then either rendered to a markdown file
//! (see [`crate::render`]) or dumped as JSON.
//!
//! # Field invariants
//!
//! - `name` is normalized and passes [`validate_name`]
//! - `tools` is `None` ("inherit all") or a non-empty list of allow-listed tools
//! - `model` and `permission_mode` are typed, so they are always valid

mod naming;
mod request;
mod types;


pub use naming::{normalize_name, validate_name};
pub use request::AgentRequest;
pub use types::{Model, PermissionMode, TOOLS, is_known_tool};

use serde::Serialize;

/// A complete agent definition.
///
/// Serializes with camelCase keys in declaration order, which is the layout of
/// the `--json` dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Normalized identifier, also the file stem.
    pub name: String,

    /// One-paragraph summary used by the runtime to decide when to delegate.
    pub description: String,

    /// Instruction body written after the header.
    pub system_prompt: String,

    /// Explicit tool list; `None` inherits every tool.
    pub tools: Option<Vec<String>>,

    pub model: Model,

    pub permission_mode: PermissionMode,

    /// Informational skill names, not validated.
    pub skills: Option<Vec<String>>,

    /// Display color, either a name or a hex code.
    pub color: Option<String>,
}
