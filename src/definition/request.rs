//! Raw agent parameters as collected from flags or prompts.

use std::path::PathBuf;

/// Unvalidated input for one agent.
///
/// `model` and `permission_mode` stay strings here; they are checked against
/// the allow-lists when the [`super::AgentConfig`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub name: String,
    pub requirements: String,
    pub tools: Option<Vec<String>>,
    pub model: String,
    pub proactive: bool,
    pub permission_mode: String,
    pub skills: Option<Vec<String>>,
    pub color: Option<String>,
    /// Explicit output file; `None` saves under the project agents directory.
    pub output: Option<PathBuf>,
    pub project_path: PathBuf,
}
