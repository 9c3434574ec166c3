//! Allow-listed values for agent definition fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tools an agent definition may name explicitly.
///
/// Order matters: interactive tool selection numbers these from 1.
pub const TOOLS: &[&str] = &[
    "Read",
    "Write",
    "Grep",
    "Glob",
    "Bash",
    "Execute",
    "Search",
    "RequestUserInput",
    "AttemptCompletion",
    "KeepAlive",
    "Shell",
    "Run",
    "DeleteFile",
    "ListDirectory",
    "CreateDirectory",
    "MoveFile",
];

/// Returns true if `tool` is in [`TOOLS`] (exact, case-sensitive match).
pub fn is_known_tool(tool: &str) -> bool {
    TOOLS.contains(&tool)
}

/// Model the agent runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    #[default]
    Sonnet,
    Opus,
    Haiku,
    /// Use whatever model the parent session runs.
    Inherit,
}

impl Model {
    /// All models in menu order.
    pub const ALL: [Model; 4] = [Model::Sonnet, Model::Opus, Model::Haiku, Model::Inherit];

    pub fn as_str(self) -> &'static str {
        match self {
            Model::Sonnet => "sonnet",
            Model::Opus => "opus",
            Model::Haiku => "haiku",
            Model::Inherit => "inherit",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Model::default()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or(())
    }
}

/// How the agent runtime treats permission prompts for this agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    #[default]
    Default,
    AcceptEdits,
    BypassPermissions,
    Plan,
    Ignore,
}

impl PermissionMode {
    /// All modes in menu order.
    pub const ALL: [PermissionMode; 5] = [
        PermissionMode::Default,
        PermissionMode::AcceptEdits,
        PermissionMode::BypassPermissions,
        PermissionMode::Plan,
        PermissionMode::Ignore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionMode::Default => "default",
            PermissionMode::AcceptEdits => "acceptEdits",
            PermissionMode::BypassPermissions => "bypassPermissions",
            PermissionMode::Plan => "plan",
            PermissionMode::Ignore => "ignore",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == PermissionMode::default()
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(())
    }
}
