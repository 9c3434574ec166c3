//! Agent file rendering and parsing.
//!
//! Agent files use a YAML header delimited by `---` lines, a blank line, and
//! then the system prompt as a markdown body:
//!
//! ```text
//! ---
//! name: code-reviewer
//! description: 'Use this agent for: Review pull requests'
//! tools:
//! - Read
//! - Grep
//! model: opus
//! ---
//!
//! # code-reviewer
//! ...
//! ```
//!
//! Header keys always appear in the order name, description, tools, model,
//! permissionMode, skills, color. Fields that are absent or equal to their
//! default are omitted.

mod io;


pub use io::{agents_dir, default_output_path, output_target, save, target_path};

use crate::definition::{AgentConfig, Model, PermissionMode};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header fences.
const FENCE: &str = "---";

/// The YAML header of an agent file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentHeader {
    pub name: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    /// Omitted when the agent uses the default model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,

    /// Omitted when the agent uses the default permission mode.
    #[serde(
        rename = "permissionMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub permission_mode: Option<PermissionMode>,

    /// Comma-separated skill names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Keys written by other tools, preserved when reading existing files.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl From<&AgentConfig> for AgentHeader {
    fn from(config: &AgentConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            tools: config.tools.clone().filter(|tools| !tools.is_empty()),
            model: Some(config.model).filter(|model| !model.is_default()),
            permission_mode: Some(config.permission_mode).filter(|mode| !mode.is_default()),
            skills: config
                .skills
                .as_ref()
                .filter(|skills| !skills.is_empty())
                .map(|skills| skills.join(", ")),
            color: config.color.clone(),
            extra: BTreeMap::new(),
        }
    }
}

/// Render an agent definition as file content.
pub fn render(config: &AgentConfig) -> Result<String> {
    AgentFile {
        header: AgentHeader::from(config),
        body: config.system_prompt.clone(),
    }
    .to_string()
}

/// A parsed agent file.
#[derive(Debug, Clone)]
pub struct AgentFile {
    pub header: AgentHeader,
    /// Everything after the blank line that follows the closing fence.
    pub body: String,
}

impl AgentFile {
    /// Serialize the header and body.
    ///
    /// The output always ends with a newline.
    pub fn to_string(&self) -> Result<String> {
        let header_yaml = serde_yaml::to_string(&self.header).map_err(|e| {
            ScaffoldError::Header(format!("failed to serialize header: {}", e))
        })?;

        let mut output = String::new();
        output.push_str(FENCE);
        output.push('\n');
        output.push_str(&header_yaml);
        output.push_str(FENCE);
        output.push_str("\n\n");
        output.push_str(&self.body);
        if !output.ends_with('\n') {
            output.push('\n');
        }

        Ok(output)
    }

    /// Parse an agent file from its content.
    ///
    /// Both LF and CRLF line endings are accepted; the returned body uses LF.
    pub fn parse(content: &str) -> Result<Self> {
        let normalized = content.replace("\r\n", "\n");

        let rest = normalized
            .strip_prefix("---\n")
            .ok_or_else(|| {
                ScaffoldError::Header("agent file must start with a '---' line".to_string())
            })?;

        let (header_yaml, after_fence) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let closing = rest.find("\n---").ok_or_else(|| {
                ScaffoldError::Header("agent file is missing the closing '---' line".to_string())
            })?;
            (&rest[..closing + 1], &rest[closing + 1 + FENCE.len()..])
        };

        let header: AgentHeader = serde_yaml::from_str(header_yaml)
            .map_err(|e| ScaffoldError::Header(format!("failed to parse header: {}", e)))?;

        // Drop the rest of the fence line, then the separating blank line.
        let body = after_fence.strip_prefix('\n').unwrap_or(after_fence);
        let body = body.strip_prefix('\n').unwrap_or(body);

        Ok(Self {
            header,
            body: body.to_string(),
        })
    }
}
