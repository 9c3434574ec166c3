//! Command implementations for agent-scaffold.
//!
//! The CLI has a single action with two ways of collecting input:
//!
//! - direct mode: NAME and REQUIREMENTS plus flags
//! - interactive mode: every value is prompted for (see [`crate::prompt`])
//!
//! Both feed the same pipeline in [`generate`]: synthesize, validate, then
//! save or dump as JSON.

mod generate;
mod interactive;


use crate::cli::Cli;
use crate::definition::{AgentRequest, Model, PermissionMode};
use crate::error::{Result, ScaffoldError};
use std::path::PathBuf;

/// Run the command described by the parsed CLI arguments.
pub fn dispatch(cli: Cli) -> Result<()> {
    let project_path = resolve_project_path(cli.project_path.clone())?;

    if cli.wants_interactive() {
        return interactive::cmd_interactive(project_path, cli.json);
    }

    let json = cli.json;
    let request = direct_request(cli, project_path);
    generate::cmd_generate(&request, json)
}

/// `--project-path`, or the current directory.
fn resolve_project_path(project_path: Option<PathBuf>) -> Result<PathBuf> {
    match project_path {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| ScaffoldError::io("read current directory", ".", e)),
    }
}

/// Map direct-mode arguments to a request. Empty list flags mean "absent".
fn direct_request(cli: Cli, project_path: PathBuf) -> AgentRequest {
    AgentRequest {
        name: cli.name.unwrap_or_default(),
        requirements: cli.requirements.unwrap_or_default(),
        tools: cli.tools.filter(|tools| !tools.is_empty()),
        model: cli.model.unwrap_or_else(|| Model::default().to_string()),
        proactive: cli.proactive,
        permission_mode: cli
            .permission_mode
            .unwrap_or_else(|| PermissionMode::default().to_string()),
        skills: cli.skills.filter(|skills| !skills.is_empty()),
        color: cli.color,
        output: cli.output,
        project_path,
    }
}
