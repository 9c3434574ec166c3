//! CLI argument parsing for agent-scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument structure; the pipeline that consumes it
//! lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate agent definition files from a plain-language description.
///
/// The generated file has a YAML header (name, description, tools, model, ...)
/// followed by a system prompt assembled from the requirements. Without
/// NAME and REQUIREMENTS (or with --interactive) every value is asked for on
/// the terminal.
#[derive(Parser, Debug)]
#[command(name = "agent-scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Agent name (normalized to lowercase-with-hyphens).
    #[arg(requires = "requirements")]
    pub name: Option<String>,

    /// What the agent should do, in plain language.
    pub requirements: Option<String>,

    /// Ask for every value interactively.
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "name",
            "requirements",
            "tools",
            "model",
            "proactive",
            "permission_mode",
            "skills",
            "color",
            "output",
        ]
    )]
    pub interactive: bool,

    /// Tools the agent may use; omit to inherit all tools.
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub tools: Option<Vec<String>>,

    /// Model the agent runs on [default: sonnet].
    #[arg(long, value_parser = ["sonnet", "opus", "haiku", "inherit"])]
    pub model: Option<String>,

    /// Mark the agent for proactive use.
    #[arg(long)]
    pub proactive: bool,

    /// Permission handling for the agent [default: default].
    #[arg(
        long,
        value_parser = ["default", "acceptEdits", "bypassPermissions", "plan", "ignore"]
    )]
    pub permission_mode: Option<String>,

    /// Skills the agent draws on (informational).
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub skills: Option<Vec<String>>,

    /// Display color, a name or hex code.
    #[arg(long)]
    pub color: Option<String>,

    /// Project root; agents are saved under <PATH>/.claude/agents.
    #[arg(long, env = "CLAUDE_PROJECT_DIR")]
    pub project_path: Option<PathBuf>,

    /// Write the agent file here instead of the project agents directory.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the generated configuration as JSON instead of saving it.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// True when values should be collected from the terminal.
    pub fn wants_interactive(&self) -> bool {
        self.interactive || self.name.is_none()
    }
}
