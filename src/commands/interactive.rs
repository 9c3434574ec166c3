//! Interactive mode: prompt for every value, preview, then save.

use super::generate::{build_config, print_json, print_summary, report_warnings, write_agent};
use crate::definition::AgentConfig;
use crate::error::Result;
use crate::prompt::PromptSession;
use crate::render::render;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Outcome of an interactive session.
#[derive(Debug)]
pub(crate) enum Decision {
    /// Save the agent, to `output` if set, else under `project_path`.
    Save {
        config: AgentConfig,
        output: Option<PathBuf>,
        project_path: PathBuf,
    },
    /// Print the agent as JSON.
    Dump(AgentConfig),
    /// The user declined the preview.
    Discard,
}

/// Execute interactive mode on the terminal.
pub fn cmd_interactive(project_path: PathBuf, json: bool) -> Result<()> {
    let home = dirs::home_dir();

    let decision = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = PromptSession::new(stdin.lock(), stdout.lock());
        run_session(&mut session, &project_path, home.as_deref(), json)?
    };

    match decision {
        Decision::Save {
            config,
            output,
            project_path,
        } => {
            let path = write_agent(&config, output.as_deref(), &project_path)?;
            println!();
            print_summary(&config, &path);
        }
        Decision::Dump(config) => print_json(&config)?,
        Decision::Discard => println!("Aborted; nothing was written."),
    }
    Ok(())
}

/// Collect, build and preview an agent over an arbitrary session.
pub(crate) fn run_session<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    project_path: &Path,
    home: Option<&Path>,
    json: bool,
) -> Result<Decision> {
    let request = session.collect(project_path.to_path_buf(), home)?;
    let checked = build_config(&request)?;
    report_warnings(&checked.warnings);
    let config = checked.value;

    if json {
        return Ok(Decision::Dump(config));
    }

    session.say("\nPreview:\n")?;
    session.say(&render(&config)?)?;

    if session.confirm("Save this agent?", true)? {
        Ok(Decision::Save {
            config,
            output: request.output,
            project_path: request.project_path,
        })
    } else {
        Ok(Decision::Discard)
    }
}
