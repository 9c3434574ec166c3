//! Interactive collection of agent parameters.
//!
//! A [`PromptSession`] asks for the same values the command-line flags
//! provide, one prompt at a time. It is generic over its input and output so
//! the whole conversation can be scripted in tests.
//!
//! # Answer formats
//!
//! - free text is terminated by a line containing only `END` (any case)
//! - tools: `all`, `none` / blank, or comma-separated 1-based indices
//! - model and permission mode: a menu number, blank picks the first entry
//! - output location: project, user, or a custom path

use crate::definition::{
    AgentRequest, Model, PermissionMode, TOOLS, normalize_name, validate_name,
};
use crate::error::{Result, ScaffoldError};
use crate::render::{agents_dir, output_target};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Line that ends a multiline answer.
const END_MARKER: &str = "END";

/// Parsed answer to the tool selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChoice {
    /// Every allow-listed tool.
    All,
    /// No explicit list; the agent inherits all tools.
    Inherit,
    /// Tools picked by index. May be empty if every index was out of range.
    Picked(Vec<String>),
    /// The answer was not `all`, `none`, or a list of numbers.
    Unparsable,
}

/// Parse the tool selection answer.
pub fn parse_tool_choice(response: &str) -> ToolChoice {
    let response = response.trim();
    if response.eq_ignore_ascii_case("all") {
        return ToolChoice::All;
    }
    if response.is_empty() || response.eq_ignore_ascii_case("none") {
        return ToolChoice::Inherit;
    }

    let mut picked: Vec<String> = Vec::new();
    for token in response.split(',') {
        let Ok(index) = token.trim().parse::<i64>() else {
            return ToolChoice::Unparsable;
        };
        // Out-of-range indices, zero and negatives included, are skipped.
        let position = usize::try_from(index).ok().and_then(|n| n.checked_sub(1));
        if let Some(tool) = position.and_then(|i| TOOLS.get(i)) {
            let tool = tool.to_string();
            if !picked.contains(&tool) {
                picked.push(tool);
            }
        }
    }
    ToolChoice::Picked(picked)
}

/// Pick a 1-based entry from `options`, falling back to the default.
pub fn parse_menu_choice<T: Copy + Default>(response: &str, options: &[T]) -> T {
    response
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or_default()
}

/// Where the agent file should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// `<project>/.claude/agents`, shared with the repository.
    #[default]
    Project,
    /// `<home>/.claude/agents`, personal to the user.
    User,
    /// A path entered by the user.
    Custom,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Project, Location::User, Location::Custom];
}

/// Resolved answer to the save location prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Project root the default agents directory hangs off.
    pub project_path: PathBuf,
    /// Explicit agent file; `None` saves under the project agents directory.
    pub output: Option<PathBuf>,
}

/// Split a comma-separated answer, dropping blank entries.
fn parse_list(response: &str) -> Option<Vec<String>> {
    let items: Vec<String> = response
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// A prompt/response conversation over a reader and a writer.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line. EOF reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default().trim().to_string())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Read lines until one is `END` (trimmed, any case) or input runs out.
    ///
    /// The joined text is trimmed.
    pub fn read_multiline(&mut self) -> Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim().eq_ignore_ascii_case(END_MARKER) {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n").trim().to_string())
    }

    /// Ask a yes/no question. A blank answer returns `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{} [{}]: ", question, hint))?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Show the numbered tool list and read a selection.
    pub fn choose_tools(&mut self) -> Result<Option<Vec<String>>> {
        self.say("\nAvailable tools:")?;
        for (i, tool) in TOOLS.iter().enumerate() {
            self.say(&format!("  {:>2}. {}", i + 1, tool))?;
        }
        let response =
            self.ask("Select tools ('all', 'none' to inherit, or numbers like 1,3,5) [none]: ")?;

        Ok(match parse_tool_choice(&response) {
            ToolChoice::All => Some(all_tools()),
            ToolChoice::Inherit => None,
            ToolChoice::Picked(tools) => Some(tools),
            ToolChoice::Unparsable => {
                tracing::warn!(
                    response = %response,
                    "could not parse tool selection, selecting all tools"
                );
                Some(all_tools())
            }
        })
    }

    pub fn choose_model(&mut self) -> Result<Model> {
        self.say("\nModel:")?;
        for (i, model) in Model::ALL.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, model))?;
        }
        let response = self.ask("Choose a model [1]: ")?;
        Ok(parse_menu_choice(&response, &Model::ALL))
    }

    pub fn choose_permission_mode(&mut self) -> Result<PermissionMode> {
        self.say("\nPermission mode:")?;
        for (i, mode) in PermissionMode::ALL.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, mode))?;
        }
        let response = self.ask("Choose a permission mode [1]: ")?;
        Ok(parse_menu_choice(&response, &PermissionMode::ALL))
    }

    /// Ask where to save the agent.
    ///
    /// The project location asks for the project root, defaulting to
    /// `project_path`, and leaves the file path to the save step. Choosing
    /// the user location creates the personal agents directory right away.
    pub fn choose_output(
        &mut self,
        name: &str,
        project_path: &Path,
        home: Option<&Path>,
    ) -> Result<Destination> {
        self.say("\nSave location:")?;
        self.say("  1. Project (.claude/agents, shared with the repository)")?;
        self.say("  2. User (~/.claude/agents, personal)")?;
        self.say("  3. Custom path")?;
        let response = self.ask("Choose a location [1]: ")?;

        let output = match parse_menu_choice(&response, &Location::ALL) {
            Location::Project => {
                let answer = self.ask(&format!("Project path [{}]: ", project_path.display()))?;
                if !answer.is_empty() {
                    return Ok(Destination {
                        project_path: PathBuf::from(answer),
                        output: None,
                    });
                }
                None
            }
            Location::User => {
                let home = home.ok_or_else(|| {
                    ScaffoldError::UserError(
                        "could not determine the home directory for the user location"
                            .to_string(),
                    )
                })?;
                let dir = agents_dir(home);
                fs::create_dir_all(&dir)
                    .map_err(|e| ScaffoldError::io("create directory", &dir, e))?;
                Some(dir.join(format!("{}.md", name)))
            }
            Location::Custom => {
                let raw = self.ask("Output path: ")?;
                if raw.is_empty() {
                    tracing::warn!("no output path given, using the project location");
                    None
                } else {
                    Some(output_target(Path::new(&raw), name))
                }
            }
        };

        Ok(Destination {
            project_path: project_path.to_path_buf(),
            output,
        })
    }

    /// Run the full prompt sequence.
    ///
    /// An empty name or empty requirements is a user error.
    pub fn collect(&mut self, project_path: PathBuf, home: Option<&Path>) -> Result<AgentRequest> {
        self.say("Create a new agent\n")?;

        let name = normalize_name(&self.ask("Agent name: ")?);
        validate_name(&name)?;

        self.say(&format!(
            "\nDescribe what the agent should do. Finish with a line containing only {}:",
            END_MARKER
        ))?;
        let requirements = self.read_multiline()?;
        if requirements.is_empty() {
            return Err(ScaffoldError::UserError(
                "agent requirements are required".to_string(),
            ));
        }

        let tools = self.choose_tools()?;
        let model = self.choose_model()?;
        let proactive = self.confirm("\nUse this agent proactively?", false)?;
        let permission_mode = self.choose_permission_mode()?;
        let skills = parse_list(&self.ask("\nSkills (comma-separated, blank for none): ")?);
        let color = Some(self.ask("Color (name or hex, blank for none): ")?)
            .filter(|color| !color.is_empty());
        let destination = self.choose_output(&name, &project_path, home)?;

        Ok(AgentRequest {
            name,
            requirements,
            tools,
            model: model.to_string(),
            proactive,
            permission_mode: permission_mode.to_string(),
            skills,
            color,
            output: destination.output,
            project_path: destination.project_path,
        })
    }
}

fn all_tools() -> Vec<String> {
    TOOLS.iter().map(|tool| tool.to_string()).collect()
}
