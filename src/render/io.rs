//! File I/O for agent files.

use super::{AgentFile, render};
use crate::definition::AgentConfig;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Directory holding agent files under a project or home directory.
pub fn agents_dir(root: &Path) -> PathBuf {
    root.join(".claude").join("agents")
}

/// Where an agent is saved when no explicit output path is given.
pub fn default_output_path(project_path: &Path, name: &str) -> PathBuf {
    agents_dir(project_path).join(format!("{}.md", name))
}

/// Resolve an explicit output path.
///
/// A directory, either existing or written with a trailing separator, gets
/// `<name>.md` appended; anything else is used as the file path.
pub fn output_target(output: &Path, name: &str) -> PathBuf {
    let raw = output.as_os_str().to_string_lossy();
    if raw.ends_with('/') || raw.ends_with(MAIN_SEPARATOR) || output.is_dir() {
        output.join(format!("{}.md", name))
    } else {
        output.to_path_buf()
    }
}

/// File an agent is written to: `output` if given, else the project default.
pub fn target_path(output: Option<&Path>, project_path: &Path, name: &str) -> PathBuf {
    match output {
        Some(output) => output_target(output, name),
        None => default_output_path(project_path, name),
    }
}

/// Write the rendered agent to `output`, or to the project's agents directory.
///
/// Parent directories are created as needed and an existing file is
/// overwritten. The write is not atomic.
pub fn save(config: &AgentConfig, output: Option<&Path>, project_path: &Path) -> Result<PathBuf> {
    let path = target_path(output, project_path, &config.name);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
    }

    let content = render(config)?;
    fs::write(&path, content).map_err(|e| ScaffoldError::io("write agent file", &path, e))?;

    Ok(path)
}

impl AgentFile {
    /// Load an agent file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ScaffoldError::io("read agent file", path, e))?;
        Self::parse(&content)
    }
}
