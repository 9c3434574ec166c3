//! The generation pipeline shared by direct and interactive mode.

use crate::definition::{AgentConfig, AgentRequest, normalize_name, validate_name};
use crate::error::{Result, ScaffoldError};
use crate::render::{AgentFile, save, target_path};
use crate::synth::synthesize;
use crate::validate::{
    Checked, ValidationWarning, validate_model, validate_permission_mode, validate_tools,
};
use std::path::{Path, PathBuf};

/// Execute direct mode: build the config, then dump it or save it.
pub fn cmd_generate(request: &AgentRequest, json: bool) -> Result<()> {
    let config = build_config(request)?;
    report_warnings(&config.warnings);

    if json {
        return print_json(&config.value);
    }

    let path = write_agent(
        &config.value,
        request.output.as_deref(),
        &request.project_path,
    )?;
    print_summary(&config.value, &path);
    Ok(())
}

/// Turn a raw request into a validated agent definition.
///
/// The name is normalized and must be safe to use as a file stem. The
/// requirements must not be blank but are otherwise used verbatim. Everything
/// else is coerced and reported as warnings.
pub fn build_config(request: &AgentRequest) -> Result<Checked<AgentConfig>> {
    let name = normalize_name(&request.name);
    validate_name(&name)?;

    if request.requirements.trim().is_empty() {
        return Err(ScaffoldError::UserError(
            "agent requirements are required".to_string(),
        ));
    }

    let synthesis = synthesize(&name, &request.requirements, request.proactive);

    let mut warnings = Vec::new();
    let tools = validate_tools(request.tools.as_deref()).into_value(&mut warnings);
    let model = validate_model(&request.model).into_value(&mut warnings);
    let permission_mode =
        validate_permission_mode(&request.permission_mode).into_value(&mut warnings);

    tracing::debug!(
        name = %name,
        model = %model,
        permission_mode = %permission_mode,
        tools = tools.as_ref().map_or(0, Vec::len),
        "built agent configuration"
    );

    Ok(Checked {
        value: AgentConfig {
            name,
            description: synthesis.description,
            system_prompt: synthesis.system_prompt,
            tools,
            model,
            permission_mode,
            skills: request.skills.clone().filter(|skills| !skills.is_empty()),
            color: request.color.clone(),
        },
        warnings,
    })
}

/// Log validation warnings on stderr.
pub(crate) fn report_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}

/// Print the configuration as pretty JSON on stdout.
pub fn print_json(config: &AgentConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Save the agent, noting when an existing definition is replaced.
pub fn write_agent(
    config: &AgentConfig,
    output: Option<&Path>,
    project_path: &Path,
) -> Result<PathBuf> {
    let target = target_path(output, project_path, &config.name);

    if target.exists() {
        match AgentFile::load(&target) {
            Ok(existing) => tracing::info!(
                path = %target.display(),
                previous = %existing.header.description,
                "overwriting existing agent '{}'",
                existing.header.name
            ),
            Err(err) => tracing::info!(
                path = %target.display(),
                "overwriting unreadable agent file: {}",
                err
            ),
        }
    }

    save(config, Some(target.as_path()), project_path)
}

pub(crate) fn print_summary(config: &AgentConfig, path: &Path) {
    let tools = config
        .tools
        .as_ref()
        .map_or_else(|| "inherit all".to_string(), |tools| tools.join(", "));

    println!("Created agent: {}", config.name);
    println!();
    println!("  Path:            {}", path.display());
    println!("  Model:           {}", config.model);
    println!("  Permission mode: {}", config.permission_mode);
    println!("  Tools:           {}", tools);
}
