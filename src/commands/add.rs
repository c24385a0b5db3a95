//! `add`: install components into an initialised project.

use super::Session;
use crate::core::components;
use crate::core::detector;
use crate::core::planner::COMPONENTS_JSON;
use crate::error::{Result, ShacnifyError};
use crate::project_identity;
use crate::ui;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AddOptions {
    pub root: PathBuf,
    /// Empty means pick interactively
    pub components: Vec<String>,
}

pub fn run(session: &Session<'_>, options: &AddOptions) -> Result<()> {
    let t = &session.translator;
    let root = options.root.as_path();

    if !detector::detect(root).is_known() {
        ui::error(&t.format(
            "error_not_react",
            &[("path", &root.display().to_string())],
        ));
        return Err(ShacnifyError::FrameworkNotDetected(root.to_path_buf()));
    }

    if !root.join(COMPONENTS_JSON).is_file() {
        ui::error(&t.format(
            "not_initialized",
            &[("command", &project_identity::cli_with("init"))],
        ));
        return Err(ShacnifyError::NotInitialized(root.to_path_buf()));
    }

    let mut selected: Vec<String> = options
        .components
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if selected.is_empty() {
        selected = components::prompt_for_components(&session.config, session.prompter, t);
    }

    let report = components::install(&selected, root, session.runner, t);
    if !report.all_succeeded() {
        return Err(ShacnifyError::ComponentsFailed {
            failed: report.failed.len(),
        });
    }

    if !report.installed.is_empty() {
        ui::success(&t.t("components_done"));
    }
    Ok(())
}
