//! Component selection and installation.
//!
//! Unlike pipeline steps, component installs are independent: one failure
//! is recorded and the remaining components are still attempted.

use super::recipes;
use crate::config::{ConfigStore, KEY_DEFAULT_COMPONENTS, KEY_DEFAULT_RECIPE};
use crate::i18n::Translator;
use crate::ui::{self, Prompter};
use crate::utils::command::{self, CommandRunner};
use std::path::Path;

/// Components offered by the interactive picker, sorted
pub const AVAILABLE_COMPONENTS: [&str; 18] = [
    "alert",
    "avatar",
    "badge",
    "button",
    "card",
    "checkbox",
    "dialog",
    "dropdown-menu",
    "form",
    "input",
    "label",
    "radio-group",
    "select",
    "slider",
    "sonner",
    "switch",
    "table",
    "textarea",
];

/// Pre-checked in the picker when `default_components` is not configured
pub const DEFAULT_SELECTION: [&str; 4] = ["button", "card", "form", "input"];

pub const ADD_COMMAND: &str = "npx shadcn@latest add";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    Explicit,
    Recipe(String),
    ConfigRecipe(String),
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub source: SelectionSource,
    pub components: Vec<String>,
}

/// Resolve what to install. First applicable source wins: explicit list,
/// recipe flag, `default_recipe` from config, interactive pick.
pub fn select_components(
    explicit: &[String],
    recipe: Option<&str>,
    config: &ConfigStore,
    prompter: &dyn Prompter,
    translator: &Translator,
) -> Selection {
    let explicit: Vec<String> = explicit
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if !explicit.is_empty() {
        return Selection {
            source: SelectionSource::Explicit,
            components: explicit,
        };
    }

    if let Some(name) = recipe {
        match recipes::get(name) {
            Some(components) => {
                ui::info(&translator.format("recipe_from_flag", &[("recipe", name)]));
                return Selection {
                    source: SelectionSource::Recipe(name.to_string()),
                    components: to_owned(components),
                };
            }
            None => ui::warning(&translator.format("recipe_unknown", &[("recipe", name)])),
        }
    }

    if let Some(name) = config.get_str(KEY_DEFAULT_RECIPE) {
        match recipes::get(name) {
            Some(components) => {
                ui::info(&translator.format("recipe_from_config", &[("recipe", name)]));
                return Selection {
                    source: SelectionSource::ConfigRecipe(name.to_string()),
                    components: to_owned(components),
                };
            }
            None => ui::warning(&translator.format("recipe_unknown", &[("recipe", name)])),
        }
    }

    Selection {
        source: SelectionSource::Interactive,
        components: prompt_for_components(config, prompter, translator),
    }
}

/// Interactive pick from the catalogue. An interrupted prompt selects nothing.
pub fn prompt_for_components(
    config: &ConfigStore,
    prompter: &dyn Prompter,
    translator: &Translator,
) -> Vec<String> {
    let defaults = config
        .get_list(KEY_DEFAULT_COMPONENTS)
        .unwrap_or_else(|| to_owned(&DEFAULT_SELECTION));

    let mut options = to_owned(&AVAILABLE_COMPONENTS);
    options.sort();
    let preselected: Vec<bool> = options.iter().map(|o| defaults.contains(o)).collect();

    match prompter.multiselect(&translator.t("components_select"), &options, &preselected) {
        Some(indices) => indices
            .into_iter()
            .filter_map(|i| options.get(i).cloned())
            .collect(),
        None => {
            ui::warning(&translator.t("components_cancelled"));
            Vec::new()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub failed: Vec<String>,
}

impl InstallReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Install each component on its own; an empty list is a success
pub fn install(
    components: &[String],
    root: &Path,
    runner: &dyn CommandRunner,
    translator: &Translator,
) -> InstallReport {
    let mut report = InstallReport::default();

    if components.is_empty() {
        ui::info(&translator.t("components_none"));
        return report;
    }

    ui::info(&translator.format(
        "components_installing",
        &[("count", &components.len().to_string())],
    ));

    for component in components {
        ui::indent(
            &translator.format("component_adding", &[("component", component)]),
            2,
        );

        let succeeded = match command::quote_arg(component) {
            Some(quoted) => runner.run(&format!("{} {} -y", ADD_COMMAND, quoted), Some(root), true),
            None => {
                tracing::error!("Refusing to pass component name {:?} to the shell", component);
                false
            }
        };

        if succeeded {
            ui::success(&translator.format("component_added", &[("component", component)]));
            report.installed.push(component.clone());
        } else {
            ui::error(&translator.format("component_failed", &[("component", component)]));
            report.failed.push(component.clone());
        }
    }

    if !report.all_succeeded() {
        ui::warning(&translator.format(
            "components_failed_summary",
            &[
                ("failed", &report.failed.len().to_string()),
                ("total", &components.len().to_string()),
            ],
        ));
    }

    report
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
