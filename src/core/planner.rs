//! Action planning.
//!
//! Builds the full list of filesystem changes `init` will make. The planner
//! may look at what is on disk but never changes it; the pipeline later
//! executes exactly these actions.

use super::types::{Action, ActionPayload, ActionVerb, FrameworkKind, Plan, PlanWarning, StepName};
use crate::utils::templates;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

pub const TAILWIND_CONFIG: &str = "tailwind.config.js";
pub const POSTCSS_CONFIG: &str = "postcss.config.js";
pub const COMPONENTS_JSON: &str = "components.json";
pub const TSCONFIG: &str = "tsconfig.json";
pub const JSCONFIG: &str = "jsconfig.json";

pub const ALIAS_PATTERN: &str = "@/*";
pub const ALIAS_TARGET: &str = "./src/*";

/// Compute the plan for `root`
pub fn build_plan(root: &Path, framework: FrameworkKind, safe_mode: bool) -> Plan {
    let mut planner = Planner {
        root,
        framework,
        safe_mode,
        actions: Vec::new(),
        warnings: Vec::new(),
    };

    planner.plan_config_files();
    if !safe_mode {
        planner.plan_src_restructure();
    }
    planner.plan_alias();
    planner.plan_shadcn();

    Plan {
        framework,
        safe_mode,
        actions: planner.actions,
        warnings: planner.warnings,
    }
}

struct Planner<'a> {
    root: &'a Path,
    framework: FrameworkKind,
    safe_mode: bool,
    actions: Vec<Action>,
    warnings: Vec<PlanWarning>,
}

impl Planner<'_> {
    fn push(
        &mut self,
        verb: ActionVerb,
        target: impl Into<PathBuf>,
        description: &'static str,
        step: StepName,
        payload: ActionPayload,
    ) {
        self.actions.push(Action {
            verb,
            target: target.into(),
            description,
            step,
            payload,
        });
    }

    fn exists(&self, target: &Path) -> bool {
        self.root.join(target).exists()
    }

    /// Create when missing, overwrite outside safe mode, otherwise leave alone
    fn plan_generated_file(
        &mut self,
        target: impl Into<PathBuf>,
        content: String,
        description: &'static str,
        step: StepName,
    ) {
        let target = target.into();
        let verb = if !self.exists(&target) {
            ActionVerb::Create
        } else if !self.safe_mode {
            ActionVerb::Overwrite
        } else {
            return;
        };
        self.push(verb, target, description, step, ActionPayload::Write(content));
    }

    fn plan_config_files(&mut self) {
        self.plan_generated_file(
            TAILWIND_CONFIG,
            templates::tailwind_config(self.framework),
            "action_tailwind_config",
            StepName::TailwindConfig,
        );
        self.plan_generated_file(
            POSTCSS_CONFIG,
            templates::postcss_config(),
            "action_postcss_config",
            StepName::TailwindConfig,
        );
        self.plan_stylesheet();
    }

    /// Idempotent by content: only plan when the directives are missing
    fn plan_stylesheet(&mut self) {
        let target = PathBuf::from(self.framework.layout().global_css);
        let path = self.root.join(&target);

        let verb = match fs::read_to_string(&path) {
            Ok(css) if templates::has_tailwind_directives(&css) => return,
            Ok(_) => ActionVerb::Overwrite,
            Err(_) if path.exists() => ActionVerb::Overwrite,
            Err(_) => ActionVerb::Create,
        };

        self.push(
            verb,
            target,
            "action_global_css",
            StepName::TailwindConfig,
            ActionPayload::PrependDirectives(templates::TAILWIND_DIRECTIVES.to_string()),
        );
    }

    fn plan_src_restructure(&mut self) {
        let layout = self.framework.layout();
        let step = StepName::RestructureSrc;

        for (target, description) in [
            (&layout.app_component, "action_app_component"),
            (&layout.app_stylesheet, "action_app_stylesheet"),
            (&layout.react_logo, "action_react_logo"),
        ] {
            if self.exists(target) {
                self.push(
                    ActionVerb::Delete,
                    target.clone(),
                    description,
                    step,
                    ActionPayload::Remove,
                );
            }
        }

        self.push(
            ActionVerb::Create,
            layout.layouts_dir.clone(),
            "action_layouts_dir",
            step,
            ActionPayload::CreateDir,
        );
        self.plan_generated_file(
            layout.main_layout.clone(),
            templates::main_layout(),
            "action_main_layout",
            step,
        );

        self.push(
            ActionVerb::Create,
            layout.pages_dir.clone(),
            "action_pages_dir",
            step,
            ActionPayload::CreateDir,
        );
        self.plan_generated_file(
            layout.home_page.clone(),
            templates::home_page(),
            "action_home_page",
            step,
        );

        self.push(
            ActionVerb::Overwrite,
            layout.entry_file.clone(),
            "action_entry_file",
            step,
            ActionPayload::Write(templates::entry_file(self.framework)),
        );
    }

    fn plan_alias(&mut self) {
        let file = compiler_options_file(self.root);
        let path = self.root.join(file);
        let (exists, existing) = match read_compiler_options(&path) {
            CompilerOptions::Missing => (false, Map::new()),
            CompilerOptions::Unreadable if self.safe_mode => {
                tracing::warn!("{} is not plain JSON, leaving it alone in safe mode", file);
                self.warnings.push(PlanWarning {
                    message: "alias_config_unreadable",
                    target: PathBuf::from(file),
                });
                return;
            }
            CompilerOptions::Unreadable => (true, Map::new()),
            CompilerOptions::Parsed(map) => (true, map),
        };

        if self.safe_mode && has_alias_mapping(&existing) {
            return;
        }

        let merged = merge_alias(existing.clone());
        if exists && merged == existing {
            return;
        }

        let content = match serde_json::to_string_pretty(&merged) {
            Ok(text) => format!("{}\n", text),
            Err(e) => {
                tracing::error!("Could not render {}: {}", file, e);
                return;
            }
        };

        let verb = if exists {
            ActionVerb::Overwrite
        } else {
            ActionVerb::Create
        };
        self.push(
            verb,
            file,
            "action_alias_config",
            StepName::AliasConfig,
            ActionPayload::Write(content),
        );
    }

    fn plan_shadcn(&mut self) {
        self.plan_generated_file(
            COMPONENTS_JSON,
            templates::components_json(self.framework),
            "action_components_json",
            StepName::ShadcnInit,
        );
        self.plan_generated_file(
            self.framework.layout().utils_file,
            templates::utils_module(self.framework),
            "action_utils",
            StepName::ShadcnInit,
        );
    }
}

/// `tsconfig.json` when the project has one, `jsconfig.json` otherwise
pub fn compiler_options_file(root: &Path) -> &'static str {
    if root.join(TSCONFIG).exists() {
        TSCONFIG
    } else {
        JSCONFIG
    }
}

/// What the compiler options file holds
#[derive(Debug, Clone, PartialEq)]
pub enum CompilerOptions {
    Missing,
    /// Present but not a plain JSON object, e.g. JSONC with comments
    Unreadable,
    Parsed(Map<String, Value>),
}

pub fn read_compiler_options(path: &Path) -> CompilerOptions {
    if !path.exists() {
        return CompilerOptions::Missing;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return CompilerOptions::Unreadable;
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => CompilerOptions::Parsed(map),
        Ok(_) | Err(_) => {
            tracing::warn!("{} is not a plain JSON object", path.display());
            CompilerOptions::Unreadable
        }
    }
}

pub fn has_alias_mapping(options: &Map<String, Value>) -> bool {
    options
        .get("compilerOptions")
        .and_then(|c| c.get("paths"))
        .is_some_and(|paths| !paths.is_null())
}

/// Add `baseUrl` and the `@/*` path mapping, keeping every other key
pub fn merge_alias(mut data: Map<String, Value>) -> Map<String, Value> {
    let options = data
        .entry("compilerOptions")
        .or_insert_with(|| json!({}));
    if !options.is_object() {
        *options = json!({});
    }

    if let Some(options) = options.as_object_mut() {
        options.insert("baseUrl".to_string(), json!("."));

        let paths = options.entry("paths").or_insert_with(|| json!({}));
        if !paths.is_object() {
            *paths = json!({});
        }
        if let Some(paths) = paths.as_object_mut() {
            paths.insert(ALIAS_PATTERN.to_string(), json!([ALIAS_TARGET]));
        }
    }

    data.entry("include").or_insert_with(|| json!(["src"]));
    data
}

#[cfg(test)]
mod tests;
