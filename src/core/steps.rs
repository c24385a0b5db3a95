//! Setup steps.
//!
//! File-touching steps execute exactly the plan actions they own, so what
//! the user confirmed is what happens on disk.

use super::components;
use super::pipeline::PipelineStep;
use super::types::{Action, ActionPayload, Plan, StepName};
use crate::config::ConfigStore;
use crate::error::{Result, ShacnifyError};
use crate::i18n::Translator;
use crate::ui::{self, Prompter};
use crate::utils::command::CommandRunner;
use crate::utils::{fs, templates};
use std::path::Path;

pub const TAILWIND_DEPS_COMMAND: &str =
    "npm install -D tailwindcss@3 postcss autoprefixer tailwindcss-animate";
pub const ROUTER_DEPS_COMMAND: &str = "npm install react-router-dom";
pub const SHADCN_DEPS_COMMAND: &str = "npm install class-variance-authority clsx lucide-react tailwind-merge react-hook-form zod @hookform/resolvers";

/// Everything the steps need for one `init` run
pub struct StepContext<'a> {
    pub root: &'a Path,
    pub plan: &'a Plan,
    pub recipe: Option<&'a str>,
    pub config: &'a ConfigStore,
    pub translator: &'a Translator,
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
}

/// Assemble the ordered pipeline. Safe mode drops the restructure step.
pub fn build_steps<'a>(ctx: &'a StepContext<'a>) -> Vec<PipelineStep<'a>> {
    let mut steps = vec![
        PipelineStep::new(StepName::DepInstall, move || {
            ctx.runner.run(TAILWIND_DEPS_COMMAND, Some(ctx.root), false)
        }),
        PipelineStep::new(StepName::TailwindConfig, move || {
            file_step(ctx, StepName::TailwindConfig)
        }),
    ];

    if !ctx.plan.safe_mode {
        steps.push(PipelineStep::new(StepName::RestructureSrc, move || {
            apply_actions(ctx, StepName::RestructureSrc).is_some()
                && ctx.runner.run(ROUTER_DEPS_COMMAND, Some(ctx.root), false)
        }));
    }

    steps.push(PipelineStep::new(StepName::AliasConfig, move || {
        file_step(ctx, StepName::AliasConfig)
    }));
    steps.push(PipelineStep::new(StepName::ShadcnInit, move || {
        apply_actions(ctx, StepName::ShadcnInit).is_some()
            && ctx.runner.run(SHADCN_DEPS_COMMAND, Some(ctx.root), false)
    }));
    steps.push(PipelineStep::new(StepName::AddComponents, move || {
        add_components(ctx)
    }));

    steps
}

/// A step made only of file actions; reports "up to date" when it owns none
fn file_step(ctx: &StepContext<'_>, step: StepName) -> bool {
    match apply_actions(ctx, step) {
        Some(0) => {
            ui::info(&ctx.translator.format(
                "step_up_to_date",
                &[("step", &ctx.translator.t(step.message_key()))],
            ));
            true
        }
        Some(_) => true,
        None => false,
    }
}

/// Apply the plan actions owned by `step`, in plan order.
/// Returns how many were applied, or `None` at the first failure.
fn apply_actions(ctx: &StepContext<'_>, step: StepName) -> Option<usize> {
    let mut applied = 0;
    for action in ctx.plan.actions_for(step) {
        if let Err(e) = apply_action(ctx.root, action) {
            tracing::error!(
                "{:?} {} failed: {}",
                action.verb,
                action.target.display(),
                e
            );
            ui::error(&ctx.translator.format(
                "write_failed",
                &[
                    ("path", &action.target.to_string_lossy()),
                    ("error", &e.to_string()),
                ],
            ));
            return None;
        }
        applied += 1;
    }
    Some(applied)
}

pub fn apply_action(root: &Path, action: &Action) -> Result<()> {
    let path = root.join(&action.target);
    tracing::info!("{:?} {}", action.verb, action.target.display());

    match &action.payload {
        ActionPayload::Write(content) => fs::write_file(&path, content),
        ActionPayload::CreateDir => {
            std::fs::create_dir_all(&path).map_err(|e| ShacnifyError::IoError {
                path: path.clone(),
                source: e,
            })
        }
        ActionPayload::Remove => fs::remove_file(&path),
        ActionPayload::PrependDirectives(block) => prepend_block(&path, block),
    }
}

/// Put `block` at the top of the file unless its lines are already present
pub fn prepend_block(path: &Path, block: &str) -> Result<()> {
    let existing = fs::read_or_empty(path)?;
    if templates::contains_block(&existing, block) {
        tracing::debug!("{} already has the directives", path.display());
        return Ok(());
    }

    let content = if existing.is_empty() {
        block.to_string()
    } else {
        format!("{}\n{}", block, existing)
    };
    fs::write_file(path, &content)
}

fn add_components(ctx: &StepContext<'_>) -> bool {
    let selection = components::select_components(
        &[],
        ctx.recipe,
        ctx.config,
        ctx.prompter,
        ctx.translator,
    );
    tracing::info!(
        "Installing components {:?} (source: {:?})",
        selection.components,
        selection.source
    );

    components::install(&selection.components, ctx.root, ctx.runner, ctx.translator)
        .all_succeeded()
}
