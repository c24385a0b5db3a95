//! `init`: detect, plan, confirm, then run the setup pipeline.

use super::Session;
use crate::core::pipeline::{self, PipelineOutcome, UiReporter};
use crate::core::steps::{self, StepContext};
use crate::core::{detector, planner, presentation};
use crate::error::{Result, ShacnifyError};
use crate::ui;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct InitOptions {
    pub root: PathBuf,
    pub safe: bool,
    pub recipe: Option<String>,
}

/// How an `init` run ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The plan was empty
    AlreadyConfigured,
    /// User declined or interrupted the confirmation; nothing was changed
    Declined,
    Completed,
}

pub fn run(session: &Session<'_>, options: &InitOptions) -> Result<InitOutcome> {
    let t = &session.translator;
    let root = options.root.as_path();

    ui::header(&t.t("init_start"));

    let framework = detector::detect(root);
    if !framework.is_known() {
        ui::error(&t.format(
            "error_not_react",
            &[("path", &root.display().to_string())],
        ));
        return Err(ShacnifyError::FrameworkNotDetected(root.to_path_buf()));
    }
    ui::info(&t.format(
        "framework_detected",
        &[("framework", &framework.to_string())],
    ));
    if options.safe {
        ui::warning(&t.t("safe_mode_enabled"));
    }

    let plan = planner::build_plan(root, framework, options.safe);
    tracing::info!(
        "Planned {} action(s) for {} (safe mode: {})",
        plan.actions.len(),
        framework,
        options.safe
    );
    presentation::display(&plan, t);

    if plan.is_empty() {
        return Ok(InitOutcome::AlreadyConfigured);
    }

    if !session.assume_yes && !session.prompter.confirm(&t.t("plan_confirm")) {
        tracing::info!("Plan declined, nothing changed");
        ui::info(&t.t("plan_aborted"));
        return Ok(InitOutcome::Declined);
    }

    let ctx = StepContext {
        root,
        plan: &plan,
        recipe: options.recipe.as_deref(),
        config: &session.config,
        translator: t,
        runner: session.runner,
        prompter: session.prompter,
    };
    let reporter = UiReporter::new(t);

    match pipeline::run(steps::build_steps(&ctx), &reporter) {
        PipelineOutcome::Completed => {
            println!();
            ui::success(&t.t("init_done"));
            Ok(InitOutcome::Completed)
        }
        PipelineOutcome::Aborted { step } => {
            ui::warning(&t.t("pipeline_aborted"));
            Err(ShacnifyError::PipelineAborted {
                step: step.to_string(),
            })
        }
    }
}
