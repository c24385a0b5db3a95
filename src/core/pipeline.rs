//! Step pipeline.
//!
//! Runs named steps in order and stops at the first one that fails.
//! Completed steps are not rolled back.

use super::types::StepName;
use crate::i18n::Translator;
use crate::ui;

pub struct PipelineStep<'a> {
    name: StepName,
    operation: Box<dyn FnMut() -> bool + 'a>,
}

impl<'a> PipelineStep<'a> {
    pub fn new(name: StepName, operation: impl FnMut() -> bool + 'a) -> Self {
        Self {
            name,
            operation: Box::new(operation),
        }
    }

    pub fn name(&self) -> StepName {
        self.name
    }
}

/// Receives step transitions as they happen
pub trait StepReporter {
    fn started(&self, step: StepName);
    fn succeeded(&self, step: StepName);
    fn failed(&self, step: StepName);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    Completed,
    Aborted { step: StepName },
}

pub fn run(steps: Vec<PipelineStep<'_>>, reporter: &dyn StepReporter) -> PipelineOutcome {
    for mut step in steps {
        reporter.started(step.name);
        tracing::info!("Step started: {}", step.name);

        if (step.operation)() {
            tracing::info!("Step completed: {}", step.name);
            reporter.succeeded(step.name);
        } else {
            tracing::error!("Step failed: {}, aborting setup", step.name);
            reporter.failed(step.name);
            return PipelineOutcome::Aborted { step: step.name };
        }
    }

    PipelineOutcome::Completed
}

/// Prints step headers and results to the terminal
pub struct UiReporter<'a> {
    translator: &'a Translator,
}

impl<'a> UiReporter<'a> {
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    fn step_label(&self, step: StepName) -> String {
        self.translator.t(step.message_key())
    }
}

impl StepReporter for UiReporter<'_> {
    fn started(&self, step: StepName) {
        ui::step(&self.step_label(step));
    }

    fn succeeded(&self, step: StepName) {
        ui::success(
            &self
                .translator
                .format("step_completed", &[("step", &self.step_label(step))]),
        );
    }

    fn failed(&self, step: StepName) {
        ui::error(
            &self
                .translator
                .format("step_failed", &[("step", &self.step_label(step))]),
        );
    }
}
