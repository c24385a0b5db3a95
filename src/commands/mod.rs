//! Command handlers
//!
//! One file per CLI command. Handlers get a [`Session`] holding the services
//! the dispatcher builds once per run.

pub mod add;
pub mod config;
pub mod create;
pub mod init;
pub mod lang;

use crate::config::ConfigStore;
use crate::i18n::Translator;
use crate::ui::Prompter;
use crate::utils::command::CommandRunner;

pub struct Session<'a> {
    pub config: ConfigStore,
    pub translator: Translator,
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    /// Accept the plan without asking (`--yes`)
    pub assume_yes: bool,
}
