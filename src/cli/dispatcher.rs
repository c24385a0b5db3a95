//! Command dispatcher
//!
//! Builds the per-run services (log file, config, translator, runner,
//! prompter) and routes CLI commands to their handlers.

use crate::cli::args::{Cli, Command, ConfigCommand, LangCommand};
use crate::commands::{self, Session};
use crate::commands::add::AddOptions;
use crate::commands::create::{CreateOptions, VITE_NOTICE_PAUSE};
use crate::commands::init::InitOptions;
use crate::config::ConfigStore;
use crate::error::{Result, ShacnifyError};
use crate::i18n::Translator;
use crate::project_identity;
use crate::ui::{self as output, TerminalPrompter};
use crate::utils::command::{self, ShellRunner};
use crate::utils::{logging, paths};
use std::path::{Path, PathBuf};

/// Tools that must be on PATH before any project work starts
const REQUIRED_TOOLS: [&str; 2] = ["npm", "npx"];

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let Some(command) = &args.command else {
        show_quick_start();
        return Ok(());
    };

    let cwd = paths::project_root(args.global.dir.as_deref())?;
    let log_file = logging::init(&log_root(&cwd, command), args.global.verbose);

    let config = ConfigStore::load()?;
    let translator = Translator::from_config(&config);

    if needs_environment(command) {
        check_environment()?;
    }

    let runner = ShellRunner::new(log_file, translator.t("command_failed_log"));
    let prompter = TerminalPrompter::new(&translator);
    let mut session = Session {
        config,
        translator,
        runner: &runner,
        prompter: &prompter,
        assume_yes: args.global.yes,
    };

    match command {
        Command::Create { name, recipe } => commands::create::run(
            &session,
            &CreateOptions {
                name: name.clone(),
                parent: cwd,
                recipe: normalize_recipe(recipe.as_deref()),
                notice_pause: VITE_NOTICE_PAUSE,
            },
        )
        .map(|_| ()),

        Command::Init { recipe, safe } => commands::init::run(
            &session,
            &InitOptions {
                root: cwd,
                safe: *safe,
                recipe: normalize_recipe(recipe.as_deref()),
            },
        )
        .map(|_| ()),

        Command::Add { components } => commands::add::run(
            &session,
            &AddOptions {
                root: cwd,
                components: components.clone(),
            },
        ),

        Command::Config { command } => match command {
            ConfigCommand::View => commands::config::view(&session),
            ConfigCommand::Set { key, value } => commands::config::set(&mut session, key, value),
            ConfigCommand::Path => commands::config::path(&session),
        },

        Command::Lang { command } => match command {
            LangCommand::Set { language } => commands::lang::set(&mut session, *language),
            LangCommand::Get => commands::lang::get(&session),
        },
    }
}

/// Directory whose name keys the log file; `create` logs under the new project
fn log_root(cwd: &Path, command: &Command) -> PathBuf {
    match command {
        Command::Create { name, .. } => cwd.join(name),
        _ => cwd.to_path_buf(),
    }
}

fn needs_environment(command: &Command) -> bool {
    matches!(
        command,
        Command::Create { .. } | Command::Init { .. } | Command::Add { .. }
    )
}

fn check_environment() -> Result<()> {
    match command::missing_tool(&REQUIRED_TOOLS) {
        Some(tool) => {
            tracing::error!("Required tool '{}' not found on PATH", tool);
            Err(ShacnifyError::DependencyMissing(tool))
        }
        None => Ok(()),
    }
}

fn normalize_recipe(recipe: Option<&str>) -> Option<String> {
    recipe.map(|r| r.trim().to_lowercase())
}

fn show_quick_start() {
    output::info("No command provided.");
    output::info("Quick start:");
    output::indent(&project_identity::cli_with("create my-app --recipe landing"), 2);
    output::indent(&project_identity::cli_with("init"), 2);
    output::indent(&project_identity::cli_with("init --safe"), 2);
    output::indent(&project_identity::cli_with("add button card"), 2);
    output::info(&format!(
        "Use `{} --help` for full command list.",
        project_identity::BINARY_NAME
    ));
}
