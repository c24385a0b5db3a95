//! `create`: scaffold a new React app, install it, then run `init` on it.

use super::Session;
use super::init::{self, InitOptions, InitOutcome};
use crate::core::types::FrameworkKind;
use crate::error::{Result, ShacnifyError};
use crate::ui;
use crate::utils::command;
use std::path::PathBuf;
use std::time::Duration;

pub const VITE_NOTICE_PAUSE: Duration = Duration::from_secs(2);
const INSTALL_COMMAND: &str = "npm install";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Vite,
    NextJS,
    CreateReactApp,
}

impl Template {
    /// Prompt order; the first entry is the default
    pub const ALL: [Template; 3] = [Template::Vite, Template::NextJS, Template::CreateReactApp];

    fn message_key(&self) -> &'static str {
        match self {
            Template::Vite => "template_vite",
            Template::NextJS => "template_nextjs",
            Template::CreateReactApp => "template_cra",
        }
    }

    pub fn framework(&self) -> FrameworkKind {
        match self {
            Template::Vite => FrameworkKind::Vite,
            Template::NextJS => FrameworkKind::NextJS,
            Template::CreateReactApp => FrameworkKind::CreateReactApp,
        }
    }

    /// Scaffolder invocation; `name` must already be shell-quoted
    pub fn scaffold_command(&self, name: &str) -> String {
        match self {
            Template::Vite => format!("npm create vite@latest {} -- --template react-ts", name),
            Template::NextJS => format!("npx create-next-app@latest {}", name),
            Template::CreateReactApp => format!("npx create-react-app {}", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub name: String,
    /// Directory the project folder is created in
    pub parent: PathBuf,
    pub recipe: Option<String>,
    /// How long the Vite notice stays up before the scaffolder starts
    pub notice_pause: Duration,
}

impl CreateOptions {
    pub fn project_root(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

pub fn run(session: &Session<'_>, options: &CreateOptions) -> Result<InitOutcome> {
    let t = &session.translator;
    let project_root = options.project_root();

    ui::header(&t.format("create_start", &[("name", &options.name)]));

    if project_root.exists() {
        ui::error(&t.format("folder_exists", &[("name", &options.name)]));
        return Err(ShacnifyError::FolderExists(project_root));
    }

    let quoted_name = command::quote_arg(&options.name)
        .ok_or_else(|| ShacnifyError::Other(format!("Invalid project name: {:?}", options.name)))?;

    let labels: Vec<String> = Template::ALL.iter().map(|tpl| t.t(tpl.message_key())).collect();
    let Some(choice) = session.prompter.select(&t.t("select_template"), &labels, 0) else {
        ui::info(&t.t("plan_aborted"));
        return Ok(InitOutcome::Declined);
    };
    let template = Template::ALL.get(choice).copied().unwrap_or(Template::Vite);
    tracing::info!("Creating {:?} project {}", template, project_root.display());

    if template == Template::Vite {
        ui::notice(
            &t.t("vite_notice_title"),
            &[
                t.t("vite_notice_question"),
                t.t("vite_notice_answer"),
                t.t("shacnify_will_handle_install"),
            ],
        );
        ui::dimmed(&t.t("preparing"));
        std::thread::sleep(options.notice_pause);
    }

    ui::step(&t.format(
        "creating_project",
        &[("framework", &template.framework().to_string())],
    ));
    let scaffold = template.scaffold_command(&quoted_name);
    if !session.runner.run(&scaffold, Some(&options.parent), true) {
        ui::error(&t.t("create_project_failed"));
        return Err(ShacnifyError::SystemCommandFailed { command: scaffold });
    }
    ui::success(&t.t("project_created_successfully"));

    ui::step(&t.t("installing_dependencies"));
    if !session.runner.run(INSTALL_COMMAND, Some(&project_root), false) {
        ui::error(&t.t("dependency_install_failed"));
        return Err(ShacnifyError::SystemCommandFailed {
            command: INSTALL_COMMAND.to_string(),
        });
    }
    ui::success(&t.t("dependencies_installed"));

    ui::step(&t.t("setting_up_shadcn"));
    init::run(
        session,
        &InitOptions {
            root: project_root,
            safe: false,
            recipe: options.recipe.clone(),
        },
    )
}
