use std::fmt;
use std::path::PathBuf;

/// React project flavor, detected once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkKind {
    Vite,
    NextJS,
    CreateReactApp,
    Unknown,
}

impl FrameworkKind {
    pub fn is_known(&self) -> bool {
        !matches!(self, FrameworkKind::Unknown)
    }

    pub fn uses_typescript(&self) -> bool {
        !matches!(self, FrameworkKind::CreateReactApp)
    }

    /// Where the framework keeps the files the setup touches
    pub fn layout(&self) -> SourceLayout {
        let ext = if self.uses_typescript() { "tsx" } else { "jsx" };
        match self {
            FrameworkKind::CreateReactApp => SourceLayout {
                app_component: "src/App.js".into(),
                app_stylesheet: "src/App.css".into(),
                react_logo: "src/logo.svg".into(),
                entry_file: "src/index.js".into(),
                global_css: "src/index.css",
                utils_file: "src/lib/utils.js".into(),
                layouts_dir: "src/layouts".into(),
                pages_dir: "src/pages".into(),
                main_layout: format!("src/layouts/MainLayout.{}", ext).into(),
                home_page: format!("src/pages/HomePage.{}", ext).into(),
            },
            FrameworkKind::NextJS => SourceLayout {
                global_css: "app/globals.css",
                ..FrameworkKind::Vite.layout()
            },
            FrameworkKind::Vite | FrameworkKind::Unknown => SourceLayout {
                app_component: "src/App.tsx".into(),
                app_stylesheet: "src/App.css".into(),
                react_logo: "src/assets/react.svg".into(),
                entry_file: "src/main.tsx".into(),
                global_css: "src/index.css",
                utils_file: "src/lib/utils.ts".into(),
                layouts_dir: "src/layouts".into(),
                pages_dir: "src/pages".into(),
                main_layout: format!("src/layouts/MainLayout.{}", ext).into(),
                home_page: format!("src/pages/HomePage.{}", ext).into(),
            },
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vite => write!(f, "Vite"),
            Self::NextJS => write!(f, "Next.js"),
            Self::CreateReactApp => write!(f, "Create React App"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Project-relative paths for one framework
#[derive(Debug, Clone)]
pub struct SourceLayout {
    pub app_component: PathBuf,
    pub app_stylesheet: PathBuf,
    pub react_logo: PathBuf,
    pub entry_file: PathBuf,
    pub global_css: &'static str,
    pub utils_file: PathBuf,
    pub layouts_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub main_layout: PathBuf,
    pub home_page: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionVerb {
    Create,
    Overwrite,
    Delete,
}

impl ActionVerb {
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Create => "verb_create",
            Self::Overwrite => "verb_overwrite",
            Self::Delete => "verb_delete",
        }
    }
}

/// What executing an action does to its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPayload {
    /// Replace the whole file
    Write(String),
    CreateDir,
    Remove,
    /// Put this block at the top of the file unless it is already there
    PrependDirectives(String),
}

/// Named unit of the setup pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepName {
    DepInstall,
    TailwindConfig,
    RestructureSrc,
    AliasConfig,
    ShadcnInit,
    AddComponents,
}

impl StepName {
    pub fn id(&self) -> &'static str {
        match self {
            Self::DepInstall => "dep_install",
            Self::TailwindConfig => "tailwind_config",
            Self::RestructureSrc => "restructure_src",
            Self::AliasConfig => "alias_config",
            Self::ShadcnInit => "shadcn_init",
            Self::AddComponents => "add_components",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Self::DepInstall => "step_dep_install",
            Self::TailwindConfig => "step_tailwind_config",
            Self::RestructureSrc => "step_restructure_src",
            Self::AliasConfig => "step_alias_config",
            Self::ShadcnInit => "step_shadcn_init",
            Self::AddComponents => "step_add_components",
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A planned filesystem change, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub verb: ActionVerb,
    pub target: PathBuf,
    /// Message key of the human description
    pub description: &'static str,
    pub step: StepName,
    pub payload: ActionPayload,
}

/// A file the planner deliberately left alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWarning {
    /// Message key; the target is passed as `{path}`
    pub message: &'static str,
    pub target: PathBuf,
}

/// Everything `init` will change, computed before anything is touched
#[derive(Debug, Clone)]
pub struct Plan {
    pub framework: FrameworkKind,
    pub safe_mode: bool,
    pub actions: Vec<Action>,
    pub warnings: Vec<PlanWarning>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions_for(&self, step: StepName) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(move |a| a.step == step)
    }

    pub fn find(&self, target: &str) -> Option<&Action> {
        self.actions
            .iter()
            .find(|a| a.target == std::path::Path::new(target))
    }
}
