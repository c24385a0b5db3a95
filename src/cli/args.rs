use crate::core::recipes::RECIPE_NAMES;
use crate::i18n::Language;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shacnify",
    about = "Set up Tailwind CSS and shadcn/ui in React projects",
    long_about = "Scaffold a React app or wire Tailwind CSS + shadcn/ui into an existing one (Vite, Next.js, Create React App)",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Apply the plan without asking
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'd', long, value_name = "PATH", global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new React project and set up shadcn/ui in it
    Create {
        /// Folder name of the new project
        name: String,

        /// Install a predefined set of components
        #[arg(short = 'r', long, value_parser = PossibleValuesParser::new(RECIPE_NAMES), ignore_case = true)]
        recipe: Option<String>,
    },

    /// Set up Tailwind CSS and shadcn/ui in an existing React project
    Init {
        /// Install a predefined set of components
        #[arg(short = 'r', long, value_parser = PossibleValuesParser::new(RECIPE_NAMES), ignore_case = true)]
        recipe: Option<String>,

        /// Never overwrite or delete existing files
        #[arg(long)]
        safe: bool,
    },

    /// Add shadcn/ui components (interactive when none are given)
    Add {
        /// Component names, e.g. button card
        components: Vec<String>,
    },

    /// Manage shacnify settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Change the interface language
    Lang {
        #[command(subcommand)]
        command: LangCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show all settings
    View,

    /// Set a value; comma separated values are stored as a list
    Set {
        key: String,
        value: String,
    },

    /// Print the config file location
    Path,
}

#[derive(Subcommand, Debug)]
pub enum LangCommand {
    /// Switch language
    Set {
        #[arg(value_enum)]
        language: Language,
    },

    /// Show the current language
    Get,
}
