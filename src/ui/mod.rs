use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod prompt;
pub mod table;

pub use prompt::{Prompter, TerminalPrompter};

static QUIET: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub(crate) fn set_prompt_active(active: bool) {
    PROMPT_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn prompt_active() -> bool {
    PROMPT_ACTIVE.load(Ordering::SeqCst)
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{}", title.cyan().bold());
}

pub fn step(title: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{}", format!("--- {} ---", title).cyan());
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn dimmed(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{}", msg.dimmed());
}

pub fn indent(msg: &str, level: usize) {
    let spaces = " ".repeat(level * 2);
    println!("{}{}", spaces, msg);
}

/// Boxed notice, used for instructions the user must read before a child
/// process takes over the terminal.
pub fn notice(title: &str, lines: &[String]) {
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
        + 2;

    println!("{}", format!("┌{}┐", "─".repeat(width)).yellow());
    println!(
        "{} {}{} {}",
        "│".yellow(),
        title.yellow().bold(),
        " ".repeat(width - 2 - title.chars().count()),
        "│".yellow()
    );
    println!("{}", format!("├{}┤", "─".repeat(width)).yellow());
    for line in lines {
        println!(
            "{} {}{} {}",
            "│".yellow(),
            line,
            " ".repeat(width - 2 - line.chars().count()),
            "│".yellow()
        );
    }
    println!("{}", format!("└{}┘", "─".repeat(width)).yellow());
}
