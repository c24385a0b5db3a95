//! Interactive prompts.
//!
//! Core code only sees the [`Prompter`] capability; the terminal
//! implementation reads answers line by line from stdin.

use super::{is_interrupted, set_prompt_active};
use crate::i18n::Translator;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const INTERRUPT_POLL: Duration = Duration::from_millis(50);

pub trait Prompter {
    /// Pick one option. `None` means the prompt was interrupted.
    fn select(&self, message: &str, options: &[String], default: usize) -> Option<usize>;

    /// Pick one or more options, starting from `preselected`.
    /// Never returns an empty selection; `None` means the prompt was interrupted.
    fn multiselect(&self, message: &str, options: &[String], preselected: &[bool])
    -> Option<Vec<usize>>;

    /// Yes/no question. Interruption counts as "no".
    fn confirm(&self, message: &str) -> bool;
}

/// Parsed answer to a multi-select prompt
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionInput {
    KeepDefaults,
    All,
    Indices(Vec<usize>),
    Invalid,
}

/// Parse `1,3 5`, `a` or an empty line against a list of `len` options.
/// Indices in the input are 1-based; returned indices are 0-based and deduplicated.
pub fn parse_selection(input: &str, len: usize) -> SelectionInput {
    let input = input.trim();
    if input.is_empty() {
        return SelectionInput::KeepDefaults;
    }
    if input.eq_ignore_ascii_case("a") || input.eq_ignore_ascii_case("all") {
        return SelectionInput::All;
    }

    let mut picked = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= len => {
                if !picked.contains(&(n - 1)) {
                    picked.push(n - 1);
                }
            }
            _ => return SelectionInput::Invalid,
        }
    }
    picked.sort_unstable();
    SelectionInput::Indices(picked)
}

/// Stdin-backed prompter
pub struct TerminalPrompter {
    multiselect_hint: String,
    empty_selection: String,
    invalid_input: String,
}

impl TerminalPrompter {
    pub fn new(translator: &Translator) -> Self {
        Self {
            multiselect_hint: translator.t("prompt_multiselect_hint"),
            empty_selection: translator.t("prompt_empty_selection"),
            invalid_input: translator.t("prompt_invalid_input"),
        }
    }

    fn read_line(&self) -> Option<String> {
        if is_interrupted() {
            return None;
        }
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush terminal: {}", e);
        }

        // stdin blocks through SIGINT, so the read happens off-thread
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut input = String::new();
            let read = io::stdin().lock().read_line(&mut input).map(|_| input);
            let _ = tx.send(read);
        });

        set_prompt_active(true);
        let answer = wait_for_line(&rx, is_interrupted);
        set_prompt_active(false);

        match &answer {
            // piped answers are not echoed by a terminal
            Some(input) if !atty::is(atty::Stream::Stdin) => println!("{}", input.trim_end()),
            Some(_) => {}
            None => println!(),
        }
        answer
    }
}

/// Wait for the reader thread's line, giving up once `interrupted` reports true.
/// End of input and read errors both count as no answer.
pub(crate) fn wait_for_line(
    rx: &Receiver<io::Result<String>>,
    interrupted: impl Fn() -> bool,
) -> Option<String> {
    loop {
        if interrupted() {
            return None;
        }
        match rx.recv_timeout(INTERRUPT_POLL) {
            Ok(Ok(line)) if line.is_empty() => return None,
            Ok(Ok(line)) => return Some(line),
            Ok(Err(e)) => {
                tracing::warn!("Failed to read prompt input: {}", e);
                return None;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, message: &str, options: &[String], default: usize) -> Option<usize> {
        println!("{} {}", "?".yellow().bold(), message.bold());
        for (i, option) in options.iter().enumerate() {
            let marker = if i == default { ">".cyan().bold() } else { " ".normal() };
            println!("  {} {}) {}", marker, i + 1, option);
        }

        loop {
            print!("  [{}] ", default + 1);
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return Some(default);
            }
            match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => return Some(n - 1),
                _ => println!("  {}", self.invalid_input.red()),
            }
        }
    }

    fn multiselect(
        &self,
        message: &str,
        options: &[String],
        preselected: &[bool],
    ) -> Option<Vec<usize>> {
        println!("{} {}", "?".yellow().bold(), message.bold());
        for (i, option) in options.iter().enumerate() {
            let checked = preselected.get(i).copied().unwrap_or(false);
            let mark = if checked { "[x]".green() } else { "[ ]".normal() };
            println!("  {} {:>2}) {}", mark, i + 1, option);
        }
        println!("  {}", self.multiselect_hint.dimmed());

        let defaults: Vec<usize> = (0..options.len())
            .filter(|i| preselected.get(*i).copied().unwrap_or(false))
            .collect();

        loop {
            print!("  > ");
            let line = self.read_line()?;
            let picked = match parse_selection(&line, options.len()) {
                SelectionInput::KeepDefaults => defaults.clone(),
                SelectionInput::All => (0..options.len()).collect(),
                SelectionInput::Indices(indices) => indices,
                SelectionInput::Invalid => {
                    println!("  {}", self.invalid_input.red());
                    continue;
                }
            };

            if picked.is_empty() {
                println!("  {}", self.empty_selection.red());
                continue;
            }
            return Some(picked);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} {} [y/N] ", "?".yellow().bold(), message);

        match self.read_line() {
            Some(input) => {
                let input = input.trim().to_lowercase();
                input == "y" || input == "yes"
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
