//! Interactive prompt. Each line is scanned on its own; errors are reported
//! but never end the session.

use crate::error::Result;
use crate::{run, Cli};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

const PROMPT: &str = "> ";

/// Prompt commands that start with a dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
}

impl ReplCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            ".exit" | ".quit" => Some(ReplCommand::Exit),
            ".help" => Some(ReplCommand::Help),
            _ => None,
        }
    }
}

pub fn run_prompt(cli: &Cli) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match ReplCommand::parse(&line) {
                    Some(ReplCommand::Exit) => break,
                    Some(ReplCommand::Help) => print_help(),
                    None => {
                        // The error flag lives only as long as one line.
                        let had_error = run(cli, &line, None)?;
                        debug!(had_error, "line scanned");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Enter Lox source to see its tokens.");
    println!("  .help   Show this message");
    println!("  .exit   Leave the prompt (also Ctrl-D)");
}
