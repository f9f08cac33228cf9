//! Interactive prompt: enter a measurement, see the stage, try again.

use crate::cli::render_classification;
use crate::present;
use giraffe_core::{GiraffeError, classify_input};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const PROMPT: &str = "foot length (cm)> ";
const GREETING: &str = "Find My Giraffe Stage - type 'help' for instructions\n";
const TRY_AGAIN: &str = "Try again with another measurement, or 'exit' to quit.\n";
const GOODBYE: &str = "Goodbye!";

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction {
    /// Print this text and prompt again.
    Show(String),
    /// Print this error text and prompt again.
    Reject(String),
    Exit,
}

/// Interpret one line of input.
pub fn handle_line(line: &str, json_mode: bool) -> ReplAction {
    match line.trim() {
        "exit" | "quit" => ReplAction::Exit,
        "help" | "?" => ReplAction::Show(help_text()),
        input => {
            let result = classify_input(input);
            let output = render_classification(input, &result, json_mode, false);
            match result {
                Ok(_) => ReplAction::Show(output),
                Err(e) => {
                    if let GiraffeError::Classification(_) = e {
                        tracing::error!(input, "Validated foot length matched no stage rule: {}", e);
                    }
                    ReplAction::Reject(output)
                }
            }
        }
    }
}

/// Conversational text for stdout. JSON mode keeps stdout to JSON documents.
fn chatter(text: &'static str, json_mode: bool) -> Option<&'static str> {
    (!json_mode).then_some(text)
}

fn help_text() -> String {
    format!(
        "Enter a foot length in centimeters ({} - {}).\n\
         Type 'exit' or press Ctrl-D to leave.",
        giraffe_core::FOOT_LENGTH_MIN,
        giraffe_core::FOOT_LENGTH_MAX
    )
}

/// Run the interactive loop until the user exits.
pub fn run_repl(json_mode: bool) -> Result<(), GiraffeError> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| GiraffeError::IoError(format!("Failed to initialize editor: {}", e)))?;

    if let Some(text) = chatter(GREETING, json_mode) {
        println!("{}", text);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    // An empty submit is still a submit.
                    eprintln!("{}", present::MSG_NOT_A_NUMBER);
                    continue;
                }
                editor.add_history_entry(line.as_str()).ok();

                match handle_line(&line, json_mode) {
                    ReplAction::Show(text) => {
                        println!("{}", text);
                        if let Some(text) = chatter(TRY_AGAIN, json_mode) {
                            println!("{}", text);
                        }
                    }
                    ReplAction::Reject(text) => eprintln!("{}", text),
                    ReplAction::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(GiraffeError::IoError(format!("Readline error: {}", e))),
        }
    }

    if let Some(text) = chatter(GOODBYE, json_mode) {
        println!("{}", text);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
