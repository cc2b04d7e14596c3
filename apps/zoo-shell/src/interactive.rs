//! Interactive REPL and script runner.
//!
//! Both read one command per line. The REPL prints a prompt and a banner;
//! scripts run silently apart from command output. Errors never stop either
//! loop: they are printed in the current output format and the next line is
//! read.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::{execute, Command, Response};
use crate::config::OutputFormat;
use crate::error::ApiError;
use crate::state::ZooState;

/// What to do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing to print (blank line or comment).
    Skip,
    /// Print this and keep going.
    Print(String),
    /// Print this and stop.
    Exit(String),
}

/// Line-oriented front end over a [`ZooState`].
pub struct Shell {
    state: ZooState,
    output: OutputFormat,
}

impl Shell {
    pub fn new(state: ZooState, output: OutputFormat) -> Self {
        Self { state, output }
    }

    pub fn state(&self) -> &ZooState {
        &self.state
    }

    /// Run the interactive REPL on stdin/stdout.
    pub fn run_repl(&self) -> anyhow::Result<()> {
        if self.output == OutputFormat::Text {
            println!("Zoo shell");
            println!("Type help for commands, quit to exit");
            println!();
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run(stdin.lock(), &mut stdout, true)?;
        Ok(())
    }

    /// Reads commands from `input` until it ends or a `quit` is seen.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W, prompt: bool) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "zoo> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            match self.handle_line(&line?) {
                LineOutcome::Skip => continue,
                LineOutcome::Print(text) => writeln!(out, "{}", text)?,
                LineOutcome::Exit(text) => {
                    writeln!(out, "{}", text)?;
                    break;
                }
            }
        }
        out.flush()
    }

    /// Parses and executes one line, rendering the result.
    pub fn handle_line(&self, line: &str) -> LineOutcome {
        let result = match Command::parse(line) {
            Ok(None) => return LineOutcome::Skip,
            Ok(Some(command)) => {
                debug!(?command, "Executing");
                execute(&self.state, command)
            }
            Err(err) => Err(err),
        };

        let quit = matches!(result, Ok(Response::Quit));
        let text = self.render(&result);
        if quit {
            LineOutcome::Exit(text)
        } else {
            LineOutcome::Print(text)
        }
    }

    fn render(&self, result: &Result<Response, ApiError>) -> String {
        match (self.output, result) {
            (OutputFormat::Text, Ok(response)) => response.to_string(),
            (OutputFormat::Text, Err(err)) => format!("Error {}", err),
            (OutputFormat::Json, Ok(response)) => to_json(response),
            (OutputFormat::Json, Err(err)) => to_json(&serde_json::json!({ "error": err })),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"error":{{"code":"INTERNAL","message":"{}"}}}}"#, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_shell() -> Shell {
        Shell::new(ZooState::default(), OutputFormat::Text)
    }

    fn run_script(shell: &Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_handle_quit_command() {
        let shell = text_shell();
        assert_eq!(shell.handle_line("quit"), LineOutcome::Exit("Goodbye".to_string()));
        assert!(matches!(shell.handle_line("exit"), LineOutcome::Exit(_)));
        assert!(matches!(shell.handle_line("q"), LineOutcome::Exit(_)));
    }

    #[test]
    fn test_empty_command() {
        let shell = text_shell();
        assert_eq!(shell.handle_line(""), LineOutcome::Skip);
        assert_eq!(shell.handle_line("   # comment"), LineOutcome::Skip);
    }

    #[test]
    fn test_handle_help_command() {
        let shell = text_shell();
        let LineOutcome::Print(text) = shell.handle_line("help") else {
            panic!("help should print");
        };
        assert!(text.contains("add-animal"));
    }

    #[test]
    fn test_handle_unknown_command() {
        let shell = text_shell();
        let LineOutcome::Print(text) = shell.handle_line("feed lions") else {
            panic!("errors should print, not exit");
        };
        assert!(text.starts_with("Error [UNKNOWN_COMMAND]"));
    }

    #[test]
    fn test_command_with_extra_whitespace() {
        let shell = text_shell();
        assert_eq!(
            shell.handle_line("   add-area    picnic   "),
            LineOutcome::Print("Area 1 (picnic area)".to_string())
        );
    }

    #[test]
    fn test_script_stops_at_quit() {
        let shell = text_shell();
        let output = run_script(
            &shell,
            "add-area cage 1\nadd-animal 1 parrot Polly\nquit\nadd-area picnic\n",
        );

        assert_eq!(
            output,
            "Area 1 (cage)\nPolly the parrot: animal added (code 0)\nGoodbye\n"
        );
        assert_eq!(shell.state().with_zoo(|zoo| zoo.graph().len()), 2);
    }

    #[test]
    fn test_errors_do_not_stop_the_script() {
        let shell = text_shell();
        let output = run_script(&shell, "remove-area 0\narea 0\n");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Error [INVARIANT_VIOLATION]"));
        assert!(lines[1].starts_with("Area 0: entrance"));
    }

    #[test]
    fn test_json_output() {
        let shell = Shell::new(ZooState::default(), OutputFormat::Json);
        let output = run_script(&shell, "add-area aquarium 3\narea 9\n");
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines[0]["type"], "area_created");
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_prompt_is_written_in_repl_mode() {
        let shell = text_shell();
        let mut out = Vec::new();
        shell.run("unreachable\n".as_bytes(), &mut out, true).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "zoo> Unreachable areas: none\nzoo> ");
    }
}
