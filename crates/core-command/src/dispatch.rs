//! Command dispatch onto a session.
//!
//! Maps parsed commands to session calls and collects the single optional
//! output line a command may produce (`PRINT` results and failed undo/redo
//! messages). Before `CREATE` runs, every other command is ignored with no
//! output; the session enforces the same gate internally, but the dispatcher
//! must also suppress `PRINT` for uninitialized sessions.

use core_session::Session;
use tracing::{debug, trace};

use crate::command::{Command, ParseError};
use crate::edit;

/// Outcome of dispatching one command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    output: Option<String>,
}

impl DispatchResult {
    fn silent() -> Self {
        Self::default()
    }

    fn line(text: impl Into<String>) -> Self {
        Self {
            output: Some(text.into()),
        }
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn into_output(self) -> Option<String> {
        self.output
    }
}

pub fn dispatch(command: Command, session: &mut Session) -> DispatchResult {
    if !session.is_initialized() && !matches!(command, Command::Create { .. }) {
        trace!(target: "command.dispatch", ?command, "ignored_before_create");
        return DispatchResult::silent();
    }

    match command {
        Command::Create { max_weight, text } => {
            session.initialize(max_weight, text);
            DispatchResult::silent()
        }
        Command::Append(text) => {
            session.apply_edit(edit::append(session.current(), &text));
            DispatchResult::silent()
        }
        Command::Replace { find, replace } => {
            session.apply_edit(edit::replace_char(session.current(), find, replace));
            DispatchResult::silent()
        }
        Command::Delete(index) => {
            session.apply_edit(edit::delete_from(session.current(), index));
            DispatchResult::silent()
        }
        Command::Undo => match session.undo() {
            Ok(()) => DispatchResult::silent(),
            Err(err) => DispatchResult::line(format!("Error: {err}")),
        },
        Command::Redo => match session.redo() {
            Ok(()) => DispatchResult::silent(),
            Err(err) => DispatchResult::line(format!("Error: {err}")),
        },
        Command::Print => DispatchResult::line(session.current()),
    }
}

/// Owns a session and runs raw protocol lines through tokenize → parse →
/// dispatch. Blank and malformed lines are skipped silently (logged only),
/// keeping the observable output to `PRINT` results and undo/redo errors.
#[derive(Debug, Default)]
pub struct Interpreter {
    session: Session,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process one protocol line, returning the output line to print, if any.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match Command::parse(line) {
            Ok(command) => {
                trace!(target: "command.dispatch", ?command, "dispatch");
                dispatch(command, &mut self.session).into_output()
            }
            Err(ParseError::Empty) => None,
            Err(err) => {
                debug!(target: "command.parse", %err, line, "line_skipped");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn commands_before_create_are_ignored() {
        let mut session = Session::new();
        assert_eq!(
            dispatch(Command::Append("x".into()), &mut session),
            DispatchResult::silent()
        );
        // PRINT produces nothing either; there is no session to print.
        assert_eq!(
            dispatch(Command::Print, &mut session),
            DispatchResult::silent()
        );
        assert_eq!(
            dispatch(Command::Undo, &mut session),
            DispatchResult::silent()
        );
        assert!(!session.is_initialized());
    }

    #[test]
    fn create_initializes_and_print_echoes_buffer() {
        let mut session = Session::new();
        dispatch(
            Command::Create {
                max_weight: 10,
                text: "seed".into(),
            },
            &mut session,
        );
        let result = dispatch(Command::Print, &mut session);
        assert_eq!(result.output(), Some("seed"));
    }

    #[test]
    fn failed_undo_and_redo_report_errors() {
        let mut session = Session::new();
        dispatch(
            Command::Create {
                max_weight: 5,
                text: String::new(),
            },
            &mut session,
        );
        assert_eq!(
            dispatch(Command::Undo, &mut session).output(),
            Some("Error: Nothing to undo.")
        );
        assert_eq!(
            dispatch(Command::Redo, &mut session).output(),
            Some("Error: Nothing to redo.")
        );
    }

    #[test]
    fn edits_mutate_and_record() {
        let mut session = Session::new();
        dispatch(
            Command::Create {
                max_weight: 100,
                text: "abc".into(),
            },
            &mut session,
        );
        dispatch(Command::Append("def".into()), &mut session);
        dispatch(
            Command::Replace {
                find: 'a',
                replace: 'z',
            },
            &mut session,
        );
        dispatch(Command::Delete(4), &mut session);
        assert_eq!(session.current(), "zbcd");
        assert_eq!(session.undo_depth(), 3);
    }

    #[test]
    fn interpreter_skips_blank_and_malformed_lines() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.handle_line(""), None);
        assert_eq!(interpreter.handle_line("   "), None);
        assert_eq!(interpreter.handle_line("FROB 1"), None);
        assert_eq!(interpreter.handle_line("CREATE nope x"), None);
        assert!(!interpreter.session().is_initialized());
    }
}
