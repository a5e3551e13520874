//! Line-oriented command protocol for the weighted-undo buffer session.
//!
//! Pipeline: raw line → [`token::tokenize`] (quote-aware splitting) →
//! [`Command::parse`] (pure classification) → [`dispatch::dispatch`] (session
//! calls + optional output line). Malformed lines are logged and skipped with
//! no output, mirroring a forgiving interactive protocol; the only lines ever
//! printed are `PRINT` results and the undo/redo error messages.
//!
//! The buffer is treated as a sequence of `char`s throughout: `DELETE`
//! indices and all action weights count characters, not bytes.

pub mod command;
pub mod dispatch;
pub mod edit;
pub mod token;

pub use command::{Command, ParseError};
pub use dispatch::{DispatchResult, Interpreter, dispatch};
pub use token::tokenize;
