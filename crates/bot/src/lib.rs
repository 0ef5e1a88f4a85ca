//! Bot Logic
//!
//! Command parsing, dispatch, and reply formatting for the weather bot.

mod command;
mod condition;
mod dispatch;
pub mod replies;

pub use command::{Command, RECORD_COMMAND, REPORT_COMMAND};
pub use condition::Condition;
pub use dispatch::dispatch;
