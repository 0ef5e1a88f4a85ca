//! Command Parsing
//!
//! Messages are split on single spaces with no quoting and no collapsing:
//! consecutive spaces yield empty tokens, which changes the token count and
//! demotes the message to a usage hint. This matches the original bot and
//! is kept for compatibility.

/// First token of a record command
pub const RECORD_COMMAND: &str = "天気記録";
/// First token of a report command
pub const REPORT_COMMAND: &str = "天気教えて";

/// One parsed message
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `天気記録 [地域] [天気]`
    Record {
        location: &'a str,
        condition: &'a str,
    },
    /// A record command with the wrong token count
    RecordUsage,
    /// `天気教えて [地域]`
    Report { location: &'a str },
    /// A report command with the wrong token count
    ReportUsage,
    /// No command token matched; the full text is handled as plain chat
    Plain(&'a str),
}

impl<'a> Command<'a> {
    /// Parse one message text.
    pub fn parse(text: &'a str) -> Self {
        let tokens: Vec<&str> = text.split(' ').collect();

        match tokens[0] {
            RECORD_COMMAND => {
                if tokens.len() == 3 {
                    Command::Record {
                        location: tokens[1],
                        condition: tokens[2],
                    }
                } else {
                    Command::RecordUsage
                }
            }
            REPORT_COMMAND => {
                if tokens.len() == 2 {
                    Command::Report {
                        location: tokens[1],
                    }
                } else {
                    Command::ReportUsage
                }
            }
            _ => Command::Plain(text),
        }
    }
}
