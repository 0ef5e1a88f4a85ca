//! Reply Text
//!
//! Every user-facing sentence the bot can produce.

use crate::Condition;

/// Confirmation after a successful record
pub const RECORDED: &str = "記録しました！";

/// Generic error shown for any store fault
pub const GENERIC_ERROR: &str = "エラーが発生しました…";

/// Usage hint for the record command
pub const RECORD_USAGE: &str = "「天気記録 [地域] [天気]」という形で送信してください。";

/// Usage hint for the report command
pub const REPORT_USAGE: &str = "「天気教えて [地域]」という形で送信してください。";

/// Fallback for text that matches nothing
pub const UNRECOGNIZED: &str = "その言葉はわかりません。";

/// Report sentence for a known condition.
pub fn weather_report(location: &str, condition: Condition) -> String {
    format!("{}の天気は{}です！", location, condition.describe())
}

/// Report sentence when nothing is recorded for the location.
pub fn not_recorded(location: &str) -> String {
    format!("{}の天気はまだ記録されていません…", location)
}

/// Canned reply for an exact greeting match.
pub fn greeting(text: &str) -> Option<&'static str> {
    match text {
        "おはようございます" => Some("Good morning!"),
        "こんにちは" => Some("Good afternoon!"),
        "こんばんは" => Some("Good evening!"),
        _ => None,
    }
}
