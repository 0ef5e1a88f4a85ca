//! Weather Conditions

/// Closed set of condition tokens the bot understands at read time.
///
/// Writes are deliberately not validated against this set: the store
/// accepts any token, and an unknown token only surfaces as an error when a
/// report is requested for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
}

impl Condition {
    /// Parse a stored token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "clear" => Some(Condition::Clear),
            "cloudy" => Some(Condition::Cloudy),
            "rain" => Some(Condition::Rain),
            "snow" => Some(Condition::Snow),
            _ => None,
        }
    }

    /// Canonical stored token
    pub fn as_token(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Cloudy => "cloudy",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
        }
    }

    /// Japanese description used in report replies
    pub fn describe(&self) -> &'static str {
        match self {
            Condition::Clear => "晴れ",
            Condition::Cloudy => "曇り",
            Condition::Rain => "雨",
            Condition::Snow => "雪",
        }
    }
}
