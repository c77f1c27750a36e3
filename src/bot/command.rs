//! Bot command parsing

/// A parsed chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/check <domain>` or `check <domain>`; the argument may be empty
    Check(String),
    /// `/rawcheck <domain>`
    RawCheck(String),
    /// `/detailed <domain>`
    Detailed(String),
    /// `/list`
    List,
    /// `/group <name>`
    Group(String),
    /// A slash command this bot does not know
    Unknown(String),
    /// Text that is not a command
    Text,
}

impl BotCommand {
    /// Parse message text
    ///
    /// Commands may carry a `@botname` suffix. Arguments are trimmed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();

        let Some(rest) = text.strip_prefix('/') else {
            return text
                .strip_prefix("check ")
                .map_or(Self::Text, |arg| Self::Check(arg.trim().to_string()));
        };

        let (head, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let name = head.split('@').next().unwrap_or(head);
        let arg = args.trim().to_string();

        match name {
            "start" => Self::Start,
            "help" => Self::Help,
            "check" => Self::Check(arg),
            "rawcheck" => Self::RawCheck(arg),
            "detailed" => Self::Detailed(arg),
            "list" => Self::List,
            "group" => Self::Group(arg),
            other => Self::Unknown(other.to_string()),
        }
    }
}
