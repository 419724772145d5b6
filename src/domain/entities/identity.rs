use std::fmt;

/// The bot's own account on the chat platform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BotIdentity {
    pub id: String,
    pub name: String,
}

impl BotIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Mention token other users type to address the bot
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    pub fn is(&self, user_id: &str) -> bool {
        self.id == user_id
    }
}

impl fmt::Display for BotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
