//! Display metadata attached to a rendered message.

use std::fmt;

/// The title a sink uses to classify a dispatched message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageTitle {
    /// The message reports an error; the sink sets the error flag.
    Error,
    /// Any other message.
    Warning,
}

impl MessageTitle {
    /// Returns the title text.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageTitle::Error => "Error",
            MessageTitle::Warning => "Warning",
        }
    }
}

impl fmt::Display for MessageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The foreground color a sink applies when its destination supports color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageColor {
    /// Red foreground.
    Red,
    /// Yellow foreground.
    Yellow,
    /// No color.
    Normal,
}

/// Title and color derived from a message's severity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MessageMetadata {
    /// Error or warning classification.
    pub title: MessageTitle,
    /// Requested color.
    pub color: MessageColor,
}

/// A fully rendered message ready for dispatch.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedMessage {
    /// The complete text block.
    pub text: String,
    /// Display metadata.
    pub metadata: MessageMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_text() {
        assert_eq!(MessageTitle::Error.as_str(), "Error");
        assert_eq!(format!("{}", MessageTitle::Warning), "Warning");
    }
}
