//! Chat transport port
//!
//! Defines how the bot receives commands and sends replies.

/// A text message received from a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Chat the message came from (replies go here)
    pub chat_id: i64,
    /// Sender's username, when the transport knows it
    pub sender: Option<String>,
    /// Message text
    pub text: String,
}

/// How a reply should be rendered by the chat client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Plain text
    #[default]
    Plain,
    /// Markdown (used for code blocks)
    Markdown,
}

/// Chat transport used by the bot loop
pub trait ChatTransport {
    /// Wait for the next batch of incoming messages
    ///
    /// May return an empty batch when the wait times out.
    fn poll(&mut self) -> anyhow::Result<Vec<IncomingMessage>>;

    /// Send a reply to `chat_id`
    fn send(&self, chat_id: i64, text: &str, format: TextFormat) -> anyhow::Result<()>;
}
