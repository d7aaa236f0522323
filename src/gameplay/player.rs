use super::event::Event;
use super::event::Prompt;

/// Whoever sits across from the dealer.
///
/// The table never reads a terminal directly. It asks for raw lines and
/// parses them itself, so a terminal, a script, or anything else that can
/// answer a [`Prompt`] with text can play.
pub trait Player {
    /// Answer a question with one line of text.
    fn ask(&mut self, prompt: Prompt) -> anyhow::Result<String>;
    /// Receive notification of table events.
    fn notify(&mut self, event: &Event);
}
