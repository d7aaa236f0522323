use crate::gameplay::Event;
use crate::gameplay::Player;
use crate::gameplay::Prompt;
use std::collections::VecDeque;

/// Answers prompts from a fixed list and keeps every event it is sent.
///
/// Runs out loudly: asking past the last answer is an error, not a hang.
#[derive(Debug, Default, Clone)]
pub struct Script {
    answers: VecDeque<String>,
    events: Vec<Event>,
}

impl Script {
    pub fn new<S>(answers: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    /// Every answer has been used.
    pub fn is_done(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Player for Script {
    fn ask(&mut self, prompt: Prompt) -> anyhow::Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of answers at {:?}", prompt))
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order() {
        let mut script = Script::new(["10", "h"]);
        assert!(script.ask(Prompt::Wager { balance: 100 }).unwrap() == "10");
        assert!(script.ask(Prompt::Decision).unwrap() == "h");
        assert!(script.is_done());
    }

    #[test]
    fn errors_when_empty() {
        let mut script = Script::new(Vec::<String>::new());
        assert!(script.ask(Prompt::Replay).is_err());
    }

    #[test]
    fn keeps_events() {
        let mut script = Script::default();
        script.notify(&Event::Broke);
        assert!(matches!(script.events(), [Event::Broke]));
    }
}
