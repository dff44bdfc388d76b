use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;

use runtime::{Event, Topic, UiEvent};

use super::EventSink;

/// Writes UI text lines to a writer (stdout in the binary).
pub struct UiSink<W> {
    out: W,
}

impl<W: Write + Send + 'static> UiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The line shown for `event`, if any.
    pub fn line(event: &UiEvent) -> Option<&str> {
        match event {
            UiEvent::ShowDayCard { text, .. } | UiEvent::Food { text, .. } => Some(text.as_str()),
            UiEvent::Timer { display } => Some(display.as_str()),
            UiEvent::GameOver { message } => Some(message.as_str()),
            UiEvent::HideDayCard => None,
        }
    }
}

#[async_trait]
impl<W: Write + Send + 'static> EventSink for UiSink<W> {
    fn topic(&self) -> Topic {
        Topic::Ui
    }

    async fn handle(&mut self, event: Event) -> Result<()> {
        if let Event::Ui(event) = event
            && let Some(line) = Self::line(&event)
        {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
