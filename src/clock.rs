//! The tick loop: re-rendering the clock text on a timer, without ever
//! leaving the display blank or flooding the log.

use std::collections::HashSet;

use formatter::Formatter;
use instant::Instant;


/// A **ticker** owns a formatter and a pattern, and keeps the most
/// recently rendered text.
///
/// The crucial property is that a formatting error never clears the
/// display: the last good text stays up, the error is logged, and the
/// next successful tick takes over. Each distinct error message is
/// logged once rather than once per tick, as a bad pattern would
/// otherwise produce a log line a second until someone fixes it.
#[derive(Debug)]
pub struct Ticker {
    formatter: Box<dyn Formatter>,
    pattern: String,
    text: String,
    stopped: bool,
    reported: HashSet<String>,
}

impl Ticker {

    /// Creates a ticker. No text exists until the first tick.
    pub fn new(formatter: Box<dyn Formatter>, pattern: &str) -> Self {
        Self {
            formatter,
            pattern: pattern.to_string(),
            text: String::new(),
            stopped: false,
            reported: HashSet::new(),
        }
    }

    /// The most recently rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-renders for the given moment. Returns whether the text
    /// changed, so the caller knows whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.stopped {
            return false;
        }

        match self.formatter.format(&self.pattern, now) {
            Ok(text) => {
                if text == self.text {
                    false
                }
                else {
                    self.text = text;
                    true
                }
            }
            Err(error) => {
                let message = error.to_string();
                if self.reported.insert(message.clone()) {
                    warn!("Formatting failed: {}", message);
                }
                false
            }
        }
    }

    /// Swaps the pattern out. The current text stays up until the next
    /// tick renders the new pattern.
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.to_string();
        self.reported.clear();
    }

    /// Stops the ticker for good: further ticks do nothing. Stopping
    /// twice is fine.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Whether the ticker has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
