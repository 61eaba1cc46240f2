//! Configuration for a console session.

use std::time::Duration;

/// Timing and presentation knobs for the console and its host loop.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// The prompt printed before each blocking line-read.
    pub prompt: String,

    /// The simulation period: how long the simulation side keeps the turn
    /// between yield windows.
    pub period: Duration,

    /// The bounded window of exclusive access the console is guaranteed once
    /// per period.
    pub yield_window: Duration,

    /// Delay before the console thread prints its first prompt, giving the
    /// host loop time to settle.
    pub startup_delay: Duration,

    /// Whether to print the greeting line before the first prompt.
    pub banner: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "\nspyglass$ ".to_string(),
            period: Duration::from_millis(100),
            yield_window: Duration::from_millis(10),
            startup_delay: Duration::from_millis(100),
            banner: true,
        }
    }
}

impl ConsoleConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the simulation period.
    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Builder method to set the yield window.
    #[must_use]
    pub const fn with_yield_window(mut self, window: Duration) -> Self {
        self.yield_window = window;
        self
    }

    /// Builder method to set the startup delay.
    #[must_use]
    pub const fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Builder method to enable or disable the greeting line.
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
