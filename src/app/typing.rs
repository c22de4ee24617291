//! Typewriter state machine for the hero tagline.
//!
//! Pure logic: each `tick` yields the text to display and the delay until the
//! next tick. The timer loop driving it lives in `ui::typewriter`.

/// Phrase typed out in the hero section.
pub const PHRASE: &str = "Building AI solutions that solve real-world problems";

/// Delay before the very first tick.
pub const START_DELAY_MS: u32 = 500;
/// Per-character delay while typing.
pub const TYPE_DELAY_MS: u32 = 100;
/// Per-character delay while deleting.
pub const DELETE_DELAY_MS: u32 = 50;
/// Pause once the full phrase is on screen.
pub const FULL_PAUSE_MS: u32 = 2000;
/// Pause once the phrase has been fully deleted.
pub const RESTART_PAUSE_MS: u32 = 500;

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text to display for this step.
    pub text: String,
    /// Delay until the next step, in milliseconds.
    pub delay_ms: u32,
}

/// Cycles typing and deleting forever; there is no terminal state.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrase: &str) -> Self {
        Self {
            chars: phrase.chars().collect(),
            index: 0,
            deleting: false,
        }
    }

    /// Current substring length, in characters. Always within `0..=phrase len`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one step. The text shown is the substring as of entry, so the
    /// step that reaches full length displays all but the last character and
    /// the first deleting step displays the whole phrase.
    pub fn tick(&mut self) -> Tick {
        if self.chars.is_empty() {
            return Tick {
                text: String::new(),
                delay_ms: RESTART_PAUSE_MS,
            };
        }

        let text: String = self.chars[..self.index].iter().collect();

        let mut delay_ms = if self.deleting {
            self.index = self.index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.index = (self.index + 1).min(self.chars.len());
            TYPE_DELAY_MS
        };

        if !self.deleting && self.index == self.chars.len() {
            delay_ms = FULL_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.index == 0 {
            self.deleting = false;
            delay_ms = RESTART_PAUSE_MS;
        }

        Tick { text, delay_ms }
    }
}
