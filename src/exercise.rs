use anyhow::{Result, bail};
use serde::Serialize;

/// How aggressively a passage is blanked. Level N hides roughly N% of the
/// words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            bail!(
                "difficulty level must be between {} and {}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Number of words to hide in a passage of `word_count` words: the level
    /// read as a percentage of the passage, rounded down.
    pub fn removal_quota(self, word_count: usize) -> usize {
        word_count * self.0 as usize / 100
    }
}

/// Numbered marker substituted for a hidden word. The ordinal is the 1-based
/// acceptance count, not the word's position in the passage.
pub fn placeholder(ordinal: usize) -> String {
    format!("____({ordinal})____")
}

#[derive(Clone, Debug, Serialize)]
pub struct BlankedPassage {
    pub text: String,
    /// Hidden words in acceptance order, original casing preserved. Entry N
    /// is the word `____(N)____` replaced.
    pub removed: Vec<String>,
}

#[derive(Clone, Debug)]
pub enum BlankOutcome {
    Blanked(BlankedPassage),
    /// The quota came out to zero words for this passage and level. A normal
    /// outcome; callers usually re-prompt for another level.
    NothingToRemove,
}
