//! Per-word hint unlocking
//!
//! The first hint request for a word costs one quiz question. Once answered
//! correctly the hint stays free until the word ends. Hint requests never spend
//! attempts.

/// Answer to a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResponse {
    /// The hint text
    Revealed(String),
    /// The question was answered wrongly; the player may ask again
    Denied,
    /// This word has no hint
    Unavailable,
}

/// What it takes to see the hint right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintAccess {
    Free(String),
    NeedsChallenge,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintController {
    hint: Option<String>,
    unlocked: bool,
}

impl HintController {
    #[must_use]
    pub const fn new(hint: Option<String>) -> Self {
        Self {
            hint,
            unlocked: false,
        }
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub const fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    #[must_use]
    pub fn access(&self) -> HintAccess {
        match &self.hint {
            None => HintAccess::Unavailable,
            Some(text) if self.unlocked => HintAccess::Free(text.clone()),
            Some(_) => HintAccess::NeedsChallenge,
        }
    }

    /// Apply the outcome of the unlock question
    pub fn resolve(&mut self, correct: bool) -> HintResponse {
        match &self.hint {
            None => HintResponse::Unavailable,
            Some(text) if correct => {
                self.unlocked = true;
                HintResponse::Revealed(text.clone())
            }
            Some(_) => HintResponse::Denied,
        }
    }
}
