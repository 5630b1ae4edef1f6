use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Learning-progress bucket a card lives in.
///
/// Each stage maps to one directory under the vault root. The locator scans
/// them in [`StageName::SEARCH_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageName {
    /// Freshly filed or reset cards.
    New,
    /// Cards under active review.
    Memorizing,
    /// Cards considered learned.
    Remembered,
}

impl StageName {
    /// Priority order used when searching for an existing card.
    pub const SEARCH_ORDER: [StageName; 3] =
        [StageName::New, StageName::Memorizing, StageName::Remembered];

    /// Stage a card should occupy after being touched by a filing operation.
    ///
    /// Transition table:
    /// - (absent) -> `New`
    /// - `New` -> `New`
    /// - `Memorizing` -> `New`
    /// - `Remembered` -> `New`
    ///
    /// Any touch resets learning progress. There is no promotion along
    /// New -> Memorizing -> Remembered; those moves are made by hand in the vault.
    pub fn target_after_touch(current: Option<StageName>) -> StageName {
        match current {
            None => StageName::New,
            Some(StageName::New) => StageName::New,
            Some(StageName::Memorizing) => StageName::New,
            Some(StageName::Remembered) => StageName::New,
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageName::New => write!(f, "New"),
            StageName::Memorizing => write!(f, "Memorizing"),
            StageName::Remembered => write!(f, "Remembered"),
        }
    }
}

impl std::str::FromStr for StageName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(StageName::New),
            "memorizing" => Ok(StageName::Memorizing),
            "remembered" => Ok(StageName::Remembered),
            _ => bail!("Invalid stage: {s}. Use: new, memorizing, remembered"),
        }
    }
}

/// Result of resolving where a card goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTransition {
    pub from: Option<StageName>,
    pub target: StageName,
    /// True when the card leaves a stage other than the target.
    pub was_moved: bool,
}

/// Decide the target stage for `key` given the stage it currently occupies.
pub fn resolve(key: &str, current: Option<StageName>) -> StageTransition {
    let target = StageName::target_after_touch(current);
    let was_moved = current.is_some_and(|stage| stage != StageName::New);

    if was_moved {
        tracing::info!(key, from = ?current, to = %target, "moving wordcard back to New");
    }

    StageTransition {
        from: current,
        target,
        was_moved,
    }
}
