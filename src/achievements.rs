//! Achievement tiers derived from the run score.

use crate::constants::{TIER_BRONZE_MIN, TIER_GOLD_MIN, TIER_PLATINUM_MIN, TIER_SILVER_MIN};
use serde::{Deserialize, Serialize};

/// Tier awarded at the end of a run. Thresholds are fixed, monotonic and
/// non-overlapping, over the clamped (display) score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementTier {
    Novice,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl AchievementTier {
    pub fn all() -> [AchievementTier; 5] {
        [
            AchievementTier::Novice,
            AchievementTier::Bronze,
            AchievementTier::Silver,
            AchievementTier::Gold,
            AchievementTier::Platinum,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            AchievementTier::Novice => "Novice",
            AchievementTier::Bronze => "Bronze",
            AchievementTier::Silver => "Silver",
            AchievementTier::Gold => "Gold",
            AchievementTier::Platinum => "Platinum",
        }
    }
}

/// The tier for a clamped run score.
pub fn tier_for_score(score: u32) -> AchievementTier {
    if score >= TIER_PLATINUM_MIN {
        AchievementTier::Platinum
    } else if score >= TIER_GOLD_MIN {
        AchievementTier::Gold
    } else if score >= TIER_SILVER_MIN {
        AchievementTier::Silver
    } else if score >= TIER_BRONZE_MIN {
        AchievementTier::Bronze
    } else {
        AchievementTier::Novice
    }
}
