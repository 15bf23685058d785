//! The reward wheel spun on event tiles.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelCategory {
    Positive,
    Neutral,
    Negative,
}

/// One slot on the wheel: a point delta and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelOutcome {
    pub label: &'static str,
    pub delta: i32,
    pub category: WheelCategory,
}

/// The fixed wheel: 8 slots, static for the process lifetime.
pub const WHEEL_OUTCOMES: [WheelOutcome; 8] = [
    WheelOutcome {
        label: "Jackpot!",
        delta: 25,
        category: WheelCategory::Positive,
    },
    WheelOutcome {
        label: "Lucky find",
        delta: 15,
        category: WheelCategory::Positive,
    },
    WheelOutcome {
        label: "Study bonus",
        delta: 10,
        category: WheelCategory::Positive,
    },
    WheelOutcome {
        label: "Pocket change",
        delta: 5,
        category: WheelCategory::Positive,
    },
    WheelOutcome {
        label: "Nothing happens",
        delta: 0,
        category: WheelCategory::Neutral,
    },
    WheelOutcome {
        label: "Stumble",
        delta: -5,
        category: WheelCategory::Negative,
    },
    WheelOutcome {
        label: "Lost your notes",
        delta: -10,
        category: WheelCategory::Negative,
    },
    WheelOutcome {
        label: "Trap door!",
        delta: -15,
        category: WheelCategory::Negative,
    },
];

/// Spin the wheel: uniform over the fixed slots. Stateless between spins.
pub fn spin(rng: &mut impl Rng) -> &'static WheelOutcome {
    &WHEEL_OUTCOMES[rng.gen_range(0..WHEEL_OUTCOMES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_wheel_has_eight_slots() {
        assert_eq!(WHEEL_OUTCOMES.len(), 8);
    }

    #[test]
    fn test_categories_match_deltas() {
        for outcome in &WHEEL_OUTCOMES {
            match outcome.category {
                WheelCategory::Positive => assert!(outcome.delta > 0, "{}", outcome.label),
                WheelCategory::Neutral => assert_eq!(outcome.delta, 0, "{}", outcome.label),
                WheelCategory::Negative => assert!(outcome.delta < 0, "{}", outcome.label),
            }
        }
    }

    #[test]
    fn test_every_slot_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(777);
        let mut hits = [0u32; WHEEL_OUTCOMES.len()];
        for _ in 0..2000 {
            let outcome = spin(&mut rng);
            let index = WHEEL_OUTCOMES
                .iter()
                .position(|o| o == outcome)
                .expect("spin returns a configured slot");
            hits[index] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "all slots should be hit: {:?}", hits);
    }
}
