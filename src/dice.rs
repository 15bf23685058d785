//! Dice rolling.

use crate::constants::DICE_SIDES;
use rand::Rng;

/// Roll the movement die: uniform in `1..=DICE_SIDES`.
pub fn roll(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=DICE_SIDES)
}
