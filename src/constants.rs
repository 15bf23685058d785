// Dice
pub const DICE_SIDES: u32 = 6;

// Quiz scoring
pub const ANSWERS_PER_QUESTION: usize = 4;
pub const CORRECT_ANSWER_POINTS: i32 = 10;
pub const WRONG_ANSWER_POINTS: i32 = -5;

// Final score: clamped score * FINAL_SCORE_MULTIPLIER - elapsed seconds
pub const FINAL_SCORE_MULTIPLIER: i64 = 10;

// Achievement tier lower bounds (over the clamped score)
pub const TIER_BRONZE_MIN: u32 = 20;
pub const TIER_SILVER_MIN: u32 = 50;
pub const TIER_GOLD_MIN: u32 = 80;
pub const TIER_PLATINUM_MIN: u32 = 120;

// Leaderboard
pub const LEADERBOARD_CAPACITY: usize = 50;
pub const TOP_TEN_CUTOFF: usize = 10;
pub const LEADERBOARD_DISPLAY_LIMIT: usize = 20;

// Question generation
pub const GENERATED_QUESTION_COUNT: usize = 12;

// Board
pub const START_POSITION: (usize, usize) = (0, 0);

// UI event poll interval
pub const UI_POLL_INTERVAL_MS: u64 = 100;
