pub mod leaderboard;
pub mod level;
pub mod question;

pub use leaderboard::{AgeBracket, LeaderboardEntry, NewScore};
pub use level::{
    LevelSpec, OperandRange, OperationKind, MAX_LEVEL, MIN_LEVEL, QUESTIONS_PER_LEVEL,
};
pub use question::{Operator, Question};
