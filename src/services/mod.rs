pub mod answer_synthesizer;
pub mod leaderboard;
pub mod level_config;
pub mod operand_generator;

pub use answer_synthesizer::synthesize_distractors;
pub use leaderboard::Leaderboard;
pub use level_config::lookup;
pub use operand_generator::{generate_operands, Operands};
