pub mod game_session;
pub mod question_flow;

pub use game_session::{performance_message, GameSession, GameStatus, SessionEvent};
pub use question_flow::{generate_question, generate_random_question, get_level_config};
