//! 游戏会话 - 流程层
//!
//! 记录"正在第几关第几题、得了几分、还剩几次机会"，不涉及画面和声音

use rand::Rng;
use std::fmt::Display;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{GameError, QuestionError};
use crate::models::level::{MAX_LEVEL, MIN_LEVEL, QUESTIONS_PER_LEVEL};
use crate::models::question::Question;
use crate::workflow::question_flow::generate_question;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// 全部关卡答完
    Completed,
    /// 机会用完
    Over,
}

/// 作答后发生的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// 同一关的下一题
    NextQuestion,
    /// 进入下一关
    LevelComplete { next_level: u8 },
    /// 最后一关答完
    GameComplete,
    /// 机会用完
    GameOver,
}

/// 一局游戏
#[derive(Debug, Clone)]
pub struct GameSession {
    level: u8,
    /// 当前关内的题号（从 1 开始）
    question_number: u32,
    score: u32,
    strikes: u32,
    status: GameStatus,
}

impl GameSession {
    /// 按配置开始一局新游戏
    pub fn new(config: &Config) -> Self {
        Self::with_strikes(config.starting_strikes)
    }

    pub fn with_strikes(starting_strikes: u32) -> Self {
        Self {
            level: MIN_LEVEL,
            question_number: 1,
            score: 0,
            strikes: starting_strikes,
            status: GameStatus::Playing,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// 满分
    pub fn max_score(&self) -> u32 {
        u32::from(MAX_LEVEL - MIN_LEVEL + 1) * QUESTIONS_PER_LEVEL
    }

    /// 为当前关卡出一道题
    pub fn next_question<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Question, QuestionError> {
        generate_question(i32::from(self.level), rng)
    }

    /// 记录一次作答并推进进度
    pub fn record_answer(&mut self, correct: bool) -> Result<SessionEvent, GameError> {
        if self.is_finished() {
            return Err(GameError::SessionFinished);
        }

        if correct {
            self.score += 1;
        } else {
            self.strikes = self.strikes.saturating_sub(1);
            if self.strikes == 0 {
                self.status = GameStatus::Over;
                info!("💥 机会用完，游戏结束: {}", self);
                return Ok(SessionEvent::GameOver);
            }
        }

        // 答错也会继续推进，只扣机会
        let event = if self.question_number < QUESTIONS_PER_LEVEL {
            self.question_number += 1;
            SessionEvent::NextQuestion
        } else if self.level < MAX_LEVEL {
            self.level += 1;
            self.question_number = 1;
            info!("🎉 进入第 {} 关", self.level);
            SessionEvent::LevelComplete {
                next_level: self.level,
            }
        } else {
            self.status = GameStatus::Completed;
            info!("🏁 全部关卡完成: {}", self);
            SessionEvent::GameComplete
        };

        debug!("作答 {} → {:?}", if correct { "正确" } else { "错误" }, event);
        Ok(event)
    }
}

impl Display for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[关卡 {}/{} 题目 {}/{} 得分 {} 机会 {}]",
            self.level,
            MAX_LEVEL,
            self.question_number,
            QUESTIONS_PER_LEVEL,
            self.score,
            self.strikes
        )
    }
}

/// 结算评语
pub fn performance_message(score: u32) -> &'static str {
    if score >= 45 {
        "Perfect! You're a Math Master!"
    } else if score >= 35 {
        "Excellent Work!"
    } else if score >= 25 {
        "Great Job!"
    } else if score >= 15 {
        "Good Try!"
    } else {
        "Keep Practicing!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(&Config::default());
        assert_eq!(session.level(), 1);
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.strikes(), 3);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.max_score(), 50);
    }

    #[test]
    fn test_max_score_fits_leaderboard() {
        let session = GameSession::new(&Config::default());
        assert_eq!(
            i64::from(session.max_score()),
            crate::services::leaderboard::MAX_SCORE
        );
        assert!(crate::services::leaderboard::validate(&crate::models::NewScore::new(
            "ABC",
            i64::from(session.max_score()),
            8
        ))
        .is_ok());
    }

    #[test]
    fn test_level_advances_after_fifth_question() {
        let mut session = GameSession::with_strikes(3);
        for _ in 0..4 {
            assert_eq!(session.record_answer(true), Ok(SessionEvent::NextQuestion));
        }
        assert_eq!(
            session.record_answer(true),
            Ok(SessionEvent::LevelComplete { next_level: 2 })
        );
        assert_eq!(session.level(), 2);
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn test_wrong_answer_still_advances() {
        let mut session = GameSession::with_strikes(3);
        assert_eq!(session.record_answer(false), Ok(SessionEvent::NextQuestion));
        assert_eq!(session.strikes(), 2);
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_three_strikes_ends_game() {
        let mut session = GameSession::with_strikes(3);
        session.record_answer(false).unwrap();
        session.record_answer(false).unwrap();
        assert_eq!(session.record_answer(false), Ok(SessionEvent::GameOver));
        assert_eq!(session.status(), GameStatus::Over);
        assert_eq!(session.record_answer(true), Err(GameError::SessionFinished));
    }

    #[test]
    fn test_perfect_game_completes() {
        let mut session = GameSession::with_strikes(3);
        let mut last = None;
        while !session.is_finished() {
            last = Some(session.record_answer(true).unwrap());
        }
        assert_eq!(last, Some(SessionEvent::GameComplete));
        assert_eq!(session.status(), GameStatus::Completed);
        assert_eq!(session.score(), 50);
        assert_eq!(
            performance_message(session.score()),
            "Perfect! You're a Math Master!"
        );
    }

    #[test]
    fn test_performance_messages() {
        assert_eq!(performance_message(0), "Keep Practicing!");
        assert_eq!(performance_message(14), "Keep Practicing!");
        assert_eq!(performance_message(15), "Good Try!");
        assert_eq!(performance_message(25), "Great Job!");
        assert_eq!(performance_message(35), "Excellent Work!");
        assert_eq!(performance_message(44), "Excellent Work!");
        assert_eq!(performance_message(45), "Perfect! You're a Math Master!");
    }
}
