//! 模拟玩家 - 编排层
//!
//! 用随机作答的"玩家"跑完整局游戏，验证出题与计分在整局中的表现

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::leaderboard::NewScore;
use crate::workflow::{GameSession, GameStatus};

/// 一局模拟游戏的结果
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub initials: String,
    pub age: u8,
    pub score: u32,
    pub status: GameStatus,
    pub questions_answered: usize,
    /// 出现不合法题目的次数
    pub invalid_questions: usize,
}

impl GameSummary {
    pub fn to_new_score(&self) -> NewScore {
        NewScore::new(self.initials.clone(), i64::from(self.score), i64::from(self.age))
    }
}

/// 随机生成三个大写字母的缩写
pub fn random_initials<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..3).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect()
}

/// 模拟一局游戏
///
/// 玩家以 `config.simulated_accuracy` 的概率选中正确答案，否则从干扰项中随机选一个
pub fn play_simulated_game<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<GameSummary, AppError> {
    let accuracy = config.simulated_accuracy.max(0.0).min(1.0);
    let mut session = GameSession::new(config);
    let mut questions_answered = 0;
    let mut invalid_questions = 0;

    while !session.is_finished() {
        let question = session.next_question(rng)?;

        let problems = question.check_invariants();
        if !problems.is_empty() {
            warn!("⚠️ 不合法题目 {}: {:?}", question, problems);
            invalid_questions += 1;
        }

        let answer = if rng.gen_bool(accuracy) {
            question.correct_answer
        } else {
            *question.distractors.choose(rng).unwrap_or(&question.correct_answer)
        };

        session.record_answer(question.is_correct(answer))?;
        questions_answered += 1;
    }

    let summary = GameSummary {
        initials: random_initials(rng),
        age: rng.gen_range(4..=12),
        score: session.score(),
        status: session.status(),
        questions_answered,
        invalid_questions,
    };
    debug!("模拟结束: {:?}", summary);

    Ok(summary)
}
