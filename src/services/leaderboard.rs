//! 排行榜服务 - 业务能力层
//!
//! 内存中的排行榜：校验后插入，按分数读取前 N 名。不做持久化。

use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::LeaderboardError;
use crate::models::leaderboard::{AgeBracket, LeaderboardEntry, NewScore};
use crate::models::level::{MAX_LEVEL, MIN_LEVEL, QUESTIONS_PER_LEVEL};

/// 最高分数（10 关 × 5 题）
pub const MAX_SCORE: i64 = (MAX_LEVEL - MIN_LEVEL + 1) as i64 * QUESTIONS_PER_LEVEL as i64;
/// 最大年龄
pub const MAX_AGE: i64 = 120;
/// 默认展示条数
pub const DEFAULT_LIMIT: usize = 10;

/// 缩写格式：三个大写字母
pub const INITIALS_PATTERN: &str = r"^[A-Z]{3}$";

fn initials_pattern() -> Result<&'static Regex, LeaderboardError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(INITIALS_PATTERN))
        .as_ref()
        .map_err(|e| LeaderboardError::Pattern {
            message: e.to_string(),
        })
}

/// 校验待提交成绩
pub fn validate(new_score: &NewScore) -> Result<(), LeaderboardError> {
    let initials = new_score.initials.as_str();
    if initials.is_empty() {
        return Err(LeaderboardError::validation(
            "initials",
            "Initials are required and must be a string",
        ));
    }
    if initials.chars().count() != 3 {
        return Err(LeaderboardError::validation(
            "initials",
            "Initials must be exactly 3 characters",
        ));
    }
    if !initials_pattern()?.is_match(initials) {
        return Err(LeaderboardError::validation(
            "initials",
            "Initials must be 3 uppercase letters (A-Z)",
        ));
    }
    if !(0..=MAX_SCORE).contains(&new_score.score) {
        return Err(LeaderboardError::validation(
            "score",
            "Score must be between 0 and 50",
        ));
    }
    if !(0..=MAX_AGE).contains(&new_score.age) {
        return Err(LeaderboardError::validation(
            "age",
            "Age must be between 0 and 120",
        ));
    }
    Ok(())
}

/// 内存排行榜
///
/// 多个任务可以共享同一个实例（读多写少，使用 `RwLock`）
pub struct Leaderboard {
    entries: RwLock<Vec<LeaderboardEntry>>,
    limit: usize,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// `limit` 至少为 1
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 提交成绩，校验失败时不会写入
    pub async fn submit(
        &self,
        new_score: NewScore,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        validate(&new_score)?;

        // 校验已保证范围
        let entry = LeaderboardEntry {
            initials: new_score.initials,
            score: new_score.score as u8,
            age: new_score.age as u8,
            submitted_at: Utc::now(),
        };

        self.entries.write().await.push(entry.clone());
        info!("🏆 新成绩: {}", entry);

        Ok(entry)
    }

    /// 读取前 `limit` 名：分数降序，同分时先提交者在前
    pub async fn top(&self, bracket: Option<AgeBracket>) -> Vec<LeaderboardEntry> {
        let entries = self.entries.read().await;
        let mut listed: Vec<LeaderboardEntry> = entries
            .iter()
            .filter(|e| bracket.map_or(true, |b| b.contains(e.age)))
            .cloned()
            .collect();

        // 稳定排序，时间相同时保留插入顺序
        listed.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.submitted_at.cmp(&b.submitted_at))
        });
        listed.truncate(self.limit);

        debug!(
            "读取排行榜 ({}): {} 条",
            bracket.map_or("全部", |b| b.query_name()),
            listed.len()
        );
        listed
    }

    /// 判断分数能否进入前 `limit` 名
    ///
    /// 榜单未满时总能进入，否则必须严格高于榜上最低分
    pub async fn qualifies(&self, score: u8, bracket: Option<AgeBracket>) -> bool {
        let listed = self.top(bracket).await;
        if listed.len() < self.limit {
            return true;
        }
        listed.last().map_or(true, |lowest| score > lowest.score)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
