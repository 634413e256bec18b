//! 应用主流程 - 编排层
//!
//! 1. 每关生成若干样题并校验
//! 2. 并发模拟多名玩家完整游戏，能进入前 N 名的成绩提交到共享排行榜
//! 3. 输出总榜和各年龄段榜单

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::leaderboard::AgeBracket;
use crate::orchestrator::simulation::{play_simulated_game, GameSummary};
use crate::services::level_config;
use crate::services::Leaderboard;
use crate::utils::logging::{
    log_leaderboard, log_level_start, log_startup, print_final_stats,
};
use crate::workflow::performance_message;
use crate::workflow::question_flow::assemble;

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub questions_generated: usize,
    pub invalid_questions: usize,
    pub games_played: usize,
    pub games_failed: usize,
    /// 进入排行榜的成绩数
    pub scores_submitted: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    leaderboard: Arc<Leaderboard>,
    rng: StdRng,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let leaderboard = Arc::new(Leaderboard::with_limit(config.leaderboard_limit));

        Self {
            config,
            leaderboard,
            rng,
        }
    }

    pub fn leaderboard(&self) -> Arc<Leaderboard> {
        Arc::clone(&self.leaderboard)
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<RunStats> {
        log_startup(self.config.simulated_players, self.config.seed);

        let mut stats = RunStats::default();

        self.sample_all_levels(&mut stats)?;
        self.simulate_players(&mut stats).await?;
        self.report_leaderboards().await;

        print_final_stats(
            stats.questions_generated,
            stats.invalid_questions,
            stats.games_played,
        );

        Ok(stats)
    }

    /// 每关生成样题
    fn sample_all_levels(&mut self, stats: &mut RunStats) -> Result<()> {
        for spec in level_config::all_specs() {
            log_level_start(spec.level, spec.label);

            for i in 1..=self.config.sample_questions_per_level {
                let question = assemble(spec, &mut self.rng)
                    .with_context(|| format!("关卡 {} 出题失败", spec.level))?;
                stats.questions_generated += 1;

                let problems = question.check_invariants();
                if problems.is_empty() {
                    info!(
                        "  {}. {} → 答案: {}  选项: {:?}",
                        i, question.prompt_text, question.correct_answer, question.answer_choices
                    );
                } else {
                    stats.invalid_questions += 1;
                    warn!("  {}. ⚠️ 不合法题目 {}: {:?}", i, question, problems);
                }

                if self.config.verbose_logging {
                    info!("     {}", serde_json::to_string(&question)?);
                }
            }
        }
        Ok(())
    }

    /// 并发模拟玩家
    async fn simulate_players(&mut self, stats: &mut RunStats) -> Result<()> {
        info!("\n🎮 开始模拟 {} 名玩家", self.config.simulated_players);

        let mut handles = Vec::with_capacity(self.config.simulated_players);
        for player_index in 1..=self.config.simulated_players {
            // 每个任务使用独立的随机源
            let mut rng = StdRng::seed_from_u64(self.rng.gen());
            let config = self.config.clone();

            let handle = tokio::spawn(async move { play_simulated_game(&config, &mut rng) });
            handles.push((player_index, handle));
        }

        for (player_index, handle) in handles {
            match handle.await {
                Ok(Ok(summary)) => {
                    stats.games_played += 1;
                    stats.questions_generated += summary.questions_answered;
                    stats.invalid_questions += summary.invalid_questions;
                    info!(
                        "[玩家 {}] {} (年龄 {}) 得分 {} - {:?} - {}",
                        player_index,
                        summary.initials,
                        summary.age,
                        summary.score,
                        summary.status,
                        performance_message(summary.score)
                    );
                    // 按玩家顺序提交，结果与任务完成顺序无关
                    match self.submit_if_qualified(&summary).await {
                        Ok(true) => stats.scores_submitted += 1,
                        Ok(false) => {}
                        Err(e) => error!("[玩家 {}] ❌ 成绩提交失败: {}", player_index, e),
                    }
                }
                Ok(Err(e)) => {
                    error!("[玩家 {}] ❌ 模拟失败: {}", player_index, e);
                    stats.games_failed += 1;
                }
                Err(e) => {
                    error!("[玩家 {}] 任务执行失败: {}", player_index, e);
                    stats.games_failed += 1;
                }
            }
        }

        Ok(())
    }

    /// 总榜未满或分数高于榜上最低分时才提交
    async fn submit_if_qualified(&self, summary: &GameSummary) -> Result<bool, AppError> {
        let score = u8::try_from(summary.score).unwrap_or(u8::MAX);
        if !self.leaderboard.qualifies(score, None).await {
            info!("  {} 得分 {} 未进入排行榜", summary.initials, summary.score);
            return Ok(false);
        }
        self.leaderboard.submit(summary.to_new_score()).await?;
        Ok(true)
    }

    async fn report_leaderboards(&self) {
        let overall = self.leaderboard.top(None).await;
        log_leaderboard("全部", &overall);

        for bracket in report_brackets(&self.config.report_brackets) {
            let entries = self.leaderboard.top(Some(bracket)).await;
            log_leaderboard(&bracket.to_string(), &entries);
        }
    }
}

/// 解析要输出的年龄段，未知名称跳过
fn report_brackets(names: &[String]) -> Vec<AgeBracket> {
    names
        .iter()
        .filter_map(|name| {
            let bracket = AgeBracket::from_query(name);
            if bracket.is_none() {
                warn!("⚠️ 未知的年龄段: {}", name);
            }
            bracket
        })
        .collect()
}
