//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::leaderboard::LeaderboardEntry;

/// 初始化日志，`RUST_LOG` 未设置时默认 `info`
///
/// 重复调用不会报错
pub fn init() {
    init_with_verbose(false);
}

/// 初始化日志，`verbose` 为真时默认级别改为 `debug`
pub fn init_with_verbose(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(players: usize, seed: Option<u64>) {
    info!("{}", "=".repeat(60));
    info!("🚀 Nutcracker 123 启动");
    info!(
        "🕐 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("👥 模拟玩家数: {}", players);
    match seed {
        Some(seed) => info!("🎲 随机种子: {}", seed),
        None => info!("🎲 随机种子: 系统熵"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录关卡样题开始信息
pub fn log_level_start(level: u8, label: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📊 关卡 {}: {}", level, label);
    info!("{}", "─".repeat(60));
}

/// 输出排行榜
pub fn log_leaderboard(title: &str, entries: &[LeaderboardEntry]) {
    info!("\n🏆 排行榜 - {}", title);
    if entries.is_empty() {
        info!("  (暂无成绩)");
        return;
    }
    for (rank, entry) in entries.iter().enumerate() {
        info!("  {:>2}. {}", rank + 1, entry);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 生成题目总数
/// - `invalid`: 不合法题目数
/// - `games`: 模拟局数
pub fn print_final_stats(questions: usize, invalid: usize, games: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 生成题目: {}", questions);
    info!("❌ 不合法题目: {}", invalid);
    info!("🎮 模拟局数: {}", games);
    info!("{}", "=".repeat(60));
}
