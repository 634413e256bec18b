use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::error::ConfigError;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 初始机会数
    pub starting_strikes: u32,
    /// 排行榜展示条数
    pub leaderboard_limit: usize,
    /// 结束时输出的年龄段榜单（查询参数名，如 `6_7`）
    pub report_brackets: Vec<String>,
    /// 启动时每关展示的样题数
    pub sample_questions_per_level: usize,
    /// 模拟玩家数量
    pub simulated_players: usize,
    /// 模拟玩家答对的概率
    pub simulated_accuracy: f64,
    /// 随机种子，未设置时使用系统熵
    pub seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_strikes: 3,
            leaderboard_limit: 10,
            report_brackets: ["5_under", "6_7", "8_10", "11_up"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sample_questions_per_level: 3,
            simulated_players: 8,
            simulated_accuracy: 0.8,
            seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            starting_strikes: env_or("STARTING_STRIKES", default.starting_strikes),
            leaderboard_limit: env_or("LEADERBOARD_LIMIT", default.leaderboard_limit),
            report_brackets: std::env::var("REPORT_BRACKETS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.report_brackets),
            sample_questions_per_level: env_or(
                "SAMPLE_QUESTIONS_PER_LEVEL",
                default.sample_questions_per_level,
            ),
            simulated_players: env_or("SIMULATED_PLAYERS", default.simulated_players),
            simulated_accuracy: env_or("SIMULATED_ACCURACY", default.simulated_accuracy),
            seed: std::env::var("GAME_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(default.seed),
            verbose_logging: env_or("VERBOSE_LOGGING", default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub async fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
