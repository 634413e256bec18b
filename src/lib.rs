//! # Nutcracker 123
//!
//! 面向儿童的算术闯关游戏核心：10 个关卡、每关 5 题、4 选 1
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 关卡配置、题目、排行榜条目等值对象
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力都是无状态的纯函数
//! - `level_config` - 只读的关卡配置表
//! - `operand_generator` - 按关卡约束生成操作数（进位/借位/整除）
//! - `answer_synthesizer` - 生成三个合理的干扰项
//! - `leaderboard` - 内存排行榜（校验 + 排序读取）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"和"一局游戏"的流程
//! - `question_flow` - 出题入口：查配置 → 操作数 → 答案 → 干扰项 → 打乱
//! - `GameSession` - 计分、扣机会、升关
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 样题展示、并发模拟玩家、输出排行榜
//!
//! ## 随机源
//!
//! 所有出题函数都接收调用方传入的 `rand::Rng`，测试时使用固定种子的 `StdRng`

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, GameError, LeaderboardError, QuestionError, Result};
pub use models::{
    AgeBracket, LeaderboardEntry, LevelSpec, NewScore, OperationKind, Operator, Question,
};
pub use orchestrator::App;
pub use services::Leaderboard;
pub use utils::logging as logger;
pub use workflow::{
    generate_question, generate_random_question, get_level_config, GameSession,
};
