//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量出题和整局模拟，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用主流程
//! - 管理随机源和共享排行榜
//! - 每关生成样题并校验
//! - 并发模拟玩家（tokio 任务）
//! - 输出排行榜和全局统计
//!
//! ### `simulation` - 单局模拟
//! - 驱动 `GameSession` 走完一局
//! - 统计不合法题目
//!
//! ## 层次关系
//!
//! ```text
//! app (多名玩家)
//!     ↓
//! simulation (一局游戏)
//!     ↓
//! workflow::GameSession / question_flow (一道题)
//!     ↓
//! services (能力层：关卡配置 / 操作数 / 干扰项 / 排行榜)
//! ```

pub mod app;
pub mod simulation;

pub use app::{App, RunStats};
pub use simulation::{play_simulated_game, GameSummary};
