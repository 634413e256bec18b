use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 出题错误
    #[error("出题错误: {0}")]
    Question(#[from] QuestionError),
    /// 排行榜错误
    #[error("排行榜错误: {0}")]
    Leaderboard(#[from] LeaderboardError),
    /// 游戏流程错误
    #[error("游戏错误: {0}")]
    Game(#[from] GameError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 出题相关错误
///
/// 这些错误对单次调用来说都是终止性的，不会在内部重试
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// 关卡超出 1-10
    #[error("无效关卡: {level}，必须在 1-10 之间")]
    InvalidLevel { level: i32 },
    /// 无法识别的运算类型名称
    #[error("未知的运算类型: {kind}")]
    UnknownOperationKind { kind: String },
    /// 需要操作数范围的运算类型缺少范围
    #[error("关卡 {level} 的配置缺少操作数范围")]
    MissingOperandRange { level: u8 },
    /// 算式无法得到非负整数结果
    #[error("无法计算 {operand1} {operator} {operand2}")]
    InvalidArithmetic {
        operand1: u32,
        operator: &'static str,
        operand2: u32,
    },
}

/// 排行榜错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaderboardError {
    /// 提交数据校验失败
    #[error("Validation error ({field}): {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
    /// 缩写校验规则无法编译
    #[error("缩写校验规则无效: {message}")]
    Pattern { message: String },
}

impl LeaderboardError {
    pub fn validation(field: &'static str, message: &'static str) -> Self {
        LeaderboardError::Validation { field, message }
    }
}

/// 游戏会话错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// 游戏已结束，不能再作答
    #[error("游戏已结束")]
    SessionFinished,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 解析配置文件失败
    #[error("无法解析配置文件 {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
