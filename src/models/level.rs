use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::QuestionError;

/// 最低关卡
pub const MIN_LEVEL: u8 = 1;
/// 最高关卡
pub const MAX_LEVEL: u8 = 10;
/// 每关题目数
pub const QUESTIONS_PER_LEVEL: u32 = 5;

/// 闭区间整数范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandRange {
    pub min: u32,
    pub max: u32,
}

impl OperandRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// 在范围内均匀抽取一个数
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for OperandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// 运算类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Addition,
    AdditionNoCarry,
    AdditionWithCarry,
    Subtraction,
    SubtractionNoBorrow,
    SubtractionWithBorrow,
    Multiplication,
    /// 乘除混合，不使用固定的操作数范围
    MixedMulDiv,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Addition => "addition",
            OperationKind::AdditionNoCarry => "addition_no_carry",
            OperationKind::AdditionWithCarry => "addition_with_carry",
            OperationKind::Subtraction => "subtraction",
            OperationKind::SubtractionNoBorrow => "subtraction_no_borrow",
            OperationKind::SubtractionWithBorrow => "subtraction_with_borrow",
            OperationKind::Multiplication => "multiplication",
            OperationKind::MixedMulDiv => "mixed_mul_div",
        }
    }

    /// 是否需要配置中的操作数范围
    pub fn uses_operand_ranges(self) -> bool {
        !matches!(self, OperationKind::MixedMulDiv)
    }
}

impl FromStr for OperationKind {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "addition" => Ok(OperationKind::Addition),
            "addition_no_carry" => Ok(OperationKind::AdditionNoCarry),
            "addition_with_carry" => Ok(OperationKind::AdditionWithCarry),
            "subtraction" => Ok(OperationKind::Subtraction),
            "subtraction_no_borrow" => Ok(OperationKind::SubtractionNoBorrow),
            "subtraction_with_borrow" => Ok(OperationKind::SubtractionWithBorrow),
            "multiplication" => Ok(OperationKind::Multiplication),
            "mixed_mul_div" | "mixed" => Ok(OperationKind::MixedMulDiv),
            other => Err(QuestionError::UnknownOperationKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个关卡的难度配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpec {
    pub level: u8,
    pub kind: OperationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand1: Option<OperandRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand2: Option<OperandRange>,
    /// 干扰项偏移量范围
    pub distractor_offsets: OperandRange,
    /// 难度描述（仅用于显示）
    pub label: &'static str,
}

impl LevelSpec {
    /// 取出两个操作数范围，缺失时视为配置错误
    pub fn operand_ranges(&self) -> Result<(OperandRange, OperandRange), QuestionError> {
        match (self.operand1, self.operand2) {
            (Some(r1), Some(r2)) => Ok((r1, r2)),
            _ => Err(QuestionError::MissingOperandRange { level: self.level }),
        }
    }
}
