//! 关卡配置表 - 业务能力层
//!
//! 只读的静态数据，进程内不可变，可被多个调用方同时读取

use crate::error::QuestionError;
use crate::models::level::{LevelSpec, OperandRange, OperationKind, MAX_LEVEL, MIN_LEVEL};

const fn ranged(
    level: u8,
    kind: OperationKind,
    operand1: (u32, u32),
    operand2: (u32, u32),
    offsets: (u32, u32),
    label: &'static str,
) -> LevelSpec {
    LevelSpec {
        level,
        kind,
        operand1: Some(OperandRange::new(operand1.0, operand1.1)),
        operand2: Some(OperandRange::new(operand2.0, operand2.1)),
        distractor_offsets: OperandRange::new(offsets.0, offsets.1),
        label,
    }
}

static LEVEL_CONFIGS: [LevelSpec; MAX_LEVEL as usize] = [
    ranged(1, OperationKind::Addition, (1, 5), (1, 5), (1, 3), "Single Digit Addition (Easy)"),
    ranged(2, OperationKind::Addition, (5, 9), (5, 9), (2, 5), "Single Digit Addition (Harder)"),
    ranged(3, OperationKind::Subtraction, (5, 9), (1, 5), (1, 3), "Single Digit Subtraction"),
    ranged(
        4,
        OperationKind::AdditionNoCarry,
        (10, 49),
        (10, 49),
        (3, 7),
        "Double Digit Addition (No Carry)",
    ),
    ranged(
        5,
        OperationKind::SubtractionNoBorrow,
        (20, 49),
        (10, 25),
        (3, 7),
        "Double Digit Subtraction (No Borrow)",
    ),
    ranged(6, OperationKind::Multiplication, (2, 5), (2, 5), (2, 5), "Single Digit Multiplication"),
    ranged(
        7,
        OperationKind::Multiplication,
        (6, 9),
        (6, 9),
        (5, 10),
        "Single Digit Multiplication (Harder)",
    ),
    ranged(
        8,
        OperationKind::AdditionWithCarry,
        (10, 49),
        (10, 49),
        (5, 12),
        "Double Digit Addition (With Carry)",
    ),
    ranged(
        9,
        OperationKind::SubtractionWithBorrow,
        (30, 99),
        (10, 49),
        (5, 12),
        "Double Digit Subtraction (With Borrow)",
    ),
    LevelSpec {
        level: 10,
        kind: OperationKind::MixedMulDiv,
        operand1: None,
        operand2: None,
        distractor_offsets: OperandRange::new(8, 15),
        label: "Multiplication & Division Mix",
    },
];

/// 查询关卡配置
///
/// # 返回
/// 关卡不在 1-10 时返回 `QuestionError::InvalidLevel`
pub fn lookup(level: i32) -> Result<&'static LevelSpec, QuestionError> {
    if level < MIN_LEVEL as i32 || level > MAX_LEVEL as i32 {
        return Err(QuestionError::InvalidLevel { level });
    }
    Ok(&LEVEL_CONFIGS[(level - MIN_LEVEL as i32) as usize])
}

/// 全部关卡配置，按关卡顺序
pub fn all_specs() -> &'static [LevelSpec] {
    &LEVEL_CONFIGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_spec_per_level() {
        for (idx, spec) in all_specs().iter().enumerate() {
            assert_eq!(spec.level as usize, idx + 1);
            assert_eq!(lookup(spec.level as i32).unwrap(), spec);
        }
        assert_eq!(all_specs().len(), 10);
    }

    #[test]
    fn test_out_of_range_levels() {
        for level in [-1, 0, 11, 100] {
            assert_eq!(lookup(level), Err(QuestionError::InvalidLevel { level }));
        }
    }

    #[test]
    fn test_ranged_kinds_have_ranges() {
        for spec in all_specs() {
            assert_eq!(
                spec.kind.uses_operand_ranges(),
                spec.operand_ranges().is_ok(),
                "关卡 {} 的范围配置不一致",
                spec.level
            );
            assert!(spec.distractor_offsets.min >= 1);
            assert!(spec.distractor_offsets.min <= spec.distractor_offsets.max);
        }
    }

    #[test]
    fn test_table_values() {
        let level9 = lookup(9).unwrap();
        assert_eq!(level9.kind, OperationKind::SubtractionWithBorrow);
        assert_eq!(level9.operand1, Some(OperandRange::new(30, 99)));
        assert_eq!(level9.operand2, Some(OperandRange::new(10, 49)));
        assert_eq!(level9.distractor_offsets, OperandRange::new(5, 12));

        let level10 = lookup(10).unwrap();
        assert_eq!(level10.kind, OperationKind::MixedMulDiv);
        assert_eq!(level10.distractor_offsets, OperandRange::new(8, 15));
    }
}
