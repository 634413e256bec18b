//! 操作数生成 - 业务能力层
//!
//! 按关卡的运算类型抽取两个操作数，并施加进位/借位/整除约束

use rand::Rng;
use tracing::debug;

use crate::error::QuestionError;
use crate::models::level::{LevelSpec, OperandRange, OperationKind};
use crate::models::question::Operator;

/// 约束抽取的最大尝试次数
pub const MAX_CONSTRAINT_ATTEMPTS: usize = 100;

/// 乘除混合关卡的乘法操作数范围
pub const HARD_MULTIPLICATION_RANGE: OperandRange = OperandRange::new(6, 12);
/// 乘除混合关卡的除数范围
pub const DIVISOR_RANGE: OperandRange = OperandRange::new(2, 10);

const DIVIDEND_MIN: u32 = 20;
const DIVIDEND_MAX: u32 = 100;

/// 生成的算式（不含答案）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub operand1: u32,
    pub operand2: u32,
    pub operator: Operator,
}

impl Operands {
    fn new(operand1: u32, operand2: u32, operator: Operator) -> Self {
        Self {
            operand1,
            operand2,
            operator,
        }
    }
}

/// 个位相加是否进位
pub fn has_carry(operand1: u32, operand2: u32) -> bool {
    operand1 % 10 + operand2 % 10 >= 10
}

/// 个位相减是否借位
pub fn has_borrow(operand1: u32, operand2: u32) -> bool {
    operand2 % 10 > operand1 % 10
}

/// 按关卡配置生成操作数和运算符
pub fn generate_operands<R: Rng + ?Sized>(
    spec: &LevelSpec,
    rng: &mut R,
) -> Result<Operands, QuestionError> {
    let operands = match spec.kind {
        OperationKind::Addition => {
            let (r1, r2) = spec.operand_ranges()?;
            Operands::new(r1.sample(rng), r2.sample(rng), Operator::Add)
        }
        OperationKind::Multiplication => {
            let (r1, r2) = spec.operand_ranges()?;
            Operands::new(r1.sample(rng), r2.sample(rng), Operator::Multiply)
        }
        OperationKind::Subtraction => {
            let (r1, r2) = spec.operand_ranges()?;
            let (a, b) = draw_subtraction(r1, r2, rng);
            Operands::new(a, b, Operator::Subtract)
        }
        OperationKind::AdditionNoCarry => {
            let (r1, r2) = spec.operand_ranges()?;
            let (a, b) = draw_until(
                spec.level,
                |rng| (r1.sample(rng), r2.sample(rng)),
                |a, b| !has_carry(a, b),
                rng,
            );
            Operands::new(a, b, Operator::Add)
        }
        OperationKind::AdditionWithCarry => {
            let (r1, r2) = spec.operand_ranges()?;
            let (a, b) = draw_until(
                spec.level,
                |rng| (r1.sample(rng), r2.sample(rng)),
                has_carry,
                rng,
            );
            Operands::new(a, b, Operator::Add)
        }
        OperationKind::SubtractionNoBorrow => {
            let (r1, r2) = spec.operand_ranges()?;
            let (a, b) = draw_until(
                spec.level,
                |rng| draw_subtraction(r1, r2, rng),
                |a, b| !has_borrow(a, b),
                rng,
            );
            Operands::new(a, b, Operator::Subtract)
        }
        OperationKind::SubtractionWithBorrow => {
            let (r1, r2) = spec.operand_ranges()?;
            let (a, b) = draw_until(
                spec.level,
                |rng| draw_subtraction(r1, r2, rng),
                has_borrow,
                rng,
            );
            Operands::new(a, b, Operator::Subtract)
        }
        OperationKind::MixedMulDiv => {
            if rng.gen_bool(0.5) {
                hard_multiplication(rng)
            } else {
                exact_division(rng)
            }
        }
    };

    Ok(operands)
}

/// 减法抽取：第二个数不超过第一个数，结果非负
fn draw_subtraction<R: Rng + ?Sized>(
    range1: OperandRange,
    range2: OperandRange,
    rng: &mut R,
) -> (u32, u32) {
    let operand1 = range1.sample(rng);
    let upper = range2.max.min(operand1);
    let lower = range2.min.min(upper);
    let operand2 = rng.gen_range(lower..=upper);
    (operand1, operand2)
}

/// 反复抽取直到满足条件，最多 `MAX_CONSTRAINT_ATTEMPTS` 次
///
/// 次数用尽时接受最后一次抽取的结果（尽力而为，算式本身仍然正确）
fn draw_until<R, D, P>(level: u8, mut draw: D, accept: P, rng: &mut R) -> (u32, u32)
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> (u32, u32),
    P: Fn(u32, u32) -> bool,
{
    let mut last = draw(&mut *rng);
    for _ in 1..MAX_CONSTRAINT_ATTEMPTS {
        if accept(last.0, last.1) {
            return last;
        }
        last = draw(&mut *rng);
    }

    if !accept(last.0, last.1) {
        debug!(
            "关卡 {} 尝试 {} 次仍未满足约束，接受 {} / {}",
            level, MAX_CONSTRAINT_ATTEMPTS, last.0, last.1
        );
    }
    last
}

fn hard_multiplication<R: Rng + ?Sized>(rng: &mut R) -> Operands {
    Operands::new(
        HARD_MULTIPLICATION_RANGE.sample(rng),
        HARD_MULTIPLICATION_RANGE.sample(rng),
        Operator::Multiply,
    )
}

/// 被除数由除数和商相乘得到，保证整除
fn exact_division<R: Rng + ?Sized>(rng: &mut R) -> Operands {
    let divisor = DIVISOR_RANGE.sample(rng);
    let quotient = rng.gen_range(DIVIDEND_MIN / divisor..=DIVIDEND_MAX / divisor);
    Operands::new(divisor * quotient, divisor, Operator::Divide)
}
