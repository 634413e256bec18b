//! 出题流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整生成流程
//!
//! 流程顺序：
//! 1. 查关卡配置
//! 2. 生成操作数和运算符
//! 3. 计算正确答案
//! 4. 生成三个干扰项
//! 5. 打乱四个选项，组装题目

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::QuestionError;
use crate::models::level::LevelSpec;
use crate::models::question::Question;
use crate::services::answer_synthesizer::synthesize_distractors;
use crate::services::level_config;
use crate::services::operand_generator::generate_operands;

/// 为指定关卡生成一道题
///
/// 随机源由调用方传入，测试时可以用固定种子复现
///
/// # 返回
/// 关卡不在 1-10 时返回 `QuestionError::InvalidLevel`
pub fn generate_question<R: Rng + ?Sized>(
    level: i32,
    rng: &mut R,
) -> Result<Question, QuestionError> {
    let spec = level_config::lookup(level)?;
    assemble(spec, rng)
}

/// 使用线程本地随机源生成一道题
pub fn generate_random_question(level: i32) -> Result<Question, QuestionError> {
    generate_question(level, &mut rand::thread_rng())
}

/// 查询关卡配置（调试用）
pub fn get_level_config(level: i32) -> Result<LevelSpec, QuestionError> {
    level_config::lookup(level).cloned()
}

/// 按给定配置组装题目
pub fn assemble<R: Rng + ?Sized>(
    spec: &LevelSpec,
    rng: &mut R,
) -> Result<Question, QuestionError> {
    let operands = generate_operands(spec, rng)?;

    let correct_answer = operands
        .operator
        .apply(operands.operand1, operands.operand2)
        .ok_or(QuestionError::InvalidArithmetic {
            operand1: operands.operand1,
            operator: operands.operator.symbol(),
            operand2: operands.operand2,
        })?;

    let distractors = synthesize_distractors(correct_answer, spec.distractor_offsets, rng);

    let mut answer_choices = [
        correct_answer,
        distractors[0],
        distractors[1],
        distractors[2],
    ];
    answer_choices.shuffle(rng);

    let prompt_text =
        Question::format_prompt(operands.operand1, operands.operator, operands.operand2);
    debug!(
        "关卡 {} 出题: {} 选项 {:?}",
        spec.level, prompt_text, answer_choices
    );

    Ok(Question {
        level: spec.level,
        operand1: operands.operand1,
        operand2: operands.operand2,
        operator: operands.operator,
        correct_answer,
        distractors,
        answer_choices,
        prompt_text,
        label: spec.label,
    })
}
