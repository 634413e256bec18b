//! 干扰项生成 - 业务能力层
//!
//! 只负责"给定正确答案，生成三个似是而非的错误答案"

use rand::Rng;
use tracing::debug;

use crate::models::level::OperandRange;

/// 随机搜索的最大尝试次数
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 100;
/// 干扰项个数
pub const DISTRACTOR_COUNT: usize = 3;

/// 生成三个互不相同、都大于 0 且不等于正确答案的干扰项
///
/// 先在 `±[offsets.min, offsets.max]` 内随机搜索，失败后按
/// `correct + offsets.min + k`（k = 0, 1, 2, ...）依次补齐
pub fn synthesize_distractors<R: Rng + ?Sized>(
    correct_answer: u32,
    offsets: OperandRange,
    rng: &mut R,
) -> [u32; DISTRACTOR_COUNT] {
    let correct = i64::from(correct_answer);
    let mut chosen: Vec<u32> = Vec::with_capacity(DISTRACTOR_COUNT);

    let mut attempts = 0;
    while chosen.len() < DISTRACTOR_COUNT && attempts < MAX_DISTRACTOR_ATTEMPTS {
        attempts += 1;

        let magnitude = i64::from(offsets.sample(rng));
        let offset = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        try_accept(correct + offset, correct_answer, &mut chosen);
    }

    if chosen.len() < DISTRACTOR_COUNT {
        debug!(
            "正确答案 {} 随机搜索只找到 {} 个干扰项，使用顺序补齐",
            correct_answer,
            chosen.len()
        );
        let mut candidate = correct + i64::from(offsets.min);
        while chosen.len() < DISTRACTOR_COUNT {
            try_accept(candidate, correct_answer, &mut chosen);
            candidate += 1;
        }
    }

    [chosen[0], chosen[1], chosen[2]]
}

/// 候选值必须为正、不等于正确答案且未被选中
fn try_accept(candidate: i64, correct_answer: u32, chosen: &mut Vec<u32>) {
    let Ok(value) = u32::try_from(candidate) else {
        return;
    };
    if value != 0 && value != correct_answer && !chosen.contains(&value) {
        chosen.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_valid(correct: u32, distractors: [u32; 3]) {
        for d in distractors {
            assert!(d >= 1, "干扰项必须大于 0: {:?}", distractors);
            assert_ne!(d, correct);
        }
        assert_ne!(distractors[0], distractors[1]);
        assert_ne!(distractors[0], distractors[2]);
        assert_ne!(distractors[1], distractors[2]);
    }

    #[test]
    fn test_distractors_within_offset_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let offsets = OperandRange::new(5, 10);
        for correct in [30u32, 64, 81] {
            for _ in 0..200 {
                let distractors = synthesize_distractors(correct, offsets, &mut rng);
                assert_valid(correct, distractors);
                for d in distractors {
                    let diff = (i64::from(d) - i64::from(correct)).unsigned_abs() as u32;
                    assert!(offsets.contains(diff), "{} 偏离 {} 太远", d, correct);
                }
            }
        }
    }

    #[test]
    fn test_small_answers_stay_positive() {
        let mut rng = StdRng::seed_from_u64(7);
        for correct in 0..=3u32 {
            for _ in 0..200 {
                let distractors =
                    synthesize_distractors(correct, OperandRange::new(8, 15), &mut rng);
                assert_valid(correct, distractors);
            }
        }
    }

    #[test]
    fn test_fallback_fills_sequentially() {
        // 单值偏移带只能产生 correct ± 1，随机搜索最多得到 2 个
        let mut rng = StdRng::seed_from_u64(9);
        let distractors = synthesize_distractors(5, OperandRange::new(1, 1), &mut rng);
        assert_valid(5, distractors);
        let mut sorted = distractors;
        sorted.sort_unstable();
        assert_eq!(sorted, [4, 6, 7]);
    }

    #[test]
    fn test_fallback_with_degenerate_rng() {
        // 恒定的随机源每次都抽到同一个候选
        let mut rng = StepRng::new(0, 0);
        let distractors = synthesize_distractors(2, OperandRange::new(1, 3), &mut rng);
        assert_valid(2, distractors);
    }
}
