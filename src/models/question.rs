use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// 运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// 显示用符号
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// 计算结果，只接受得到非负整数的算式
    pub fn apply(self, lhs: u32, rhs: u32) -> Option<u32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 一道选择题
///
/// 每次调用新生成，归调用方所有
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub level: u8,
    pub operand1: u32,
    pub operand2: u32,
    pub operator: Operator,
    pub correct_answer: u32,
    pub distractors: [u32; 3],
    /// 打乱顺序后的四个选项
    pub answer_choices: [u32; 4],
    pub prompt_text: String,
    pub label: &'static str,
}

impl Question {
    /// 生成题面，例如 `3 + 4 = ?`
    pub fn format_prompt(operand1: u32, operator: Operator, operand2: u32) -> String {
        format!("{} {} {} = ?", operand1, operator, operand2)
    }

    pub fn contains_choice(&self, value: u32) -> bool {
        self.answer_choices.contains(&value)
    }

    pub fn is_correct(&self, answer: u32) -> bool {
        answer == self.correct_answer
    }

    /// 检查题目形状，返回所有不满足的规则，合法时为空
    pub fn check_invariants(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.contains_choice(self.correct_answer) {
            problems.push(format!("正确答案 {} 不在选项中", self.correct_answer));
        }

        let unique: HashSet<u32> = self.answer_choices.iter().copied().collect();
        if unique.len() != self.answer_choices.len() {
            problems.push(format!("选项有重复: {:?}", self.answer_choices));
        }

        if self.distractors.contains(&self.correct_answer) {
            problems.push("干扰项与正确答案相同".to_string());
        }

        if self.distractors.contains(&0) {
            problems.push(format!("干扰项包含 0: {:?}", self.distractors));
        }

        if self.operator.apply(self.operand1, self.operand2) != Some(self.correct_answer) {
            problems.push(format!(
                "算式 {} {} {} 的结果不是 {}",
                self.operand1, self.operator, self.operand2, self.correct_answer
            ));
        }

        if self.operator == Operator::Divide
            && (self.operand2 == 0 || self.operand1 % self.operand2 != 0)
        {
            problems.push(format!(
                "除法有余数: {} ÷ {}",
                self.operand1, self.operand2
            ));
        }

        problems
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[关卡 {}] {} 选项: {:?}",
            self.level, self.prompt_text, self.answer_choices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            level: 1,
            operand1: 3,
            operand2: 4,
            operator: Operator::Add,
            correct_answer: 7,
            distractors: [5, 9, 10],
            answer_choices: [9, 7, 10, 5],
            prompt_text: Question::format_prompt(3, Operator::Add, 4),
            label: "Single Digit Addition (Easy)",
        }
    }

    #[test]
    fn test_apply_checked() {
        assert_eq!(Operator::Add.apply(3, 4), Some(7));
        assert_eq!(Operator::Subtract.apply(9, 4), Some(5));
        assert_eq!(Operator::Subtract.apply(4, 9), None);
        assert_eq!(Operator::Multiply.apply(6, 7), Some(42));
        assert_eq!(Operator::Divide.apply(42, 6), Some(7));
        assert_eq!(Operator::Divide.apply(43, 6), None);
        assert_eq!(Operator::Divide.apply(10, 0), None);
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(sample_question().prompt_text, "3 + 4 = ?");
        assert_eq!(Question::format_prompt(56, Operator::Divide, 8), "56 ÷ 8 = ?");
    }

    #[test]
    fn test_valid_question_has_no_problems() {
        let q = sample_question();
        assert!(q.check_invariants().is_empty());
        assert!(q.is_correct(7));
        assert!(!q.is_correct(9));
    }

    #[test]
    fn test_duplicate_choices_detected() {
        let mut q = sample_question();
        q.answer_choices = [7, 7, 10, 5];
        assert!(!q.check_invariants().is_empty());
    }

    #[test]
    fn test_serialize_uses_symbols() {
        let json = serde_json::to_value(sample_question()).unwrap();
        assert_eq!(json["operator"], "+");
        assert_eq!(json["correctAnswer"], 7);
        assert_eq!(json["promptText"], "3 + 4 = ?");
    }
}
