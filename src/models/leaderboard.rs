use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 待提交的成绩（未校验）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScore {
    pub initials: String,
    pub score: i64,
    pub age: i64,
}

impl NewScore {
    pub fn new(initials: impl Into<String>, score: i64, age: i64) -> Self {
        Self {
            initials: initials.into(),
            score,
            age,
        }
    }
}

/// 排行榜条目（已校验）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub initials: String,
    pub score: u8,
    pub age: u8,
    pub submitted_at: DateTime<Utc>,
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>2} 分 (年龄 {})", self.initials, self.score, self.age)
    }
}

/// 年龄段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 5 岁及以下
    #[serde(rename = "5_under")]
    FiveAndUnder,
    /// 6-7 岁
    #[serde(rename = "6_7")]
    SixToSeven,
    /// 8-10 岁
    #[serde(rename = "8_10")]
    EightToTen,
    /// 11 岁及以上
    #[serde(rename = "11_up")]
    ElevenAndUp,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::FiveAndUnder,
        AgeBracket::SixToSeven,
        AgeBracket::EightToTen,
        AgeBracket::ElevenAndUp,
    ];

    pub fn contains(self, age: u8) -> bool {
        match self {
            AgeBracket::FiveAndUnder => age <= 5,
            AgeBracket::SixToSeven => (6..=7).contains(&age),
            AgeBracket::EightToTen => (8..=10).contains(&age),
            AgeBracket::ElevenAndUp => age >= 11,
        }
    }

    /// 查询参数名
    pub fn query_name(self) -> &'static str {
        match self {
            AgeBracket::FiveAndUnder => "5_under",
            AgeBracket::SixToSeven => "6_7",
            AgeBracket::EightToTen => "8_10",
            AgeBracket::ElevenAndUp => "11_up",
        }
    }

    /// 从查询参数解析，未知值返回 None（即不过滤）
    pub fn from_query(s: &str) -> Option<Self> {
        match s.trim() {
            "5_under" => Some(AgeBracket::FiveAndUnder),
            "6_7" => Some(AgeBracket::SixToSeven),
            "8_10" => Some(AgeBracket::EightToTen),
            "11_up" => Some(AgeBracket::ElevenAndUp),
            _ => None,
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeBracket::FiveAndUnder => "5 岁及以下",
            AgeBracket::SixToSeven => "6-7 岁",
            AgeBracket::EightToTen => "8-10 岁",
            AgeBracket::ElevenAndUp => "11 岁及以上",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert!(AgeBracket::FiveAndUnder.contains(0));
        assert!(AgeBracket::FiveAndUnder.contains(5));
        assert!(!AgeBracket::FiveAndUnder.contains(6));
        assert!(AgeBracket::SixToSeven.contains(6));
        assert!(AgeBracket::SixToSeven.contains(7));
        assert!(AgeBracket::EightToTen.contains(8));
        assert!(AgeBracket::EightToTen.contains(10));
        assert!(!AgeBracket::EightToTen.contains(11));
        assert!(AgeBracket::ElevenAndUp.contains(11));
        assert!(AgeBracket::ElevenAndUp.contains(120));
    }

    #[test]
    fn test_every_age_has_exactly_one_bracket() {
        for age in 0..=120u8 {
            let hits = AgeBracket::ALL.iter().filter(|b| b.contains(age)).count();
            assert_eq!(hits, 1, "年龄 {} 命中 {} 个年龄段", age, hits);
        }
    }

    #[test]
    fn test_query_names() {
        for bracket in AgeBracket::ALL {
            assert_eq!(AgeBracket::from_query(bracket.query_name()), Some(bracket));
        }
        assert_eq!(AgeBracket::from_query("all"), None);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = LeaderboardEntry {
            initials: "ABC".to_string(),
            score: 42,
            age: 7,
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["initials"], "ABC");
        assert!(json.get("submittedAt").is_some());
    }
}
