// ==========================================
// 计算服务选型助手 - 用户选型条件
// ==========================================
// 职责: 固定形状的四维选型条件
// 约束: 缺失或越界的取值视为"不匹配任何规则",不抛错
// ==========================================

use crate::domain::types::{Architecture, BudgetFocus, Dimension, TeamExperience, TrafficPattern};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

// ==========================================
// Criteria - 选型条件
// ==========================================
// 每次评估由调用方重新提供,评估期间只读
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCriteria")]
pub struct Criteria {
    pub traffic_pattern: Option<TrafficPattern>,
    pub budget_focus: Option<BudgetFocus>,
    pub team_experience: Option<TeamExperience>,
    pub architecture: Option<Architecture>,
}

impl Criteria {
    pub fn new(
        traffic_pattern: TrafficPattern,
        budget_focus: BudgetFocus,
        team_experience: TeamExperience,
        architecture: Architecture,
    ) -> Self {
        Self {
            traffic_pattern: Some(traffic_pattern),
            budget_focus: Some(budget_focus),
            team_experience: Some(team_experience),
            architecture: Some(architecture),
        }
    }

    /// 取指定维度的取值（外部字符串形式）
    pub fn value(&self, dimension: Dimension) -> Option<&'static str> {
        match dimension {
            Dimension::TrafficPattern => self.traffic_pattern.map(|v| v.as_str()),
            Dimension::BudgetFocus => self.budget_focus.map(|v| v.as_str()),
            Dimension::TeamExperience => self.team_experience.map(|v| v.as_str()),
            Dimension::Architecture => self.architecture.map(|v| v.as_str()),
        }
    }

    /// 按规则中的维度键名取值; 未知键名返回 None
    pub fn value_for_key(&self, key: &str) -> Option<&'static str> {
        Dimension::from_key(key).and_then(|d| self.value(d))
    }

    /// 已填写的维度个数
    pub fn filled_dimensions(&self) -> usize {
        Dimension::ALL
            .iter()
            .filter(|d| self.value(**d).is_some())
            .count()
    }
}

// ==========================================
// RawCriteria - 外部输入的宽松形式
// ==========================================
// 字段按任意 JSON 值接收,再逐一解析到取值域;
// 非字符串或越界取值均视为缺失,不影响其他维度
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCriteria {
    #[serde(default)]
    traffic_pattern: Option<Value>,
    #[serde(default)]
    budget_focus: Option<Value>,
    #[serde(default)]
    team_experience: Option<Value>,
    #[serde(default)]
    architecture: Option<Value>,
}

fn parse_dimension<T: FromStr<Err = String>>(
    dimension: Dimension,
    raw: Option<Value>,
) -> Option<T> {
    match raw? {
        Value::Null => None,
        Value::String(raw) => match raw.parse::<T>() {
            Ok(v) => Some(v),
            Err(reason) => {
                warn!(dimension = %dimension, value = %raw, "选型条件取值越界,按不匹配处理: {}", reason);
                None
            }
        },
        other => {
            warn!(dimension = %dimension, value = %other, "选型条件取值类型错误,按不匹配处理");
            None
        }
    }
}

impl From<RawCriteria> for Criteria {
    fn from(raw: RawCriteria) -> Self {
        Self {
            traffic_pattern: parse_dimension(Dimension::TrafficPattern, raw.traffic_pattern),
            budget_focus: parse_dimension(Dimension::BudgetFocus, raw.budget_focus),
            team_experience: parse_dimension(Dimension::TeamExperience, raw.team_experience),
            architecture: parse_dimension(Dimension::Architecture, raw.architecture),
        }
    }
}
