// ==========================================
// 计算服务选型助手 - 领域类型定义
// ==========================================
// 选型维度 (Dimension) 及各维度的取值域
// 序列化格式: kebab-case (与规则文件、前端表单取值一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 流量模式 (Traffic Pattern)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficPattern {
    Low,        // 低流量
    Spiky,      // 突发流量
    Consistent, // 稳定流量
    High,       // 高流量
}

impl TrafficPattern {
    pub const ALL: [TrafficPattern; 4] = [
        TrafficPattern::Low,
        TrafficPattern::Spiky,
        TrafficPattern::Consistent,
        TrafficPattern::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficPattern::Low => "low",
            TrafficPattern::Spiky => "spiky",
            TrafficPattern::Consistent => "consistent",
            TrafficPattern::High => "high",
        }
    }
}

impl fmt::Display for TrafficPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 精确匹配外部取值（规则取值同样逐字比较）
        TrafficPattern::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("未知流量模式: {}", s))
    }
}

// ==========================================
// 预算侧重 (Budget Focus)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetFocus {
    Lowest,      // 最低成本
    Predictable, // 成本可预期
}

impl BudgetFocus {
    pub const ALL: [BudgetFocus; 2] = [BudgetFocus::Lowest, BudgetFocus::Predictable];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetFocus::Lowest => "lowest",
            BudgetFocus::Predictable => "predictable",
        }
    }
}

impl fmt::Display for BudgetFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetFocus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 精确匹配外部取值（规则取值同样逐字比较）
        BudgetFocus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("未知预算侧重: {}", s))
    }
}

// ==========================================
// 团队经验 (Team Experience)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamExperience {
    Beginner,     // 入门
    Intermediate, // 中级
    StrongDevops, // 资深运维
}

impl TeamExperience {
    pub const ALL: [TeamExperience; 3] = [
        TeamExperience::Beginner,
        TeamExperience::Intermediate,
        TeamExperience::StrongDevops,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamExperience::Beginner => "beginner",
            TeamExperience::Intermediate => "intermediate",
            TeamExperience::StrongDevops => "strong-devops",
        }
    }
}

impl fmt::Display for TeamExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamExperience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 精确匹配外部取值（规则取值同样逐字比较）
        TeamExperience::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("未知团队经验: {}", s))
    }
}

// ==========================================
// 架构风格 (Architecture)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    EventDriven,   // 事件驱动
    Microservices, // 微服务
    Monolith,      // 单体
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [
        Architecture::EventDriven,
        Architecture::Microservices,
        Architecture::Monolith,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::EventDriven => "event-driven",
            Architecture::Microservices => "microservices",
            Architecture::Monolith => "monolith",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 精确匹配外部取值（规则取值同样逐字比较）
        Architecture::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("未知架构风格: {}", s))
    }
}

// ==========================================
// 选型维度 (Dimension)
// ==========================================
// 规则 conditions 的键名; 未知键名不对应任何维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    TrafficPattern,
    BudgetFocus,
    TeamExperience,
    Architecture,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::TrafficPattern,
        Dimension::BudgetFocus,
        Dimension::TeamExperience,
        Dimension::Architecture,
    ];

    /// 外部键名（规则文件 / 请求体中的字段名）
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::TrafficPattern => "trafficPattern",
            Dimension::BudgetFocus => "budgetFocus",
            Dimension::TeamExperience => "teamExperience",
            Dimension::Architecture => "architecture",
        }
    }

    /// 按外部键名查找维度（区分大小写，与规则文件保持一致）
    pub fn from_key(key: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_external_values() {
        assert_eq!("spiky".parse::<TrafficPattern>().unwrap(), TrafficPattern::Spiky);
        assert_eq!("predictable".parse::<BudgetFocus>().unwrap(), BudgetFocus::Predictable);
        assert_eq!(
            "strong-devops".parse::<TeamExperience>().unwrap(),
            TeamExperience::StrongDevops
        );
        assert_eq!(
            "event-driven".parse::<Architecture>().unwrap(),
            Architecture::EventDriven
        );
        assert!("medium".parse::<TrafficPattern>().is_err());
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("SPIKY".parse::<TrafficPattern>().is_err());
        assert!(" spiky ".parse::<TrafficPattern>().is_err());
        assert!(" Predictable ".parse::<BudgetFocus>().is_err());
        assert!("strong_devops".parse::<TeamExperience>().is_err());
        assert!("Event_Driven".parse::<Architecture>().is_err());
        assert!("event_driven".parse::<Architecture>().is_err());
    }

    #[test]
    fn test_as_str_matches_serde_representation() {
        for v in TeamExperience::ALL {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
        for v in Architecture::ALL {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
    }

    #[test]
    fn test_dimension_key_lookup() {
        assert_eq!(Dimension::from_key("trafficPattern"), Some(Dimension::TrafficPattern));
        assert_eq!(Dimension::from_key("architecture"), Some(Dimension::Architecture));
        assert_eq!(Dimension::from_key("region"), None);
        assert_eq!(Dimension::from_key("TrafficPattern"), None);
    }
}
