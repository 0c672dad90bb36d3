// ==========================================
// 计算服务选型助手 - 候选服务
// ==========================================
// 职责: 封闭的候选服务集合 + 展示用静态画像
// 红线: 画像仅供展示,不参与评分
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// Candidate - 候选服务
// ==========================================
// 声明顺序即规范顺序 (canonical order),排名并列时按此顺序决胜
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candidate {
    Lambda,
    Ec2,
    Ecs,
    Fargate,
}

/// 计费模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingModel {
    /// 按量计费（请求数 + 计算时长）
    Usage,
    /// 按容量计费（固定月费）
    Capacity,
}

impl Candidate {
    /// 规范顺序
    pub const ALL: [Candidate; 4] = [
        Candidate::Lambda,
        Candidate::Ec2,
        Candidate::Ecs,
        Candidate::Fargate,
    ];

    /// 规范键名
    pub fn key(&self) -> &'static str {
        match self {
            Candidate::Lambda => "lambda",
            Candidate::Ec2 => "ec2",
            Candidate::Ecs => "ecs",
            Candidate::Fargate => "fargate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Candidate::Lambda => "AWS Lambda",
            Candidate::Ec2 => "Amazon EC2",
            Candidate::Ecs => "Amazon ECS",
            Candidate::Fargate => "AWS Fargate",
        }
    }

    pub fn billing_model(&self) -> BillingModel {
        match self {
            Candidate::Lambda | Candidate::Fargate => BillingModel::Usage,
            Candidate::Ec2 | Candidate::Ecs => BillingModel::Capacity,
        }
    }

    /// 静态画像
    pub fn profile(&self) -> CandidateProfile {
        match self {
            Candidate::Lambda => CandidateProfile {
                candidate: *self,
                display_name: self.display_name(),
                cost: &[
                    "Pay-per-execution (requests + compute time)",
                    "Free tier: 1M requests/month",
                    "Cost-effective for spiky workloads",
                ],
                scalability: &["Automatic scaling", "Near-instant scale-up"],
                operational_effort: &["No server management", "Fully managed by AWS"],
                learning_curve: &["Low to moderate"],
                best_use_cases: &["Event-driven APIs", "Variable traffic"],
            },
            Candidate::Ec2 => CandidateProfile {
                candidate: *self,
                display_name: self.display_name(),
                cost: &["Pay for running instances", "Best for constant workloads"],
                scalability: &["Manual / Auto Scaling Groups"],
                operational_effort: &["High - OS & infra management"],
                learning_curve: &["High"],
                best_use_cases: &["Legacy apps", "Long-running services"],
            },
            Candidate::Ecs => CandidateProfile {
                candidate: *self,
                display_name: self.display_name(),
                cost: &["Pay for containers / underlying instances"],
                scalability: &["Container-level scaling"],
                operational_effort: &["Moderate - container management"],
                learning_curve: &["Moderate"],
                best_use_cases: &["Microservices"],
            },
            Candidate::Fargate => CandidateProfile {
                candidate: *self,
                display_name: self.display_name(),
                cost: &["Pay per vCPU and memory per second", "No idle instance cost"],
                scalability: &["Task-level scaling", "No cluster capacity planning"],
                operational_effort: &["Low - serverless containers"],
                learning_curve: &["Moderate"],
                best_use_cases: &["Containerised services without server management"],
            },
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Candidate {
    type Err = String;

    /// 仅接受规范键名（配置项使用）; 规则标签的模糊解析见 `engine::resolver`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Candidate::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| format!("未知候选服务: {}", s.trim()))
    }
}

// ==========================================
// CandidateProfile - 展示用静态画像
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub candidate: Candidate,
    pub display_name: &'static str,
    pub cost: &'static [&'static str],
    pub scalability: &'static [&'static str],
    pub operational_effort: &'static [&'static str],
    pub learning_curve: &'static [&'static str],
    pub best_use_cases: &'static [&'static str],
}

/// 全部候选服务的画像（规范顺序）
pub fn comparison_profiles() -> Vec<CandidateProfile> {
    Candidate::ALL.iter().map(|c| c.profile()).collect()
}
