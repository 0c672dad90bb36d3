// ==========================================
// 计算服务选型助手 - 成本估算
// ==========================================
// 职责: 流量模式 + 预算侧重 -> 各候选的月度成本估算
// 红线: 示意公式,非真实计费; 纯函数,无 I/O,无随机
// ==========================================
// 按量计费 (lambda / fargate):
//   requests / 1e6 * per_million_requests + gb_seconds * per_gb_second
// 按容量计费 (ec2 / ecs):
//   按 budget_focus 取两档固定月费
// 金额统一保留 2 位小数 (四舍五入)
// ==========================================

use crate::domain::candidate::{BillingModel, Candidate};
use crate::domain::types::{BudgetFocus, TrafficPattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 月请求量档位
pub fn monthly_requests(traffic: TrafficPattern) -> u64 {
    match traffic {
        TrafficPattern::Low => 100_000,
        TrafficPattern::Spiky => 500_000,
        TrafficPattern::Consistent => 1_000_000,
        TrafficPattern::High => 2_000_000,
    }
}

/// 月计算时长档位 (GB-秒)
pub fn compute_gb_seconds(traffic: TrafficPattern) -> u64 {
    match traffic {
        TrafficPattern::High => 200,
        _ => 100,
    }
}

/// 保留 2 位小数,十进制半数远离零进位
///
/// 先按百万分之一取整消除二进制表示误差（1.005 存为 1.00499999...）,
/// 再以整数运算进位到分。
pub fn round_currency(amount: f64) -> f64 {
    let micros = (amount * 1_000_000.0).round() as i64;
    let cents = if micros >= 0 {
        (micros + 5_000) / 10_000
    } else {
        (micros - 5_000) / 10_000
    };
    cents as f64 / 100.0
}

// ==========================================
// 费率配置
// ==========================================

/// 按量计费费率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRate {
    pub per_million_requests: f64,
    pub per_gb_second: f64,
}

/// 按容量计费的两档月费
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRate {
    pub lowest: f64,
    pub predictable: f64,
}

impl CapacityRate {
    pub fn for_focus(&self, focus: BudgetFocus) -> f64 {
        match focus {
            BudgetFocus::Lowest => self.lowest,
            BudgetFocus::Predictable => self.predictable,
        }
    }
}

/// 全部候选的费率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRates {
    pub lambda: UsageRate,
    pub fargate: UsageRate,
    pub ec2: CapacityRate,
    pub ecs: CapacityRate,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            lambda: UsageRate {
                per_million_requests: 0.20,
                per_gb_second: 0.000_016_666_7,
            },
            fargate: UsageRate {
                per_million_requests: 0.50,
                per_gb_second: 0.000_044_4,
            },
            ec2: CapacityRate {
                lowest: 15.00,
                predictable: 10.50,
            },
            ecs: CapacityRate {
                lowest: 18.00,
                predictable: 12.60,
            },
        }
    }
}

impl CostRates {
    /// 校验: 费率必须为有限非负数
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("lambda.perMillionRequests", self.lambda.per_million_requests),
            ("lambda.perGbSecond", self.lambda.per_gb_second),
            ("fargate.perMillionRequests", self.fargate.per_million_requests),
            ("fargate.perGbSecond", self.fargate.per_gb_second),
            ("ec2.lowest", self.ec2.lowest),
            ("ec2.predictable", self.ec2.predictable),
            ("ecs.lowest", self.ecs.lowest),
            ("ecs.predictable", self.ecs.predictable),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("费率 {} 非法: {}", name, value));
            }
        }
        Ok(())
    }

    fn usage_rate(&self, candidate: Candidate) -> Option<&UsageRate> {
        match candidate {
            Candidate::Lambda => Some(&self.lambda),
            Candidate::Fargate => Some(&self.fargate),
            Candidate::Ec2 | Candidate::Ecs => None,
        }
    }

    fn capacity_rate(&self, candidate: Candidate) -> Option<&CapacityRate> {
        match candidate {
            Candidate::Ec2 => Some(&self.ec2),
            Candidate::Ecs => Some(&self.ecs),
            Candidate::Lambda | Candidate::Fargate => None,
        }
    }
}

// ==========================================
// CostEstimate - 估算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub traffic_pattern: TrafficPattern,
    pub budget_focus: BudgetFocus,
    pub monthly_requests: u64,
    pub compute_gb_seconds: u64,
    /// 候选 -> 月度估算金额 (美元, 2 位小数)
    pub estimates: BTreeMap<Candidate, f64>,
}

impl CostEstimate {
    pub fn get(&self, candidate: Candidate) -> f64 {
        self.estimates.get(&candidate).copied().unwrap_or(0.0)
    }

    /// 估算金额最低的候选（并列取规范顺序靠前者）
    pub fn cheapest(&self) -> Option<Candidate> {
        self.estimates
            .iter()
            .fold(None, |best: Option<(Candidate, f64)>, (c, v)| match best {
                Some((_, best_v)) if best_v <= *v => best,
                _ => Some((*c, *v)),
            })
            .map(|(c, _)| c)
    }
}

// ==========================================
// CostEstimator - 成本估算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CostEstimator {
    rates: CostRates,
}

impl CostEstimator {
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// 单个候选的估算金额
    pub fn estimate_for(
        &self,
        candidate: Candidate,
        traffic: TrafficPattern,
        focus: BudgetFocus,
    ) -> f64 {
        let amount = match candidate.billing_model() {
            BillingModel::Usage => self
                .rates
                .usage_rate(candidate)
                .map(|rate| {
                    monthly_requests(traffic) as f64 / 1_000_000.0 * rate.per_million_requests
                        + compute_gb_seconds(traffic) as f64 * rate.per_gb_second
                })
                .unwrap_or(0.0),
            BillingModel::Capacity => self
                .rates
                .capacity_rate(candidate)
                .map(|rate| rate.for_focus(focus))
                .unwrap_or(0.0),
        };
        round_currency(amount)
    }

    /// 全部候选的估算
    pub fn estimate(&self, traffic: TrafficPattern, focus: BudgetFocus) -> CostEstimate {
        let estimates = Candidate::ALL
            .iter()
            .map(|c| (*c, self.estimate_for(*c, traffic, focus)))
            .collect();

        CostEstimate {
            traffic_pattern: traffic,
            budget_focus: focus,
            monthly_requests: monthly_requests(traffic),
            compute_gb_seconds: compute_gb_seconds(traffic),
            estimates,
        }
    }
}
