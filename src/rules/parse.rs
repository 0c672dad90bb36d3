// ==========================================
// 计算服务选型助手 - 规则文档解析
// ==========================================
// 输入: 外部 JSON 文档 (规则对象数组)
// 规则:
// 1) 顶层不是数组 -> NotAnArray (调用方降级为空规则)
// 2) 数组内不是规则对象的元素 -> 跳过并告警
// 3) 缺省字段: conditions={}, service="", reason=""
// ==========================================

use crate::domain::rule::Rule;
use crate::rules::error::{RuleStoreError, RuleStoreResult};
use serde_json::Value;
use tracing::warn;

fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 严格解析: 文档级错误返回 Err,元素级错误跳过
pub fn parse_rules_document(raw: &str) -> RuleStoreResult<Vec<Rule>> {
    let document: Value = serde_json::from_str(raw)?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(RuleStoreError::NotAnArray {
                found: describe_kind(&other).to_string(),
            })
        }
    };

    let total = items.len();
    let rules: Vec<Rule> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Rule>(item) {
            Ok(rule) => Some(rule),
            Err(e) => {
                warn!(index, error = %e, "跳过无法解析的规则元素");
                None
            }
        })
        .collect();

    if rules.len() < total {
        warn!(total, parsed = rules.len(), "规则文档存在被跳过的元素");
    }

    Ok(rules)
}

/// 宽松解析: 任何文档级错误都降级为空规则序列
pub fn parse_rules_lenient(raw: &str) -> Vec<Rule> {
    match parse_rules_document(raw) {
        Ok(rules) => rules,
        Err(e) => {
            warn!(error = %e, "规则文档无效,按空规则处理");
            Vec::new()
        }
    }
}
