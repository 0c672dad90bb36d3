// ==========================================
// 计算服务选型助手 - 推理轨迹
// ==========================================
// 轨迹顺序 = 规则输入顺序 (说明"为什么"),与排名顺序无关
// ==========================================

/// 轨迹条目分隔符
pub const TRACE_DELIMITER: &str = " | ";

/// 拼接推理轨迹; 空输入返回空字符串
pub fn build_trace<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(TRACE_DELIMITER)
}
