use serde::Serialize;
use ts_rs::TS;

/// 教师课时结算结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct WorkHoursResponse {
    pub teacher_id: i64,
    /// 统计到的已完成课次数
    pub session_count: i64,
    /// 总课时（小时，保留两位小数）
    pub total_hours: f64,
    /// 课时费（仅当教师配置了 hourly_rate）
    pub amount: Option<f64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
