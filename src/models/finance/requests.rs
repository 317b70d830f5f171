use serde::Deserialize;
use ts_rs::TS;

/// 课时结算查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct WorkHoursParams {
    /// 不传时默认查询当前用户（教师）
    pub teacher_id: Option<i64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
