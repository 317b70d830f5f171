use serde::Deserialize;
use ts_rs::TS;

/// 班级考勤报表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AttendanceReportParams {
    pub section_id: i64,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// 班级作业报表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct HomeworkReportParams {
    pub section_id: i64,
}
