use serde::Serialize;
use ts_rs::TS;

/// 班级考勤报表：时间段内按状态的计数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AttendanceReportResponse {
    pub section_id: i64,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sessions_scheduled: i64,
    pub sessions_completed: i64,
    pub sessions_cancelled: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
}

/// 单个作业的提交统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct HomeworkReportItem {
    pub homework_id: i64,
    pub title: String,
    pub total_students: i64,
    pub submitted_count: i64,
    pub graded_count: i64,
}

/// 班级作业报表
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct HomeworkReportResponse {
    pub section_id: i64,
    pub items: Vec<HomeworkReportItem>,
}

/// 全局概览报表（管理员）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct OverviewReportResponse {
    pub admins: i64,
    pub teachers: i64,
    pub students: i64,
    pub parents: i64,
    pub grades: i64,
    pub subjects: i64,
    pub tracks: i64,
    pub sections: i64,
    pub lessons_first_cycle: i64,
    pub lessons_second_cycle: i64,
}
