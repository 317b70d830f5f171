use serde::Serialize;
use ts_rs::TS;

use crate::models::attendance::entities::{AttendanceRecord, AttendanceSession};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct SessionListResponse {
    pub items: Vec<AttendanceSession>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordListResponse {
    pub session: AttendanceSession,
    pub records: Vec<AttendanceRecord>,
}

/// 单个学生在一段时间内的考勤汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceSummary {
    pub student_id: i64,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
}
