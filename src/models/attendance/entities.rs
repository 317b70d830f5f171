use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课次状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum SessionStatus {
    Scheduled, // 已排课
    Completed, // 已上课
    Cancelled, // 已取消
}

impl SessionStatus {
    pub const SCHEDULED: &'static str = "scheduled";
    pub const COMPLETED: &'static str = "completed";
    pub const CANCELLED: &'static str = "cancelled";
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SessionStatus::SCHEDULED => Ok(SessionStatus::Scheduled),
            SessionStatus::COMPLETED => Ok(SessionStatus::Completed),
            SessionStatus::CANCELLED => Ok(SessionStatus::Cancelled),
            _ => Err(serde::de::Error::custom(format!(
                "无效的课次状态: '{s}'. 支持的状态: scheduled, completed, cancelled"
            ))),
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "{}", SessionStatus::SCHEDULED),
            SessionStatus::Completed => write!(f, "{}", SessionStatus::COMPLETED),
            SessionStatus::Cancelled => write!(f, "{}", SessionStatus::CANCELLED),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(SessionStatus::Scheduled),
            "completed" => Ok(SessionStatus::Completed),
            "cancelled" => Ok(SessionStatus::Cancelled),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum RecordStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
    Excused, // 请假
}

impl RecordStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LATE: &'static str = "late";
    pub const EXCUSED: &'static str = "excused";
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            RecordStatus::PRESENT => Ok(RecordStatus::Present),
            RecordStatus::ABSENT => Ok(RecordStatus::Absent),
            RecordStatus::LATE => Ok(RecordStatus::Late),
            RecordStatus::EXCUSED => Ok(RecordStatus::Excused),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, late, excused"
            ))),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Present => write!(f, "{}", RecordStatus::PRESENT),
            RecordStatus::Absent => write!(f, "{}", RecordStatus::ABSENT),
            RecordStatus::Late => write!(f, "{}", RecordStatus::LATE),
            RecordStatus::Excused => write!(f, "{}", RecordStatus::EXCUSED),
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(RecordStatus::Present),
            "absent" => Ok(RecordStatus::Absent),
            "late" => Ok(RecordStatus::Late),
            "excused" => Ok(RecordStatus::Excused),
            _ => Err(format!("Invalid record status: {s}")),
        }
    }
}

// 考勤课次
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSession {
    pub id: i64,
    pub section_id: i64,
    pub teacher_id: i64,
    /// ISO 日期（YYYY-MM-DD），用于范围筛选
    pub session_date: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: SessionStatus,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AttendanceSession {
    /// 课次时长（秒）
    pub fn duration_secs(&self) -> i64 {
        self.end_time
            .signed_duration_since(self.start_time)
            .num_seconds()
            .max(0)
    }
}

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub session_id: i64,
    pub student_id: i64,
    pub status: RecordStatus,
    pub note: Option<String>,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
