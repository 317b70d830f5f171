use serde::Serialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::sections::entities::ClassSection;
use crate::models::users::entities::User;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListResponse {
    pub items: Vec<ClassSection>,
    pub pagination: PaginationInfo,
}

/// 班级学生名单
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionStudentsResponse {
    pub section: ClassSection,
    pub students: Vec<User>,
}
