pub mod attendance;
pub mod auth;
pub mod catalog;
pub mod exercises;
pub mod files;
pub mod finance;
pub mod homeworks;
pub mod lessons;
pub mod reports;
pub mod sections;
pub mod system;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use exercises::ExerciseService;
pub use files::FileService;
pub use finance::FinanceService;
pub use homeworks::HomeworkService;
pub use lessons::LessonService;
pub use reports::ReportService;
pub use sections::SectionService;
pub use system::SystemService;
pub use users::UserService;

use std::sync::Arc;

use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

/// 判断用户是否可以管理某个班级（管理员或该班授课教师）
///
/// 作业、考勤、报表的班级范围裁剪都走这一个判定。
pub(crate) async fn can_manage_section(
    storage: &Arc<dyn Storage>,
    user: &User,
    section_id: i64,
) -> crate::errors::Result<bool> {
    if user.role == UserRole::Admin {
        return Ok(true);
    }
    if user.role != UserRole::Teacher {
        return Ok(false);
    }
    match storage.get_section_by_id(section_id).await? {
        Some(section) => Ok(section.teacher_id == user.id),
        None => Ok(false),
    }
}
