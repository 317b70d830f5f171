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

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use exercises::configure_exercise_routes;
pub use files::configure_file_routes;
pub use finance::configure_finance_routes;
pub use homeworks::configure_homework_routes;
pub use lessons::configure_lesson_routes;
pub use reports::configure_report_routes;
pub use sections::configure_section_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
