//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod attendance_records;
pub mod attendance_sessions;
pub mod class_sections;
pub mod enrollments;
pub mod exercises;
pub mod files;
pub mod grades;
pub mod homeworks;
pub mod lesson_resources;
pub mod lessons;
pub mod question_choices;
pub mod questions;
pub mod subjects;
pub mod submissions;
pub mod tracks;
pub mod users;
