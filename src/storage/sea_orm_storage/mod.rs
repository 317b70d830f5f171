//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod catalog;
mod exercises;
mod files;
mod homeworks;
mod lessons;
mod reports;
mod sections;
pub mod seed;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::{AttendanceRecord, AttendanceSession},
        requests::{CreateSessionRequest, RecordEntry, SessionListQuery, UpdateSessionRequest},
        responses::{SessionListResponse, StudentAttendanceSummary},
    },
    catalog::{
        entities::{Grade, Subject, Track},
        requests::{
            CreateGradeRequest, CreateSubjectRequest, CreateTrackRequest, UpdateGradeRequest,
            UpdateSubjectRequest, UpdateTrackRequest,
        },
    },
    exercises::{
        entities::{Exercise, Question},
        requests::{CreateExerciseRequest, UpdateExerciseRequest},
    },
    files::entities::File,
    homeworks::{
        entities::{Homework, Submission},
        requests::{
            CreateHomeworkRequest, HomeworkListQuery, SubmitHomeworkRequest, UpdateHomeworkRequest,
        },
        responses::HomeworkListResponse,
    },
    lessons::{
        entities::{Lesson, LessonResource},
        requests::{CreateLessonRequest, CreateResourceRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
    reports::responses::{AttendanceReportResponse, HomeworkReportResponse, OverviewReportResponse},
    sections::{
        entities::{ClassSection, Enrollment},
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn list_children(&self, guardian_id: i64) -> Result<Vec<User>> {
        self.list_children_impl(guardian_id).await
    }

    // 教学目录模块
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(req).await
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn get_grade_by_id(&self, grade_id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(grade_id).await
    }

    async fn update_grade(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        self.update_grade_impl(grade_id, update).await
    }

    async fn delete_grade(&self, grade_id: i64) -> Result<bool> {
        self.delete_grade_impl(grade_id).await
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn list_subjects(&self, grade_id: Option<i64>) -> Result<Vec<Subject>> {
        self.list_subjects_impl(grade_id).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, update).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    async fn create_track(&self, req: CreateTrackRequest) -> Result<Track> {
        self.create_track_impl(req).await
    }

    async fn list_tracks(&self, grade_id: Option<i64>) -> Result<Vec<Track>> {
        self.list_tracks_impl(grade_id).await
    }

    async fn get_track_by_id(&self, track_id: i64) -> Result<Option<Track>> {
        self.get_track_by_id_impl(track_id).await
    }

    async fn update_track(
        &self,
        track_id: i64,
        update: UpdateTrackRequest,
    ) -> Result<Option<Track>> {
        self.update_track_impl(track_id, update).await
    }

    async fn delete_track(&self, track_id: i64) -> Result<bool> {
        self.delete_track_impl(track_id).await
    }

    // 班级模块
    async fn create_section(&self, req: CreateSectionRequest) -> Result<ClassSection> {
        self.create_section_impl(req).await
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<ClassSection>> {
        self.get_section_by_id_impl(section_id).await
    }

    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        self.list_sections_with_pagination_impl(query).await
    }

    async fn update_section(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<ClassSection>> {
        self.update_section_impl(section_id, update).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<bool> {
        self.delete_section_impl(section_id).await
    }

    async fn enroll_student(&self, section_id: i64, student_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(section_id, student_id).await
    }

    async fn unenroll_student(&self, section_id: i64, student_id: i64) -> Result<bool> {
        self.unenroll_student_impl(section_id, student_id).await
    }

    async fn list_section_students(&self, section_id: i64) -> Result<Vec<User>> {
        self.list_section_students_impl(section_id).await
    }

    async fn is_student_enrolled(&self, section_id: i64, student_id: i64) -> Result<bool> {
        self.is_student_enrolled_impl(section_id, student_id).await
    }

    async fn count_section_students(&self, section_id: i64) -> Result<i64> {
        self.count_section_students_impl(section_id).await
    }

    async fn list_student_section_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_student_section_ids_impl(student_id).await
    }

    async fn list_teacher_section_ids(&self, teacher_id: i64) -> Result<Vec<i64>> {
        self.list_teacher_section_ids_impl(teacher_id).await
    }

    // 课程模块
    async fn create_lesson(&self, created_by: i64, req: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(created_by, req).await
    }

    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(lesson_id).await
    }

    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        self.list_lessons_with_pagination_impl(query).await
    }

    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        self.update_lesson_impl(lesson_id, update).await
    }

    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool> {
        self.delete_lesson_impl(lesson_id).await
    }

    async fn create_lesson_resource(
        &self,
        lesson_id: i64,
        req: CreateResourceRequest,
    ) -> Result<LessonResource> {
        self.create_lesson_resource_impl(lesson_id, req).await
    }

    async fn list_lesson_resources(&self, lesson_id: i64) -> Result<Vec<LessonResource>> {
        self.list_lesson_resources_impl(lesson_id).await
    }

    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<LessonResource>> {
        self.get_resource_by_id_impl(resource_id).await
    }

    async fn delete_lesson_resource(&self, resource_id: i64) -> Result<bool> {
        self.delete_lesson_resource_impl(resource_id).await
    }

    // 练习模块
    async fn create_exercise(
        &self,
        lesson_id: i64,
        created_by: i64,
        req: CreateExerciseRequest,
    ) -> Result<Exercise> {
        self.create_exercise_impl(lesson_id, created_by, req).await
    }

    async fn get_exercise_with_questions(
        &self,
        exercise_id: i64,
    ) -> Result<Option<(Exercise, Vec<Question>)>> {
        self.get_exercise_with_questions_impl(exercise_id).await
    }

    async fn list_exercises_by_lesson(&self, lesson_id: i64) -> Result<Vec<Exercise>> {
        self.list_exercises_by_lesson_impl(lesson_id).await
    }

    async fn update_exercise(
        &self,
        exercise_id: i64,
        update: UpdateExerciseRequest,
    ) -> Result<Option<Exercise>> {
        self.update_exercise_impl(exercise_id, update).await
    }

    async fn delete_exercise(&self, exercise_id: i64) -> Result<bool> {
        self.delete_exercise_impl(exercise_id).await
    }

    // 作业模块
    async fn create_homework(
        &self,
        created_by: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        self.create_homework_impl(created_by, req).await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        self.list_homeworks_with_pagination_impl(query).await
    }

    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        self.update_homework_impl(homework_id, update).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    async fn upsert_submission(
        &self,
        homework_id: i64,
        student_id: i64,
        req: SubmitHomeworkRequest,
        is_late: bool,
    ) -> Result<Submission> {
        self.upsert_submission_impl(homework_id, student_id, req, is_late)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission_for_student(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_for_student_impl(homework_id, student_id)
            .await
    }

    async fn list_submissions_by_homework(&self, homework_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_homework_impl(homework_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grader_id, score, feedback)
            .await
    }

    // 考勤模块
    async fn create_session(
        &self,
        teacher_id: i64,
        req: CreateSessionRequest,
    ) -> Result<AttendanceSession> {
        self.create_session_impl(teacher_id, req).await
    }

    async fn get_session_by_id(&self, session_id: i64) -> Result<Option<AttendanceSession>> {
        self.get_session_by_id_impl(session_id).await
    }

    async fn list_sessions_with_pagination(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse> {
        self.list_sessions_with_pagination_impl(query).await
    }

    async fn update_session(
        &self,
        session_id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<AttendanceSession>> {
        self.update_session_impl(session_id, update).await
    }

    async fn delete_session(&self, session_id: i64) -> Result<bool> {
        self.delete_session_impl(session_id).await
    }

    async fn upsert_attendance_records(
        &self,
        session_id: i64,
        entries: Vec<RecordEntry>,
    ) -> Result<Vec<AttendanceRecord>> {
        self.upsert_attendance_records_impl(session_id, entries)
            .await
    }

    async fn list_session_records(&self, session_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_session_records_impl(session_id).await
    }

    async fn student_attendance_summary(
        &self,
        student_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<StudentAttendanceSummary> {
        self.student_attendance_summary_impl(student_id, date_from, date_to)
            .await
    }

    async fn completed_session_durations(
        &self,
        teacher_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<Vec<i64>> {
        self.completed_session_durations_impl(teacher_id, date_from, date_to)
            .await
    }

    // 报表模块
    async fn attendance_report(
        &self,
        section_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<AttendanceReportResponse> {
        self.attendance_report_impl(section_id, date_from, date_to)
            .await
    }

    async fn homework_report(&self, section_id: i64) -> Result<HomeworkReportResponse> {
        self.homework_report_impl(section_id).await
    }

    async fn overview_report(&self) -> Result<OverviewReportResponse> {
        self.overview_report_impl().await
    }

    // 文件模块
    async fn create_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.create_file_impl(
            download_token,
            original_name,
            stored_name,
            file_size,
            file_type,
            user_id,
        )
        .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    async fn increment_file_citation(&self, file_id: i64) -> Result<()> {
        self.increment_file_citation_impl(file_id).await
    }
}
