use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数（启动时判断是否需要初始化管理员）
    async fn count_users(&self) -> Result<u64>;
    // 列出某家长名下的学生账号
    async fn list_children(&self, guardian_id: i64) -> Result<Vec<User>>;

    /// 教学目录管理方法
    // 年级
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade>;
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    async fn get_grade_by_id(&self, grade_id: i64) -> Result<Option<Grade>>;
    async fn update_grade(&self, grade_id: i64, update: UpdateGradeRequest)
    -> Result<Option<Grade>>;
    async fn delete_grade(&self, grade_id: i64) -> Result<bool>;
    // 科目
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn list_subjects(&self, grade_id: Option<i64>) -> Result<Vec<Subject>>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;
    // 轨道
    async fn create_track(&self, req: CreateTrackRequest) -> Result<Track>;
    async fn list_tracks(&self, grade_id: Option<i64>) -> Result<Vec<Track>>;
    async fn get_track_by_id(&self, track_id: i64) -> Result<Option<Track>>;
    async fn update_track(&self, track_id: i64, update: UpdateTrackRequest)
    -> Result<Option<Track>>;
    async fn delete_track(&self, track_id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_section(&self, req: CreateSectionRequest) -> Result<ClassSection>;
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<ClassSection>>;
    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse>;
    async fn update_section(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<ClassSection>>;
    async fn delete_section(&self, section_id: i64) -> Result<bool>;
    // 选课
    async fn enroll_student(&self, section_id: i64, student_id: i64) -> Result<Enrollment>;
    async fn unenroll_student(&self, section_id: i64, student_id: i64) -> Result<bool>;
    async fn list_section_students(&self, section_id: i64) -> Result<Vec<User>>;
    async fn is_student_enrolled(&self, section_id: i64, student_id: i64) -> Result<bool>;
    async fn count_section_students(&self, section_id: i64) -> Result<i64>;
    // 学生所在/教师所授的班级 ID（业务层做范围裁剪用）
    async fn list_student_section_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    async fn list_teacher_section_ids(&self, teacher_id: i64) -> Result<Vec<i64>>;

    /// 课程管理方法
    async fn create_lesson(&self, created_by: i64, req: CreateLessonRequest) -> Result<Lesson>;
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;
    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse>;
    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;
    // 课程资源
    async fn create_lesson_resource(
        &self,
        lesson_id: i64,
        req: CreateResourceRequest,
    ) -> Result<LessonResource>;
    async fn list_lesson_resources(&self, lesson_id: i64) -> Result<Vec<LessonResource>>;
    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<LessonResource>>;
    async fn delete_lesson_resource(&self, resource_id: i64) -> Result<bool>;

    /// 练习管理方法
    // 创建练习（题目与选项整树一次写入）
    async fn create_exercise(
        &self,
        lesson_id: i64,
        created_by: i64,
        req: CreateExerciseRequest,
    ) -> Result<Exercise>;
    // 读取练习整树
    async fn get_exercise_with_questions(
        &self,
        exercise_id: i64,
    ) -> Result<Option<(Exercise, Vec<Question>)>>;
    async fn list_exercises_by_lesson(&self, lesson_id: i64) -> Result<Vec<Exercise>>;
    async fn update_exercise(
        &self,
        exercise_id: i64,
        update: UpdateExerciseRequest,
    ) -> Result<Option<Exercise>>;
    async fn delete_exercise(&self, exercise_id: i64) -> Result<bool>;

    /// 作业管理方法
    async fn create_homework(
        &self,
        created_by: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework>;
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse>;
    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>>;
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;
    // 提交（同一学生重复提交覆盖旧内容）
    async fn upsert_submission(
        &self,
        homework_id: i64,
        student_id: i64,
        req: SubmitHomeworkRequest,
        is_late: bool,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    async fn get_submission_for_student(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    async fn list_submissions_by_homework(&self, homework_id: i64) -> Result<Vec<Submission>>;
    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;

    /// 考勤管理方法
    async fn create_session(
        &self,
        teacher_id: i64,
        req: CreateSessionRequest,
    ) -> Result<AttendanceSession>;
    async fn get_session_by_id(&self, session_id: i64) -> Result<Option<AttendanceSession>>;
    async fn list_sessions_with_pagination(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse>;
    async fn update_session(
        &self,
        session_id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<AttendanceSession>>;
    async fn delete_session(&self, session_id: i64) -> Result<bool>;
    // 批量登记考勤（重复登记覆盖）
    async fn upsert_attendance_records(
        &self,
        session_id: i64,
        entries: Vec<RecordEntry>,
    ) -> Result<Vec<AttendanceRecord>>;
    async fn list_session_records(&self, session_id: i64) -> Result<Vec<AttendanceRecord>>;
    async fn student_attendance_summary(
        &self,
        student_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<StudentAttendanceSummary>;
    // 已完成课次的时长列表（秒），课时结算用
    async fn completed_session_durations(
        &self,
        teacher_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<Vec<i64>>;

    /// 报表方法
    async fn attendance_report(
        &self,
        section_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<AttendanceReportResponse>;
    async fn homework_report(&self, section_id: i64) -> Result<HomeworkReportResponse>;
    async fn overview_report(&self) -> Result<OverviewReportResponse>;

    /// 文件管理方法
    async fn create_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
    async fn increment_file_citation(&self, file_id: i64) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
