pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::attendance_sessions::Entity as AttendanceSessions;
pub use super::class_sections::Entity as ClassSections;
pub use super::enrollments::Entity as Enrollments;
pub use super::exercises::Entity as Exercises;
pub use super::files::Entity as Files;
pub use super::grades::Entity as Grades;
pub use super::homeworks::Entity as Homeworks;
pub use super::lesson_resources::Entity as LessonResources;
pub use super::lessons::Entity as Lessons;
pub use super::question_choices::Entity as QuestionChoices;
pub use super::questions::Entity as Questions;
pub use super::subjects::Entity as Subjects;
pub use super::submissions::Entity as Submissions;
pub use super::tracks::Entity as Tracks;
pub use super::users::Entity as Users;
