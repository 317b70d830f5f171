//! 报表存储操作
//!
//! 报表只是计数聚合，直接在这里做 count 查询，不引入额外的
//! 统计表。

use super::SeaOrmStorage;
use crate::entity::attendance_records::{Column as RecordColumn, Entity as AttendanceRecords};
use crate::entity::attendance_sessions::{Column as SessionColumn, Entity as AttendanceSessions};
use crate::entity::class_sections::Entity as ClassSections;
use crate::entity::grades::Entity as Grades;
use crate::entity::homeworks::{Column as HomeworkColumn, Entity as Homeworks};
use crate::entity::lessons::{Column as LessonColumn, Entity as Lessons};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::subjects::Entity as Subjects;
use crate::entity::tracks::Entity as Tracks;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::attendance::entities::{RecordStatus, SessionStatus};
use crate::models::lessons::entities::Cycle;
use crate::models::reports::responses::{
    AttendanceReportResponse, HomeworkReportItem, HomeworkReportResponse, OverviewReportResponse,
};
use crate::models::users::entities::UserRole;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 班级考勤报表：时间段内课次与考勤记录按状态计数
    pub async fn attendance_report_impl(
        &self,
        section_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<AttendanceReportResponse> {
        let mut session_select =
            AttendanceSessions::find().filter(SessionColumn::SectionId.eq(section_id));
        if let Some(ref date_from) = date_from {
            session_select = session_select.filter(SessionColumn::SessionDate.gte(date_from.clone()));
        }
        if let Some(ref date_to) = date_to {
            session_select = session_select.filter(SessionColumn::SessionDate.lte(date_to.clone()));
        }

        let sessions = session_select
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次失败: {e}")))?;

        let mut report = AttendanceReportResponse {
            section_id,
            date_from,
            date_to,
            sessions_scheduled: 0,
            sessions_completed: 0,
            sessions_cancelled: 0,
            present: 0,
            absent: 0,
            late: 0,
            excused: 0,
        };

        let mut session_ids: Vec<i64> = Vec::with_capacity(sessions.len());
        for session in &sessions {
            session_ids.push(session.id);
            match session.status.parse::<SessionStatus>() {
                Ok(SessionStatus::Scheduled) => report.sessions_scheduled += 1,
                Ok(SessionStatus::Completed) => report.sessions_completed += 1,
                Ok(SessionStatus::Cancelled) => report.sessions_cancelled += 1,
                Err(_) => {}
            }
        }

        if session_ids.is_empty() {
            return Ok(report);
        }

        let records = AttendanceRecords::find()
            .filter(RecordColumn::SessionId.is_in(session_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        for record in records {
            match record.status.parse::<RecordStatus>() {
                Ok(RecordStatus::Present) => report.present += 1,
                Ok(RecordStatus::Absent) => report.absent += 1,
                Ok(RecordStatus::Late) => report.late += 1,
                Ok(RecordStatus::Excused) => report.excused += 1,
                Err(_) => {}
            }
        }

        Ok(report)
    }

    /// 班级作业报表：每个作业的提交/评分人数
    pub async fn homework_report_impl(&self, section_id: i64) -> Result<HomeworkReportResponse> {
        let total_students = self.count_section_students_impl(section_id).await?;

        let homeworks = Homeworks::find()
            .filter(HomeworkColumn::SectionId.eq(section_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业失败: {e}")))?;

        let mut items = Vec::with_capacity(homeworks.len());
        for homework in homeworks {
            let submitted_count = Submissions::find()
                .filter(SubmissionColumn::HomeworkId.eq(homework.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("统计提交数失败: {e}"))
                })? as i64;

            let graded_count = Submissions::find()
                .filter(SubmissionColumn::HomeworkId.eq(homework.id))
                .filter(SubmissionColumn::Score.is_not_null())
                .count(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("统计评分数失败: {e}"))
                })? as i64;

            items.push(HomeworkReportItem {
                homework_id: homework.id,
                title: homework.title,
                total_students,
                submitted_count,
                graded_count,
            });
        }

        Ok(HomeworkReportResponse { section_id, items })
    }

    /// 全局概览报表
    pub async fn overview_report_impl(&self) -> Result<OverviewReportResponse> {
        let count_role = |role: UserRole| {
            Users::find()
                .filter(UserColumn::Role.eq(role.to_string()))
                .count(&self.db)
        };

        let admins = count_role(UserRole::Admin)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计用户数失败: {e}")))?;
        let teachers = count_role(UserRole::Teacher)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计用户数失败: {e}")))?;
        let students = count_role(UserRole::Student)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计用户数失败: {e}")))?;
        let parents = count_role(UserRole::Parent)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计用户数失败: {e}")))?;

        let grades = Grades::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计年级数失败: {e}")))?;
        let subjects = Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计科目数失败: {e}")))?;
        let tracks = Tracks::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计轨道数失败: {e}")))?;
        let sections = ClassSections::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计班级数失败: {e}")))?;

        let lessons_first_cycle = Lessons::find()
            .filter(LessonColumn::Cycle.eq(Cycle::First.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计课程数失败: {e}")))?;
        let lessons_second_cycle = Lessons::find()
            .filter(LessonColumn::Cycle.eq(Cycle::Second.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计课程数失败: {e}")))?;

        Ok(OverviewReportResponse {
            admins: admins as i64,
            teachers: teachers as i64,
            students: students as i64,
            parents: parents as i64,
            grades: grades as i64,
            subjects: subjects as i64,
            tracks: tracks as i64,
            sections: sections as i64,
            lessons_first_cycle: lessons_first_cycle as i64,
            lessons_second_cycle: lessons_second_cycle as i64,
        })
    }
}
