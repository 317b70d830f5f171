//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_records::{
    ActiveModel as RecordActiveModel, Column as RecordColumn, Entity as AttendanceRecords,
};
use crate::entity::attendance_sessions::{ActiveModel, Column, Entity as AttendanceSessions};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{AttendanceRecord, AttendanceSession, RecordStatus, SessionStatus},
        requests::{CreateSessionRequest, RecordEntry, SessionListQuery, UpdateSessionRequest},
        responses::{SessionListResponse, StudentAttendanceSummary},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建考勤课次
    pub async fn create_session_impl(
        &self,
        teacher_id: i64,
        req: CreateSessionRequest,
    ) -> Result<AttendanceSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(req.section_id),
            teacher_id: Set(teacher_id),
            session_date: Set(req.session_date),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            status: Set(SessionStatus::Scheduled.to_string()),
            note: Set(req.note),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课次失败: {e}")))?;

        Ok(result.into_session())
    }

    /// 通过 ID 获取课次
    pub async fn get_session_by_id_impl(
        &self,
        session_id: i64,
    ) -> Result<Option<AttendanceSession>> {
        let result = AttendanceSessions::find_by_id(session_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 分页列出课次
    pub async fn list_sessions_with_pagination_impl(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AttendanceSessions::find();

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // ISO 日期字符串按字典序比较即按日期比较
        if let Some(ref date_from) = query.date_from {
            select = select.filter(Column::SessionDate.gte(date_from.clone()));
        }
        if let Some(ref date_to) = query.date_to {
            select = select.filter(Column::SessionDate.lte(date_to.clone()));
        }

        select = select
            .order_by_desc(Column::SessionDate)
            .order_by_desc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次页数失败: {e}")))?;

        let items: Vec<AttendanceSession> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_session())
            .collect();

        Ok(SessionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课次
    pub async fn update_session_impl(
        &self,
        session_id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<AttendanceSession>> {
        if self.get_session_by_id_impl(session_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(session_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(session_date) = update.session_date {
            model.session_date = Set(session_date);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(note) = update.note {
            model.note = Set(Some(note));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新课次失败: {e}")))?;

        self.get_session_by_id_impl(session_id).await
    }

    /// 删除课次（考勤记录随外键级联删除）
    pub async fn delete_session_impl(&self, session_id: i64) -> Result<bool> {
        let result = AttendanceSessions::delete_by_id(session_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量登记考勤（同一学生重复登记覆盖）
    pub async fn upsert_attendance_records_impl(
        &self,
        session_id: i64,
        entries: Vec<RecordEntry>,
    ) -> Result<Vec<AttendanceRecord>> {
        let now = chrono::Utc::now().timestamp();
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            let existing = AttendanceRecords::find()
                .filter(RecordColumn::SessionId.eq(session_id))
                .filter(RecordColumn::StudentId.eq(entry.student_id))
                .one(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}"))
                })?;

            let result = match existing {
                Some(record) => {
                    let model = RecordActiveModel {
                        id: Set(record.id),
                        status: Set(entry.status.to_string()),
                        note: Set(entry.note),
                        recorded_at: Set(now),
                        ..Default::default()
                    };
                    model.update(&self.db).await.map_err(|e| {
                        SchoolSystemError::database_operation(format!("更新考勤记录失败: {e}"))
                    })?
                }
                None => {
                    let model = RecordActiveModel {
                        session_id: Set(session_id),
                        student_id: Set(entry.student_id),
                        status: Set(entry.status.to_string()),
                        note: Set(entry.note),
                        recorded_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(&self.db).await.map_err(|e| {
                        SchoolSystemError::database_operation(format!("创建考勤记录失败: {e}"))
                    })?
                }
            };

            records.push(result.into_record());
        }

        Ok(records)
    }

    /// 列出课次的考勤记录
    pub async fn list_session_records_impl(
        &self,
        session_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let result = AttendanceRecords::find()
            .filter(RecordColumn::SessionId.eq(session_id))
            .order_by_asc(RecordColumn::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_record()).collect())
    }

    /// 学生考勤汇总（时间段内按状态计数）
    pub async fn student_attendance_summary_impl(
        &self,
        student_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<StudentAttendanceSummary> {
        // 先筛出时间段内的课次 ID，再统计该学生的记录
        let mut session_select = AttendanceSessions::find();
        if let Some(ref date_from) = date_from {
            session_select = session_select.filter(Column::SessionDate.gte(date_from.clone()));
        }
        if let Some(ref date_to) = date_to {
            session_select = session_select.filter(Column::SessionDate.lte(date_to.clone()));
        }

        let session_ids: Vec<i64> = session_select
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课次失败: {e}")))?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut summary = StudentAttendanceSummary {
            student_id,
            total: 0,
            present: 0,
            absent: 0,
            late: 0,
            excused: 0,
        };

        if session_ids.is_empty() {
            return Ok(summary);
        }

        let records = AttendanceRecords::find()
            .filter(RecordColumn::StudentId.eq(student_id))
            .filter(RecordColumn::SessionId.is_in(session_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        for record in records {
            summary.total += 1;
            match record.status.parse::<RecordStatus>() {
                Ok(RecordStatus::Present) => summary.present += 1,
                Ok(RecordStatus::Absent) => summary.absent += 1,
                Ok(RecordStatus::Late) => summary.late += 1,
                Ok(RecordStatus::Excused) => summary.excused += 1,
                Err(_) => {}
            }
        }

        Ok(summary)
    }

    /// 已完成课次的时长列表（秒），课时结算用
    pub async fn completed_session_durations_impl(
        &self,
        teacher_id: i64,
        date_from: Option<String>,
        date_to: Option<String>,
    ) -> Result<Vec<i64>> {
        let mut select = AttendanceSessions::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::Status.eq(SessionStatus::Completed.to_string()));

        if let Some(ref date_from) = date_from {
            select = select.filter(Column::SessionDate.gte(date_from.clone()));
        }
        if let Some(ref date_to) = date_to {
            select = select.filter(Column::SessionDate.lte(date_to.clone()));
        }

        let sessions = select
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询已完成课次失败: {e}")))?;

        Ok(sessions
            .into_iter()
            .map(|s| s.end_time - s.start_time)
            .collect())
    }
}
