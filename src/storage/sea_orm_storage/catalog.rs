//! 教学目录存储操作（年级 / 科目 / 轨道）

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel as GradeActiveModel, Column as GradeColumn, Entity as Grades};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
};
use crate::entity::tracks::{ActiveModel as TrackActiveModel, Column as TrackColumn, Entity as Tracks};
use crate::errors::{Result, SchoolSystemError};
use crate::models::catalog::{
    entities::{Grade, Subject, Track},
    requests::{
        CreateGradeRequest, CreateSubjectRequest, CreateTrackRequest, UpdateGradeRequest,
        UpdateSubjectRequest, UpdateTrackRequest,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    // ==================== 年级 ====================

    /// 创建年级
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = GradeActiveModel {
            name: Set(req.name),
            display_order: Set(req.display_order.unwrap_or(0)),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建年级失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 列出所有年级（按显示顺序）
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let result = Grades::find()
            .order_by_asc(GradeColumn::DisplayOrder)
            .order_by_asc(GradeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 通过 ID 获取年级
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 更新年级
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        if self.get_grade_by_id_impl(grade_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = GradeActiveModel {
            id: Set(grade_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(display_order) = update.display_order {
            model.display_order = Set(display_order);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新年级失败: {e}")))?;

        self.get_grade_by_id_impl(grade_id).await
    }

    /// 删除年级（科目/轨道/课程随外键级联删除）
    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    // ==================== 科目 ====================

    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = SubjectActiveModel {
            grade_id: Set(req.grade_id),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 列出科目（可按年级筛选）
    pub async fn list_subjects_impl(&self, grade_id: Option<i64>) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(grade_id) = grade_id {
            select = select.filter(SubjectColumn::GradeId.eq(grade_id));
        }

        let result = select
            .order_by_asc(SubjectColumn::GradeId)
            .order_by_asc(SubjectColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(subject_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = SubjectActiveModel {
            id: Set(subject_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(subject_id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    // ==================== 轨道 ====================

    /// 创建轨道
    pub async fn create_track_impl(&self, req: CreateTrackRequest) -> Result<Track> {
        let model = TrackActiveModel {
            grade_id: Set(req.grade_id),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建轨道失败: {e}")))?;

        Ok(result.into_track())
    }

    /// 列出轨道（可按年级筛选）
    pub async fn list_tracks_impl(&self, grade_id: Option<i64>) -> Result<Vec<Track>> {
        let mut select = Tracks::find();

        if let Some(grade_id) = grade_id {
            select = select.filter(TrackColumn::GradeId.eq(grade_id));
        }

        let result = select
            .order_by_asc(TrackColumn::GradeId)
            .order_by_asc(TrackColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询轨道列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_track()).collect())
    }

    /// 通过 ID 获取轨道
    pub async fn get_track_by_id_impl(&self, track_id: i64) -> Result<Option<Track>> {
        let result = Tracks::find_by_id(track_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询轨道失败: {e}")))?;

        Ok(result.map(|m| m.into_track()))
    }

    /// 更新轨道
    pub async fn update_track_impl(
        &self,
        track_id: i64,
        update: UpdateTrackRequest,
    ) -> Result<Option<Track>> {
        if self.get_track_by_id_impl(track_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = TrackActiveModel {
            id: Set(track_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新轨道失败: {e}")))?;

        self.get_track_by_id_impl(track_id).await
    }

    /// 删除轨道
    pub async fn delete_track_impl(&self, track_id: i64) -> Result<bool> {
        let result = Tracks::delete_by_id(track_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除轨道失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
