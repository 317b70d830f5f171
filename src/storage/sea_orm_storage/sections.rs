//! 班级与选课存储操作

use super::SeaOrmStorage;
use crate::entity::class_sections::{ActiveModel, Column, Entity as ClassSections};
use crate::entity::enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as Enrollments,
};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    sections::{
        entities::{ClassSection, Enrollment},
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
    users::entities::User,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_section_impl(&self, req: CreateSectionRequest) -> Result<ClassSection> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            grade_id: Set(req.grade_id),
            track_id: Set(req.track_id),
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取班级
    pub async fn get_section_by_id_impl(&self, section_id: i64) -> Result<Option<ClassSection>> {
        let result = ClassSections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 分页列出班级
    pub async fn list_sections_with_pagination_impl(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassSections::find();

        if let Some(grade_id) = query.grade_id {
            select = select.filter(Column::GradeId.eq(grade_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级页数失败: {e}")))?;

        let items: Vec<ClassSection> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_section())
            .collect();

        Ok(SectionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级
    pub async fn update_section_impl(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<ClassSection>> {
        if self.get_section_by_id_impl(section_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(section_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(track_id) = update.track_id {
            model.track_id = Set(Some(track_id));
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_section_by_id_impl(section_id).await
    }

    /// 删除班级
    pub async fn delete_section_impl(&self, section_id: i64) -> Result<bool> {
        let result = ClassSections::delete_by_id(section_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生选课
    pub async fn enroll_student_impl(
        &self,
        section_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        let model = EnrollmentActiveModel {
            section_id: Set(section_id),
            student_id: Set(student_id),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("学生选课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 学生退课
    pub async fn unenroll_student_impl(&self, section_id: i64, student_id: i64) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(EnrollmentColumn::SectionId.eq(section_id))
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("学生退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出班级学生
    pub async fn list_section_students_impl(&self, section_id: i64) -> Result<Vec<User>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::SectionId.eq(section_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(student_ids))
            .order_by_asc(crate::entity::users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }

    /// 判断学生是否在班级中
    pub async fn is_student_enrolled_impl(&self, section_id: i64, student_id: i64) -> Result<bool> {
        let count = Enrollments::find()
            .filter(EnrollmentColumn::SectionId.eq(section_id))
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(count > 0)
    }

    /// 统计班级学生数
    pub async fn count_section_students_impl(&self, section_id: i64) -> Result<i64> {
        let count = Enrollments::find()
            .filter(EnrollmentColumn::SectionId.eq(section_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计班级学生数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 列出学生所在的班级 ID
    pub async fn list_student_section_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(enrollments.into_iter().map(|e| e.section_id).collect())
    }

    /// 列出教师所授的班级 ID
    pub async fn list_teacher_section_ids_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let sections = ClassSections::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师班级失败: {e}")))?;

        Ok(sections.into_iter().map(|s| s.id).collect())
    }
}
