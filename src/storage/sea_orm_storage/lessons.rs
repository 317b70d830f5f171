//! 课程与课程资源存储操作

use super::SeaOrmStorage;
use crate::entity::lesson_resources::{
    ActiveModel as ResourceActiveModel, Column as ResourceColumn, Entity as LessonResources,
};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    lessons::{
        entities::{Lesson, LessonResource},
        requests::{CreateLessonRequest, CreateResourceRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    ///
    /// position 未指定时排到 (科目, 学期) 组内末尾。
    pub async fn create_lesson_impl(
        &self,
        created_by: i64,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let position = match req.position {
            Some(position) => position,
            None => self.next_lesson_position(req.subject_id, &req.cycle.to_string()).await?,
        };

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            track_id: Set(req.track_id),
            cycle: Set(req.cycle.to_string()),
            title: Set(req.title),
            position: Set(position),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// (科目, 学期) 组内的下一个排序位置
    async fn next_lesson_position(&self, subject_id: i64, cycle: &str) -> Result<i32> {
        let max: Option<i32> = Lessons::find()
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Cycle.eq(cycle))
            .select_only()
            .column_as(Column::Position.max(), "max_position")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程排序失败: {e}")))?
            .flatten();

        Ok(max.unwrap_or(0) + 1)
    }

    /// 通过 ID 获取课程
    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 分页列出课程
    pub async fn list_lessons_with_pagination_impl(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Lessons::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 按年级筛选：先取该年级下所有科目
        if let Some(grade_id) = query.grade_id {
            let subject_ids: Vec<i64> = Subjects::find()
                .filter(SubjectColumn::GradeId.eq(grade_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询年级科目失败: {e}"))
                })?
                .into_iter()
                .map(|s| s.id)
                .collect();

            if subject_ids.is_empty() {
                return Ok(LessonListResponse {
                    items: Vec::new(),
                    pagination: PaginationInfo {
                        page: page as i64,
                        page_size: size as i64,
                        total: 0,
                        total_pages: 0,
                    },
                });
            }
            select = select.filter(Column::SubjectId.is_in(subject_ids));
        }

        if let Some(track_id) = query.track_id {
            select = select.filter(Column::TrackId.eq(track_id));
        }

        if let Some(cycle) = query.cycle {
            select = select.filter(Column::Cycle.eq(cycle.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 上学期在前，组内按 position
        select = select
            .order_by_asc(Column::Cycle)
            .order_by_asc(Column::Position)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程页数失败: {e}")))?;

        let items: Vec<Lesson> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_lesson())
            .collect();

        Ok(LessonListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_lesson_impl(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        if self.get_lesson_by_id_impl(lesson_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(lesson_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(track_id) = update.track_id {
            model.track_id = Set(Some(track_id));
        }
        if let Some(cycle) = update.cycle {
            model.cycle = Set(cycle.to_string());
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(position) = update.position {
            model.position = Set(position);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_lesson_by_id_impl(lesson_id).await
    }

    /// 删除课程（资源/练习随外键级联删除）
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(lesson_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加课程资源
    pub async fn create_lesson_resource_impl(
        &self,
        lesson_id: i64,
        req: CreateResourceRequest,
    ) -> Result<LessonResource> {
        // blocks 以 JSON 字符串落库
        let blocks = match req.blocks {
            Some(value) => Some(serde_json::to_string(&value).map_err(|e| {
                SchoolSystemError::serialization(format!("blocks 序列化失败: {e}"))
            })?),
            None => None,
        };

        let model = ResourceActiveModel {
            lesson_id: Set(lesson_id),
            kind: Set(req.kind.to_string()),
            title: Set(req.title),
            download_token: Set(req.download_token),
            content: Set(req.content),
            blocks: Set(blocks),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课程资源失败: {e}")))?;

        Ok(result.into_resource())
    }

    /// 列出课程资源
    pub async fn list_lesson_resources_impl(&self, lesson_id: i64) -> Result<Vec<LessonResource>> {
        let result = LessonResources::find()
            .filter(ResourceColumn::LessonId.eq(lesson_id))
            .order_by_asc(ResourceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程资源失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_resource()).collect())
    }

    /// 通过 ID 获取课程资源
    pub async fn get_resource_by_id_impl(
        &self,
        resource_id: i64,
    ) -> Result<Option<LessonResource>> {
        let result = LessonResources::find_by_id(resource_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程资源失败: {e}")))?;

        Ok(result.map(|m| m.into_resource()))
    }

    /// 删除课程资源
    pub async fn delete_lesson_resource_impl(&self, resource_id: i64) -> Result<bool> {
        let result = LessonResources::delete_by_id(resource_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课程资源失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
