//! 作业与提交存储操作

use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::entity::submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn, Entity as Submissions,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    homeworks::{
        entities::{Homework, Submission},
        requests::{
            CreateHomeworkRequest, HomeworkListQuery, SubmitHomeworkRequest, UpdateHomeworkRequest,
        },
        responses::HomeworkListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(
        &self,
        created_by: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(req.section_id),
            lesson_id: Set(req.lesson_id),
            title: Set(req.title),
            description: Set(req.description),
            max_score: Set(req.max_score.unwrap_or(100.0)),
            deadline: Set(req.deadline.map(|dt| dt.timestamp())),
            allow_late: Set(req.allow_late.unwrap_or(false)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_homework())
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, homework_id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 分页列出作业
    pub async fn list_homeworks_with_pagination_impl(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Homeworks::find();

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        // 业务层传入的可见班级范围（学生/教师视角）
        if let Some(section_ids) = query.section_ids {
            if section_ids.is_empty() {
                return Ok(HomeworkListResponse {
                    items: Vec::new(),
                    pagination: PaginationInfo {
                        page: page as i64,
                        page_size: size as i64,
                        total: 0,
                        total_pages: 0,
                    },
                });
            }
            select = select.filter(Column::SectionId.is_in(section_ids));
        }

        if let Some(created_by) = query.created_by {
            select = select.filter(Column::CreatedBy.eq(created_by));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业页数失败: {e}")))?;

        let items: Vec<Homework> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_homework())
            .collect();

        Ok(HomeworkListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_homework_impl(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        if self.get_homework_by_id_impl(homework_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(homework_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(deadline) = update.deadline {
            model.deadline = Set(Some(deadline.timestamp()));
        }
        if let Some(allow_late) = update.allow_late {
            model.allow_late = Set(allow_late);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_homework_by_id_impl(homework_id).await
    }

    /// 删除作业（提交随外键级联删除）
    pub async fn delete_homework_impl(&self, homework_id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(homework_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 提交作业
    ///
    /// 同一学生重复提交覆盖旧内容并清掉已有评分，
    /// 评分后的提交由业务层拦截，不会走到这里覆盖。
    pub async fn upsert_submission_impl(
        &self,
        homework_id: i64,
        student_id: i64,
        req: SubmitHomeworkRequest,
        is_late: bool,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let existing = Submissions::find()
            .filter(SubmissionColumn::HomeworkId.eq(homework_id))
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交失败: {e}")))?;

        let result = match existing {
            Some(submission) => {
                let model = SubmissionActiveModel {
                    id: Set(submission.id),
                    content: Set(req.content),
                    attachment_token: Set(req.attachment_token),
                    submitted_at: Set(now),
                    is_late: Set(is_late),
                    score: Set(None),
                    feedback: Set(None),
                    graded_by: Set(None),
                    graded_at: Set(None),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    SchoolSystemError::database_operation(format!("更新提交失败: {e}"))
                })?
            }
            None => {
                let model = SubmissionActiveModel {
                    homework_id: Set(homework_id),
                    student_id: Set(student_id),
                    content: Set(req.content),
                    attachment_token: Set(req.attachment_token),
                    submitted_at: Set(now),
                    is_late: Set(is_late),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    SchoolSystemError::database_operation(format!("创建提交失败: {e}"))
                })?
            }
        };

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_for_student_impl(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(SubmissionColumn::HomeworkId.eq(homework_id))
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作业的全部提交
    pub async fn list_submissions_by_homework_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(SubmissionColumn::HomeworkId.eq(homework_id))
            .order_by_asc(SubmissionColumn::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 评分
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        if self.get_submission_by_id_impl(submission_id).await?.is_none() {
            return Ok(None);
        }

        let model = SubmissionActiveModel {
            id: Set(submission_id),
            score: Set(Some(score)),
            feedback: Set(feedback),
            graded_by: Set(Some(grader_id)),
            graded_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("评分失败: {e}")))?;

        self.get_submission_by_id_impl(submission_id).await
    }
}
