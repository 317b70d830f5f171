//! 练习存储操作
//!
//! 练习树（练习 -> 题目 -> 选项）在一个事务里整体写入，
//! 避免导入中途失败留下半棵树。

use super::SeaOrmStorage;
use crate::entity::exercises::{ActiveModel, Column, Entity as Exercises};
use crate::entity::question_choices::{
    ActiveModel as ChoiceActiveModel, Column as ChoiceColumn, Entity as QuestionChoices,
};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::exercises::{
    entities::{Exercise, Question},
    requests::{CreateExerciseRequest, UpdateExerciseRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建练习（整棵树一个事务写入）
    pub async fn create_exercise_impl(
        &self,
        lesson_id: i64,
        created_by: i64,
        req: CreateExerciseRequest,
    ) -> Result<Exercise> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let exercise = ActiveModel {
            lesson_id: Set(lesson_id),
            title: Set(req.title),
            description: Set(req.description),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| SchoolSystemError::database_operation(format!("创建练习失败: {e}")))?;

        for (index, question) in req.questions.into_iter().enumerate() {
            let inserted = QuestionActiveModel {
                exercise_id: Set(exercise.id),
                text: Set(question.text),
                position: Set(index as i32 + 1),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建题目失败: {e}")))?;

            for choice in question.choices {
                ChoiceActiveModel {
                    question_id: Set(inserted.id),
                    text: Set(choice.text),
                    is_correct: Set(choice.is_correct),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("创建题目选项失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(exercise.into_exercise())
    }

    /// 读取练习整树
    pub async fn get_exercise_with_questions_impl(
        &self,
        exercise_id: i64,
    ) -> Result<Option<(Exercise, Vec<Question>)>> {
        let Some(exercise) = Exercises::find_by_id(exercise_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询练习失败: {e}")))?
        else {
            return Ok(None);
        };

        let question_models = Questions::find()
            .filter(QuestionColumn::ExerciseId.eq(exercise_id))
            .order_by_asc(QuestionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询题目失败: {e}")))?;

        let question_ids: Vec<i64> = question_models.iter().map(|q| q.id).collect();

        // 批量取选项，按题目聚合
        let mut choice_map: HashMap<i64, Vec<_>> = HashMap::new();
        if !question_ids.is_empty() {
            let choices = QuestionChoices::find()
                .filter(ChoiceColumn::QuestionId.is_in(question_ids))
                .order_by_asc(ChoiceColumn::Id)
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询题目选项失败: {e}"))
                })?;

            for choice in choices {
                choice_map
                    .entry(choice.question_id)
                    .or_default()
                    .push(choice.into_choice());
            }
        }

        let questions: Vec<Question> = question_models
            .into_iter()
            .map(|m| {
                let mut question = m.into_question();
                question.choices = choice_map.remove(&question.id).unwrap_or_default();
                question
            })
            .collect();

        Ok(Some((exercise.into_exercise(), questions)))
    }

    /// 列出课程下的练习
    pub async fn list_exercises_by_lesson_impl(&self, lesson_id: i64) -> Result<Vec<Exercise>> {
        let result = Exercises::find()
            .filter(Column::LessonId.eq(lesson_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询练习列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_exercise()).collect())
    }

    /// 更新练习元数据
    pub async fn update_exercise_impl(
        &self,
        exercise_id: i64,
        update: UpdateExerciseRequest,
    ) -> Result<Option<Exercise>> {
        let existing = Exercises::find_by_id(exercise_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询练习失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(exercise_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新练习失败: {e}")))?;

        Ok(Some(updated.into_exercise()))
    }

    /// 删除练习（题目/选项随外键级联删除）
    pub async fn delete_exercise_impl(&self, exercise_id: i64) -> Result<bool> {
        let result = Exercises::delete_by_id(exercise_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除练习失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
