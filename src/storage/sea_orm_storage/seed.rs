//! 演示目录数据灌入
//!
//! 给 seed-catalog 命令用：建一套小型的年级/科目/轨道目录，
//! 在事务里执行，--dry-run 时整体回滚。

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel as GradeActiveModel, Entity as Grades};
use crate::entity::subjects::ActiveModel as SubjectActiveModel;
use crate::entity::tracks::ActiveModel as TrackActiveModel;
use crate::errors::{Result, SchoolSystemError};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use tracing::info;

/// 灌入结果统计
#[derive(Debug, Clone, Copy)]
pub struct SeedReport {
    pub grades: u64,
    pub subjects: u64,
    pub tracks: u64,
}

// 演示目录：年级 -> (科目列表, 轨道列表)
const DEMO_CATALOG: &[(&str, &[&str], &[&str])] = &[
    (
        "Grade 7",
        &["Mathematics", "Arabic", "French", "English", "Science"],
        &["Arabic Track", "French Track"],
    ),
    (
        "Grade 8",
        &["Mathematics", "Arabic", "French", "English", "Physics"],
        &["Arabic Track", "French Track"],
    ),
    (
        "Grade 9",
        &["Mathematics", "Arabic", "French", "English", "Physics", "Chemistry"],
        &["Arabic Track", "French Track", "English Track"],
    ),
];

impl SeaOrmStorage {
    /// 灌入演示目录
    ///
    /// `delete_existing` 先清空现有目录（年级级联带走科目/轨道/课程），
    /// `dry_run` 执行完整流程后回滚事务。
    pub async fn seed_demo_catalog(&self, delete_existing: bool, dry_run: bool) -> Result<SeedReport> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        if delete_existing {
            let deleted = Grades::delete_many()
                .exec(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("清空目录失败: {e}")))?;
            info!("Deleted {} existing grade(s)", deleted.rows_affected);
        }

        let now = chrono::Utc::now().timestamp();
        let mut report = SeedReport {
            grades: 0,
            subjects: 0,
            tracks: 0,
        };

        for (order, (grade_name, subjects, tracks)) in DEMO_CATALOG.iter().enumerate() {
            let grade = GradeActiveModel {
                name: Set(grade_name.to_string()),
                display_order: Set(order as i32 + 1),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建年级失败: {e}")))?;
            report.grades += 1;

            for subject_name in subjects.iter() {
                SubjectActiveModel {
                    grade_id: Set(grade.id),
                    name: Set(subject_name.to_string()),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("创建科目失败: {e}")))?;
                report.subjects += 1;
            }

            for track_name in tracks.iter() {
                TrackActiveModel {
                    grade_id: Set(grade.id),
                    name: Set(track_name.to_string()),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("创建轨道失败: {e}")))?;
                report.tracks += 1;
            }
        }

        if dry_run {
            txn.rollback()
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            info!("Dry run: all changes rolled back");
        } else {
            txn.commit()
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;
        }

        Ok(report)
    }
}
