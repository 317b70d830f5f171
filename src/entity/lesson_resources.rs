//! 课程资源实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lesson_id: i64,
    pub kind: String,
    pub title: String,
    pub download_token: Option<String>,
    pub content: Option<String>,
    pub blocks: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lessons::Entity",
        from = "Column::LessonId",
        to = "super::lessons::Column::Id"
    )]
    Lesson,
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_resource(self) -> crate::models::lessons::entities::LessonResource {
        use crate::models::lessons::entities::{LessonResource, ResourceKind};
        use chrono::{DateTime, Utc};

        LessonResource {
            id: self.id,
            lesson_id: self.lesson_id,
            kind: self.kind.parse::<ResourceKind>().unwrap_or(ResourceKind::Markdown),
            title: self.title,
            download_token: self.download_token,
            content: self.content,
            // blocks 以 JSON 字符串落库，读出时解析
            blocks: self
                .blocks
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
