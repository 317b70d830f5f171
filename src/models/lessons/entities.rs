use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

// 学期周期：上学期/下学期，用于课程排序分桶
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum Cycle {
    First,
    Second,
}

impl Cycle {
    pub const FIRST: &'static str = "first";
    pub const SECOND: &'static str = "second";
}

impl<'de> Deserialize<'de> for Cycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Cycle::FIRST => Ok(Cycle::First),
            Cycle::SECOND => Ok(Cycle::Second),
            _ => Err(serde::de::Error::custom(format!(
                "无效的学期周期: '{s}'. 支持的值: first, second"
            ))),
        }
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cycle::First => write!(f, "{}", Cycle::FIRST),
            Cycle::Second => write!(f, "{}", Cycle::SECOND),
        }
    }
}

impl std::str::FromStr for Cycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Cycle::First),
            "second" => Ok(Cycle::Second),
            _ => Err(format!("Invalid cycle: {s}")),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Lesson {
    pub id: i64,
    pub subject_id: i64,
    pub track_id: Option<i64>,
    pub cycle: Cycle,
    pub title: String,
    /// 在 (科目, 学期) 内的排序位置
    pub position: i32,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 资源类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum ResourceKind {
    Pdf,
    Markdown,
    Blocks,
}

impl ResourceKind {
    pub const PDF: &'static str = "pdf";
    pub const MARKDOWN: &'static str = "markdown";
    pub const BLOCKS: &'static str = "blocks";
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            ResourceKind::PDF => Ok(ResourceKind::Pdf),
            ResourceKind::MARKDOWN => Ok(ResourceKind::Markdown),
            ResourceKind::BLOCKS => Ok(ResourceKind::Blocks),
            _ => Err(serde::de::Error::custom(format!(
                "无效的资源类型: '{s}'. 支持的类型: pdf, markdown, blocks"
            ))),
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Pdf => write!(f, "{}", ResourceKind::PDF),
            ResourceKind::Markdown => write!(f, "{}", ResourceKind::MARKDOWN),
            ResourceKind::Blocks => write!(f, "{}", ResourceKind::BLOCKS),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ResourceKind::Pdf),
            "markdown" => Ok(ResourceKind::Markdown),
            "blocks" => Ok(ResourceKind::Blocks),
            _ => Err(format!("Invalid resource kind: {s}")),
        }
    }
}

// 课程资源：PDF 附件、Markdown 文本或结构化 blocks
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonResource {
    pub id: i64,
    pub lesson_id: i64,
    pub kind: ResourceKind,
    pub title: String,
    pub download_token: Option<String>,
    pub content: Option<String>,
    pub blocks: Option<Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
