use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    pub id: i64,
    // 文件的唯一标识符，下载时使用
    pub download_token: String,
    // 上传时的原始文件名
    pub original_name: String,
    // 磁盘上的存储文件名
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub stored_name: String,
    // 文件大小（以字节为单位）
    pub file_size: i64,
    // MIME 类型
    pub file_type: String,
    // 被课程资源/作业提交引用的次数
    pub citation_count: Option<i32>,
    // 上传者
    pub user_id: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
