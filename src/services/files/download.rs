use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    token: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    let file = match storage.get_file_by_token(&token).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("下载文件失败: {e}"),
                )),
            );
        }
    };

    let file_path = Path::new(&config.upload.dir).join(&file.stored_name);
    let data = match std::fs::read(&file_path) {
        Ok(data) => data,
        Err(e) => {
            // 数据库里有记录但磁盘上没有文件
            tracing::error!("Stored file missing for token {}: {}", token, e);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件已丢失",
            )));
        }
    };

    let content_type = if file.file_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.file_type.clone()
    };

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file.original_name),
        ))
        .body(data))
}
