use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    lessons::{
        entities::ResourceKind,
        requests::CreateResourceRequest,
        responses::ResourceListResponse,
    },
};

use super::LessonService;

/// 校验资源载荷与类型是否匹配
///
/// pdf 需要 download_token，markdown 需要 content，
/// blocks 需要 JSON 数组。
fn validate_resource_payload(req: &CreateResourceRequest) -> Result<(), &'static str> {
    if req.title.trim().is_empty() {
        return Err("资源标题不能为空");
    }
    match req.kind {
        ResourceKind::Pdf => {
            if req.download_token.is_none() {
                return Err("pdf 资源需要 download_token");
            }
        }
        ResourceKind::Markdown => {
            if req.content.as_deref().map(str::trim).unwrap_or("").is_empty() {
                return Err("markdown 资源需要 content");
            }
        }
        ResourceKind::Blocks => match req.blocks {
            Some(ref value) if value.is_array() => {}
            _ => return Err("blocks 资源需要 JSON 数组"),
        },
    }
    Ok(())
}

pub async fn add_resource(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
    user_id: i64,
    req: CreateResourceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = validate_resource_payload(&req) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

    // 课程必须存在
    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("添加资源失败: {e}"),
                )),
            );
        }
    }

    // pdf 资源的 token 必须指向当前用户上传的文件，并计一次引用
    if req.kind == ResourceKind::Pdf
        && let Some(ref token) = req.download_token
    {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) => {
                if file.user_id != user_id {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::Forbidden,
                        "无权使用此文件",
                    )));
                }
                if let Err(e) = storage.increment_file_citation(file.id).await {
                    tracing::warn!("Failed to bump citation count for file {}: {}", file.id, e);
                }
            }
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
                        format!("添加资源失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_lesson_resource(lesson_id, req).await {
        Ok(resource) => Ok(HttpResponse::Ok().json(ApiResponse::success(resource, "添加资源成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("添加资源失败: {e}"),
            )),
        ),
    }
}

pub async fn list_resources(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_lesson_resources(lesson_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ResourceListResponse { items },
            "获取资源列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取资源列表失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_resource(
    service: &LessonService,
    request: &HttpRequest,
    resource_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_lesson_resource(resource_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除资源成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "资源不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除资源失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_request(kind: ResourceKind) -> CreateResourceRequest {
        CreateResourceRequest {
            kind,
            title: "Resource".to_string(),
            download_token: None,
            content: None,
            blocks: None,
        }
    }

    #[test]
    fn test_pdf_requires_token() {
        let mut req = base_request(ResourceKind::Pdf);
        assert!(validate_resource_payload(&req).is_err());
        req.download_token = Some("550e8400-e29b-41d4-a716-446655440000".to_string());
        assert!(validate_resource_payload(&req).is_ok());
    }

    #[test]
    fn test_markdown_requires_content() {
        let mut req = base_request(ResourceKind::Markdown);
        assert!(validate_resource_payload(&req).is_err());
        req.content = Some("# Heading".to_string());
        assert!(validate_resource_payload(&req).is_ok());
    }

    #[test]
    fn test_blocks_requires_array() {
        let mut req = base_request(ResourceKind::Blocks);
        req.blocks = Some(json!({"type": "text"}));
        assert!(validate_resource_payload(&req).is_err());
        req.blocks = Some(json!([{"type": "text", "value": "hello"}]));
        assert!(validate_resource_payload(&req).is_ok());
    }
}
