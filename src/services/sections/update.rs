use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, sections::requests::UpdateSectionRequest};

use super::SectionService;

pub async fn update_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    req: UpdateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_section(section_id, req).await {
        Ok(Some(section)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(section, "更新班级成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新班级失败: {e}"),
            )),
        ),
    }
}
