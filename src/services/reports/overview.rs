use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ReportService;

/// 全局概览报表（路由层限管理员）
pub async fn overview(service: &ReportService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.overview_report().await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "生成概览报表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("生成概览报表失败: {e}"),
            )),
        ),
    }
}
