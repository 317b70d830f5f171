use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    reports::requests::HomeworkReportParams,
    users::entities::User,
};

use super::{ReportService, can_manage_section};

/// 班级作业报表（每个作业的提交/评分人数）
pub async fn homework_report(
    service: &ReportService,
    request: &HttpRequest,
    user: User,
    params: HomeworkReportParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section_by_id(params.section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("生成作业报表失败: {e}"),
                )),
            );
        }
    }

    match can_manage_section(&storage, &user, params.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己授课班级的报表",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("生成作业报表失败: {e}"),
                )),
            );
        }
    }

    match storage.homework_report(params.section_id).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "生成作业报表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("生成作业报表失败: {e}"),
            )),
        ),
    }
}
