use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::requests::CreateHomeworkRequest,
    users::entities::User,
};

use super::{HomeworkService, can_manage_section};

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    user: User,
    req: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "作业标题不能为空",
        )));
    }

    // 班级必须存在
    match storage.get_section_by_id(req.section_id).await {
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
                    format!("创建作业失败: {e}"),
                )),
            );
        }
    }

    // 只有管理员和该班授课教师能布置作业
    match can_manage_section(&storage, &user, req.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能给自己授课的班级布置作业",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建作业失败: {e}"),
                )),
            );
        }
    }

    match storage.create_homework(user.id, req).await {
        Ok(homework) => Ok(HttpResponse::Ok().json(ApiResponse::success(homework, "创建作业成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
