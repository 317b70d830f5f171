use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::responses::SubmissionListResponse,
    users::entities::User,
};

use super::{HomeworkService, can_manage_section};

/// 作业的全部提交（教师/管理员）
pub async fn list_submissions(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    user: User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let homework = match storage.get_homework_by_id(homework_id).await {
        Ok(Some(homework)) => homework,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取提交列表失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, homework.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己授课班级的提交",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取提交列表失败: {e}"),
                )),
            );
        }
    }

    match storage.list_submissions_by_homework(homework_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionListResponse { items },
            "获取提交列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交列表失败: {e}"),
            )),
        ),
    }
}

/// 学生查看自己的提交（含评分）
pub async fn get_my_submission(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    user: User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submission_for_student(homework_id, user.id).await {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "获取提交成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "尚未提交该作业",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交失败: {e}"),
            )),
        ),
    }
}
