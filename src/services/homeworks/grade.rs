use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::requests::GradeSubmissionRequest,
    users::entities::User,
};

use super::{HomeworkService, can_manage_section};

/// 教师评分
///
/// 分数裁剪到 [0, max_score] 区间。
pub async fn grade_submission(
    service: &HomeworkService,
    request: &HttpRequest,
    submission_id: i64,
    user: User,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("评分失败: {e}"),
                )),
            );
        }
    };

    let homework = match storage.get_homework_by_id(submission.homework_id).await {
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
                    format!("评分失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, homework.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能批改自己授课班级的作业",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("评分失败: {e}"),
                )),
            );
        }
    }

    let score = req.score.clamp(0.0, homework.max_score);

    match storage
        .grade_submission(submission_id, user.id, score, req.feedback)
        .await
    {
        Ok(Some(submission)) => {
            tracing::info!(
                "Submission {} graded by {} (score: {})",
                submission_id,
                user.id,
                score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
