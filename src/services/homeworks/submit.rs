use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::requests::SubmitHomeworkRequest,
    users::entities::{User, UserRole},
};

use super::HomeworkService;

/// 学生提交作业
///
/// 截止时间之后：allow_late 打开时标记 is_late，否则拒收。
/// 已评分的提交不允许覆盖。
pub async fn submit_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    user: User,
    req: SubmitHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有学生可以提交作业",
        )));
    }

    if req.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "提交内容不能为空",
        )));
    }

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
                    format!("提交作业失败: {e}"),
                )),
            );
        }
    };

    // 必须是该班学生
    match storage.is_student_enrolled(homework.section_id, user.id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能提交所在班级的作业",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交作业失败: {e}"),
                )),
            );
        }
    }

    // 截止时间判定
    let now = chrono::Utc::now();
    let is_late = match homework.deadline {
        Some(deadline) if now > deadline => {
            if !homework.allow_late {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "作业已截止，不接受迟交",
                )));
            }
            true
        }
        _ => false,
    };

    // 已评分的提交不允许覆盖
    match storage.get_submission_for_student(homework_id, user.id).await {
        Ok(Some(existing)) if existing.is_graded() => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "该作业已评分，不能重新提交",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交作业失败: {e}"),
                )),
            );
        }
    }

    // 附件 token 校验（必须是自己上传的文件）
    if let Some(ref token) = req.attachment_token {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) => {
                if file.user_id != user.id {
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
                    "附件不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("提交作业失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .upsert_submission(homework_id, user.id, req, is_late)
        .await
    {
        Ok(submission) => {
            tracing::info!(
                "Student {} submitted homework {} (late: {})",
                user.id,
                homework_id,
                submission.is_late
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交作业成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交作业失败: {e}"),
            )),
        ),
    }
}
