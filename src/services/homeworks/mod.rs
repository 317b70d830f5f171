pub mod create;
pub mod delete;
pub mod detail;
pub mod grade;
pub mod list;
pub mod submissions;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::requests::{
    CreateHomeworkRequest, GradeSubmissionRequest, HomeworkListParams, SubmitHomeworkRequest,
    UpdateHomeworkRequest,
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub(crate) use crate::services::can_manage_section;

pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_homework(
        &self,
        request: &HttpRequest,
        user: User,
        req: CreateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_homework(self, request, user, req).await
    }

    pub async fn list_homeworks(
        &self,
        request: &HttpRequest,
        params: HomeworkListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_homeworks(self, request, params).await
    }

    pub async fn get_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_homework(self, request, homework_id).await
    }

    pub async fn update_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        user: User,
        req: UpdateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_homework(self, request, homework_id, user, req).await
    }

    pub async fn delete_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        user: User,
    ) -> ActixResult<HttpResponse> {
        delete::delete_homework(self, request, homework_id, user).await
    }

    pub async fn submit_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        user: User,
        req: SubmitHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_homework(self, request, homework_id, user, req).await
    }

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        user: User,
    ) -> ActixResult<HttpResponse> {
        submissions::list_submissions(self, request, homework_id, user).await
    }

    pub async fn get_my_submission(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        user: User,
    ) -> ActixResult<HttpResponse> {
        submissions::get_my_submission(self, request, homework_id, user).await
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        user: User,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, user, req).await
    }
}
