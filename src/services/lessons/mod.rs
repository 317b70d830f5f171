pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod resources;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lessons::requests::{
    CreateLessonRequest, CreateResourceRequest, LessonListParams, UpdateLessonRequest,
};
use crate::storage::Storage;

pub struct LessonService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonService {
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

    pub async fn create_lesson(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateLessonRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lesson(self, request, created_by, req).await
    }

    pub async fn list_lessons(
        &self,
        request: &HttpRequest,
        params: LessonListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_lessons(self, request, params).await
    }

    pub async fn get_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_lesson(self, request, lesson_id).await
    }

    pub async fn update_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
        req: UpdateLessonRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lesson(self, request, lesson_id, req).await
    }

    pub async fn delete_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lesson(self, request, lesson_id).await
    }

    pub async fn add_resource(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
        user_id: i64,
        req: CreateResourceRequest,
    ) -> ActixResult<HttpResponse> {
        resources::add_resource(self, request, lesson_id, user_id, req).await
    }

    pub async fn list_resources(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::list_resources(self, request, lesson_id).await
    }

    pub async fn delete_resource(
        &self,
        request: &HttpRequest,
        resource_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::delete_resource(self, request, resource_id).await
    }
}
