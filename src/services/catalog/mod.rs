pub mod grades;
pub mod subjects;
pub mod tracks;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::catalog::requests::{
    CatalogListParams, CreateGradeRequest, CreateSubjectRequest, CreateTrackRequest,
    UpdateGradeRequest, UpdateSubjectRequest, UpdateTrackRequest,
};
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
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

    // 年级
    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        req: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        grades::create_grade(self, request, req).await
    }

    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        grades::list_grades(self, request).await
    }

    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
        req: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        grades::update_grade(self, request, grade_id, req).await
    }

    pub async fn delete_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        grades::delete_grade(self, request, grade_id).await
    }

    // 科目
    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        req: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::create_subject(self, request, req).await
    }

    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        params: CatalogListParams,
    ) -> ActixResult<HttpResponse> {
        subjects::list_subjects(self, request, params).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        req: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::update_subject(self, request, subject_id, req).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject(self, request, subject_id).await
    }

    // 轨道
    pub async fn create_track(
        &self,
        request: &HttpRequest,
        req: CreateTrackRequest,
    ) -> ActixResult<HttpResponse> {
        tracks::create_track(self, request, req).await
    }

    pub async fn list_tracks(
        &self,
        request: &HttpRequest,
        params: CatalogListParams,
    ) -> ActixResult<HttpResponse> {
        tracks::list_tracks(self, request, params).await
    }

    pub async fn update_track(
        &self,
        request: &HttpRequest,
        track_id: i64,
        req: UpdateTrackRequest,
    ) -> ActixResult<HttpResponse> {
        tracks::update_track(self, request, track_id, req).await
    }

    pub async fn delete_track(
        &self,
        request: &HttpRequest,
        track_id: i64,
    ) -> ActixResult<HttpResponse> {
        tracks::delete_track(self, request, track_id).await
    }
}
