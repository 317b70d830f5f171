pub mod create;
pub mod delete;
pub mod detail;
pub mod enroll;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::requests::{
    CreateSectionRequest, EnrollRequest, SectionListParams, UpdateSectionRequest,
};
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    pub async fn create_section(
        &self,
        request: &HttpRequest,
        req: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_section(self, request, req).await
    }

    pub async fn get_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_section(self, request, section_id).await
    }

    pub async fn list_sections(
        &self,
        request: &HttpRequest,
        params: SectionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_sections(self, request, params).await
    }

    pub async fn update_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: UpdateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_section(self, request, section_id, req).await
    }

    pub async fn delete_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_section(self, request, section_id).await
    }

    pub async fn enroll_student(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, request, section_id, req).await
    }

    pub async fn unenroll_student(
        &self,
        request: &HttpRequest,
        section_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        enroll::unenroll_student(self, request, section_id, student_id).await
    }

    pub async fn list_section_students(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_section_students(self, request, section_id).await
    }
}
