pub mod create_session;
pub mod delete_session;
pub mod list_sessions;
pub mod record;
pub mod session_records;
pub mod student_summary;
pub mod update_session;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    CreateSessionRequest, RecordAttendanceRequest, SessionListParams, StudentSummaryParams,
    UpdateSessionRequest,
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub(crate) use crate::services::can_manage_section;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    pub async fn create_session(
        &self,
        request: &HttpRequest,
        user: User,
        req: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create_session::create_session(self, request, user, req).await
    }

    pub async fn list_sessions(
        &self,
        request: &HttpRequest,
        params: SessionListParams,
    ) -> ActixResult<HttpResponse> {
        list_sessions::list_sessions(self, request, params).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        user: User,
        req: UpdateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update_session::update_session(self, request, session_id, user, req).await
    }

    pub async fn delete_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        user: User,
    ) -> ActixResult<HttpResponse> {
        delete_session::delete_session(self, request, session_id, user).await
    }

    pub async fn record_attendance(
        &self,
        request: &HttpRequest,
        session_id: i64,
        user: User,
        req: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, request, session_id, user, req).await
    }

    pub async fn list_session_records(
        &self,
        request: &HttpRequest,
        session_id: i64,
        user: User,
    ) -> ActixResult<HttpResponse> {
        session_records::list_session_records(self, request, session_id, user).await
    }

    pub async fn student_summary(
        &self,
        request: &HttpRequest,
        student_id: i64,
        user: User,
        params: StudentSummaryParams,
    ) -> ActixResult<HttpResponse> {
        student_summary::student_summary(self, request, student_id, user, params).await
    }
}
