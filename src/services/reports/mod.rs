pub mod attendance_report;
pub mod homework_report;
pub mod overview;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{AttendanceReportParams, HomeworkReportParams};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub(crate) use crate::services::can_manage_section;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn attendance_report(
        &self,
        request: &HttpRequest,
        user: User,
        params: AttendanceReportParams,
    ) -> ActixResult<HttpResponse> {
        attendance_report::attendance_report(self, request, user, params).await
    }

    pub async fn homework_report(
        &self,
        request: &HttpRequest,
        user: User,
        params: HomeworkReportParams,
    ) -> ActixResult<HttpResponse> {
        homework_report::homework_report(self, request, user, params).await
    }

    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::overview(self, request).await
    }
}
