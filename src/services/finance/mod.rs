pub mod work_hours;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::finance::requests::WorkHoursParams;
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct FinanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl FinanceService {
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

    pub async fn work_hours(
        &self,
        request: &HttpRequest,
        user: User,
        params: WorkHoursParams,
    ) -> ActixResult<HttpResponse> {
        work_hours::work_hours(self, request, user, params).await
    }
}
