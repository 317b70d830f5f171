pub mod info;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        info::health(self, request).await
    }

    pub async fn info(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        info::info(self, request).await
    }
}
