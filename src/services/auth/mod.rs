pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod register;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    pub async fn login(
        &self,
        request: &HttpRequest,
        req: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, req, request).await
    }

    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }

    pub async fn refresh(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        refresh::handle_refresh(self, request).await
    }

    pub async fn register(
        &self,
        request: &HttpRequest,
        req: RegisterRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, request, req).await
    }

    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }

    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        req: UpdateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        profile::update_profile(self, request, req).await
    }
}
