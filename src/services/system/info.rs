use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

use super::SystemService;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemInfoResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    /// 运行时长（秒）
    pub uptime_secs: i64,
}

/// 健康检查（无需认证）
pub async fn health(_service: &SystemService, _request: &HttpRequest) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("ok")))
}

/// 系统信息（管理员）
pub async fn info(_service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let uptime_secs = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    let response = SystemInfoResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_secs,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取系统信息成功")))
}
