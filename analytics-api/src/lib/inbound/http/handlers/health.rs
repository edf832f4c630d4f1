use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        "Service is running",
        HealthResponseData { status: "healthy" },
    )
}

pub async fn root() -> ApiSuccess<ServiceInfoResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        "success",
        ServiceInfoResponseData {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfoResponseData {
    pub service: &'static str,
    pub version: &'static str,
}
