use axum::Json;

use super::{ApiResponse, CatalogDto};

/// `GET /api/catalog`
pub async fn get_catalog() -> Json<ApiResponse<CatalogDto>> {
    Json(ApiResponse::success(CatalogDto::build()))
}
