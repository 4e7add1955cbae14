use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::talent::nine_box::{classify_ratings, NineBoxPlacement};

#[derive(Debug, Deserialize)]
pub struct NineBoxRequest {
    /// 1 – 5
    pub performance: f64,
    /// 1 – 5
    pub potential: f64,
}

/// POST /api/v1/nine-box/classify
pub async fn handle_classify(
    Json(request): Json<NineBoxRequest>,
) -> Result<Json<NineBoxPlacement>, AppError> {
    Ok(Json(classify_ratings(
        request.performance,
        request.potential,
    )?))
}
