use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request;
use crate::types::response;

#[instrument(skip(state))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<response::Product>>, Error> {
    let products = state.product_controller.list().await?;

    Ok(Json(products))
}

#[instrument(skip(state))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Json(params): Json<request::NewProduct>,
) -> Result<(StatusCode, Json<response::Product>), Error> {
    let product = state.product_controller.create(&params.name).await?;

    Ok((StatusCode::CREATED, Json(product)))
}
