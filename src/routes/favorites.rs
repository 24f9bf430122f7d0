use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;
use crate::types::request;
use crate::types::response;

#[instrument(skip(state, user))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
) -> Result<Json<Vec<response::Favorite>>, Error> {
    let favorites = state.favorite_controller.list(user.id).await?;

    Ok(Json(favorites))
}

#[instrument(skip(state, user))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
    Json(params): Json<request::NewFavorite>,
) -> Result<(StatusCode, Json<response::Favorite>), Error> {
    let favorite = state
        .favorite_controller
        .create(user.id, params.product_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

#[instrument(skip(state, user))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    state.favorite_controller.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
