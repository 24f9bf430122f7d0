use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Identity>>, Error> {
    let users = state.user_controller.list().await?;

    Ok(Json(users))
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Identity>, Error> {
    let user = state
        .user_controller
        .get_identity(id)
        .await?
        .ok_or(Error::UserNotFound)?;

    Ok(Json(user))
}
