use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::Identity;
use crate::types::request;
use crate::types::response;

#[instrument(skip(state, params))]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(params): Json<request::LoginData>,
) -> Result<(StatusCode, Json<response::Login>), Error> {
    let user = state
        .user_controller
        .register(&params.username, &params.password)
        .await?;

    let token = state.token_controller.issue(&user)?;

    Ok((StatusCode::CREATED, Json(response::Login::new(user, token))))
}

#[instrument(skip(state, params))]
pub(crate) async fn sign_in(
    State(state): State<AppState>,
    Json(params): Json<request::LoginData>,
) -> Result<Json<response::Login>, Error> {
    let user = state
        .user_controller
        .authenticate(&params.username, &params.password)
        .await?;

    let token = state.token_controller.issue(&user)?;

    Ok(Json(response::Login::new(user, token)))
}

pub(crate) async fn me(Extension(user): Extension<Identity>) -> Json<Identity> {
    Json(user)
}
