use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{Method, header},
    middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::core::state::AppState;
use crate::routes::{auth, favorites, products, users};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    // /favorites/...
    let favorite_router = Router::new()
        .route("/", get(favorites::get_all).post(favorites::post))
        .route("/{id}", delete(favorites::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /products/...
    let product_router = Router::new().route("/", get(products::get_all).post(products::post));

    // /users/...
    let user_router = Router::new()
        .route("/", get(users::get_all))
        .route("/{id}", get(users::get));

    Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/register", post(auth::register))
        .route("/login", post(auth::sign_in))
        .route(
            "/me",
            get(auth::me).layer(middleware::from_fn_with_state(
                state.clone(),
                utils::auth::authorize,
            )),
        )
        .nest("/favorites", favorite_router)
        .nest("/products", product_router)
        .nest("/users", user_router)
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::DELETE])
                        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                        .allow_origin(cors::Any),
                ),
        )
}
