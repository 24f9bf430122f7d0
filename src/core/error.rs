use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Not authorized")]
    NotAuthorized,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("User not found")]
    UserNotFound,
    #[error("Product already exists")]
    ProductAlreadyExists,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Favorite already exists")]
    FavoriteAlreadyExists,
    #[error("Favorite not found")]
    FavoriteNotFound,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        // Every authentication failure collapses to the same 401 so a caller
        // can't tell unknown-username from wrong-password from bad-token.
        let (status, message) = match self {
            Error::Sql(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SQL error"),
            Error::Bcrypt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Bcrypt error"),
            Error::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "JWT error"),
            Error::NoCredentials => (StatusCode::UNAUTHORIZED, "Not Authorized"),
            Error::NotAuthorized => (StatusCode::UNAUTHORIZED, "Not Authorized"),
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Not Authorized"),
            Error::UserAlreadyExists => (StatusCode::CONFLICT, "User already exists"),
            Error::InvalidUsername => (StatusCode::BAD_REQUEST, "Invalid username"),
            Error::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            Error::ProductAlreadyExists => (StatusCode::CONFLICT, "Product already exists"),
            Error::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found"),
            Error::FavoriteAlreadyExists => (StatusCode::CONFLICT, "Favorite already exists"),
            Error::FavoriteNotFound => (StatusCode::NOT_FOUND, "Favorite not found"),
            Error::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn rendered(error: Error) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn credential_and_token_failures_render_identically() {
        let invalid = rendered(Error::InvalidCredentials).await;
        let unauthorized = rendered(Error::NotAuthorized).await;
        let missing = rendered(Error::NoCredentials).await;

        assert_eq!(
            invalid,
            (StatusCode::UNAUTHORIZED, "Not Authorized".to_string())
        );
        assert_eq!(invalid, unauthorized);
        assert_eq!(invalid, missing);
    }

    #[tokio::test]
    async fn duplicate_username_maps_to_conflict() {
        let (status, _) = rendered(Error::UserAlreadyExists).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn storage_failures_map_to_internal_error() {
        let (status, message) = rendered(Error::Sql(sqlx::Error::PoolClosed)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "SQL error");
    }

    #[tokio::test]
    async fn missing_favorite_maps_to_not_found() {
        let (status, _) = rendered(Error::FavoriteNotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
