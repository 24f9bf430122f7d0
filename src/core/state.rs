use sqlx::postgres::PgPool;

use crate::controllers::favorite::FavoriteController;
use crate::controllers::product::ProductController;
use crate::controllers::token::TokenController;
use crate::controllers::user::UserController;
use crate::core::config::Args;
use crate::core::error::ConfigError;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) user_controller: UserController,
    pub(crate) token_controller: TokenController,
    pub(crate) product_controller: ProductController,
    pub(crate) favorite_controller: FavoriteController,
}

impl AppState {
    pub(crate) fn new(pool: PgPool, config: &Args) -> Result<Self, ConfigError> {
        Ok(AppState {
            user_controller: UserController::new(pool.clone(), config.bcrypt_cost)?,
            token_controller: TokenController::new(&config.secret, config.token_ttl_seconds),
            product_controller: ProductController::new(pool.clone()),
            favorite_controller: FavoriteController::new(pool),
        })
    }
}
