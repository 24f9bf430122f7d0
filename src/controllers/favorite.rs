use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::response;

/// Favorites are always scoped by the authenticated user's id, never by a
/// caller-supplied one.
#[derive(Clone, Debug)]
pub(crate) struct FavoriteController {
    pool: PgPool,
}

impl FavoriteController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<response::Favorite, Error> {
        match sqlx::query(
            "INSERT INTO favorites (id, product_id, user_id) VALUES ($1, $2, $3) RETURNING id, product_id, user_id;",
        )
        .bind(Uuid::new_v4())
        .bind(product_id)
        .bind(user_id)
        .map(map_favorite)
        .fetch_one(&self.pool)
        .await
        {
            Ok(favorite) => Ok(favorite),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::FavoriteAlreadyExists)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(Error::ProductNotFound)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn list(&self, user_id: Uuid) -> Result<Vec<response::Favorite>, Error> {
        let favorites =
            sqlx::query("SELECT id, product_id, user_id FROM favorites WHERE user_id = $1;")
                .bind(user_id)
                .map(map_favorite)
                .fetch_all(&self.pool)
                .await?;

        Ok(favorites)
    }

    pub(crate) async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), Error> {
        match sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2 RETURNING id;")
            .bind(id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => Ok(()),
            Err(sqlx::Error::RowNotFound) => Err(Error::FavoriteNotFound),
            Err(e) => Err(Error::Sql(e)),
        }
    }
}

fn map_favorite(row: PgRow) -> response::Favorite {
    response::Favorite {
        id: row.get("id"),
        product_id: row.get("product_id"),
        user_id: row.get("user_id"),
    }
}
