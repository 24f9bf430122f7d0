use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::response;

#[derive(Clone, Debug)]
pub(crate) struct ProductController {
    pool: PgPool,
}

impl ProductController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create(&self, name: &str) -> Result<response::Product, Error> {
        match sqlx::query("INSERT INTO products (id, name) VALUES ($1, $2) RETURNING id, name;")
            .bind(Uuid::new_v4())
            .bind(name)
            .map(map_product)
            .fetch_one(&self.pool)
            .await
        {
            Ok(product) => Ok(product),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::ProductAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn list(&self) -> Result<Vec<response::Product>, Error> {
        let products = sqlx::query("SELECT id, name FROM products ORDER BY name;")
            .map(map_product)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}

fn map_product(row: PgRow) -> response::Product {
    response::Product {
        id: row.get("id"),
        name: row.get("name"),
    }
}
