use regex::Regex;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};
use uuid::Uuid;

use crate::core::error::{self, Error};
use crate::types::Identity;

const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_-]{3,20}$";

/// Owns the username-to-password-hash mapping. Uniqueness is enforced by the
/// database constraint, so concurrent registrations race safely.
#[derive(Clone)]
pub(crate) struct UserController {
    pool: PgPool,
    bcrypt_cost: u32,
    username_pattern: Regex,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("username_pattern", &self.username_pattern.as_str())
            .finish()
    }
}

impl UserController {
    pub(crate) fn new(pool: PgPool, bcrypt_cost: u32) -> Result<Self, error::ConfigError> {
        Ok(Self {
            pool,
            bcrypt_cost,
            username_pattern: Regex::new(USERNAME_PATTERN)?,
        })
    }

    pub(crate) async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, Error> {
        if !self.username_pattern.is_match(username) {
            return Err(Error::InvalidUsername);
        }

        let password_hash = self.hash(password).await?;

        match sqlx::query(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3) RETURNING id, username;",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(&password_hash)
        .map(map_identity)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::UserAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// Unknown username and wrong password both come back as
    /// `InvalidCredentials` so the two are indistinguishable to the caller.
    pub(crate) async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, Error> {
        let row = match sqlx::query(
            "SELECT id, username, password_hash FROM users WHERE username = $1;",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        {
            Ok(row) => row,
            Err(sqlx::Error::RowNotFound) => return Err(Error::InvalidCredentials),
            Err(e) => return Err(Error::Sql(e)),
        };

        let password_hash: String = row.get("password_hash");

        if !verify_password(password, password_hash).await? {
            return Err(Error::InvalidCredentials);
        }

        Ok(map_identity(row))
    }

    pub(crate) async fn get_identity(&self, id: Uuid) -> Result<Option<Identity>, Error> {
        match sqlx::query("SELECT id, username FROM users WHERE id = $1;")
            .bind(id)
            .map(map_identity)
            .fetch_one(&self.pool)
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn list(&self) -> Result<Vec<Identity>, Error> {
        let users = sqlx::query("SELECT id, username FROM users ORDER BY username;")
            .map(map_identity)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    // bcrypt is CPU-bound, so it runs on the blocking pool rather than
    // stalling the request workers.
    async fn hash(&self, password: &str) -> Result<String, Error> {
        let cost = self.bcrypt_cost;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|_| Error::Internal)?
            .map_err(Error::Bcrypt)
    }
}

async fn verify_password(password: &str, password_hash: String) -> Result<bool, Error> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|_| Error::Internal)?
        .map_err(Error::Bcrypt)
}

fn map_identity(row: PgRow) -> Identity {
    Identity {
        id: row.get("id"),
        username: row.get("username"),
    }
}
