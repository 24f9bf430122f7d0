use serde::Serialize;
use uuid::Uuid;

use crate::types::Identity;

#[derive(Serialize)]
pub(crate) struct Login {
    pub(crate) user: Identity,
    pub(crate) token: String,
}

impl Login {
    pub(crate) fn new(user: Identity, token: String) -> Self {
        Self { user, token }
    }
}

#[derive(Serialize)]
pub(crate) struct Product {
    pub(crate) id: Uuid,
    pub(crate) name: String,
}

#[derive(Serialize)]
pub(crate) struct Favorite {
    pub(crate) id: Uuid,
    pub(crate) product_id: Uuid,
    pub(crate) user_id: Uuid,
}
