pub(crate) mod auth;
pub(crate) mod favorites;
pub(crate) mod products;
pub(crate) mod router;
pub(crate) mod users;
