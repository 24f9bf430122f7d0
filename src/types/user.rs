use serde::Serialize;
use uuid::Uuid;

/// The public face of a credential record: id and username, never the hash.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Identity {
    pub(crate) id: Uuid,
    pub(crate) username: String,
}
