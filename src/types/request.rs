use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub(crate) struct LoginData {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewProduct {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewFavorite {
    pub(crate) product_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_data_deserializes_from_json() {
        let data: LoginData =
            serde_json::from_str(r#"{"username":"alice","password":"s3cret-enough"}"#).unwrap();

        assert_eq!(data.username, "alice");
        assert_eq!(data.password, "s3cret-enough");
    }
}
