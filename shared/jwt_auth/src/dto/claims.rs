use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// hex representation of the user's ObjectId
    pub sub: String,
    pub role: String,
    pub exp: i64,

    /// Random per token, so two tokens issued
    /// for the same user in the same second still differ
    pub jti: Uuid,
}
