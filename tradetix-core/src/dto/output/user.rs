use crate::{auth::Role, repository};
use serde::Serialize;
use time::OffsetDateTime;

///
/// User as seen by clients, password and tokens are never exposed
///
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(rename = "IFSCCode", skip_serializing_if = "Option::is_none")]
    pub ifsc_code: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::User> for User {
    fn from(value: repository::User) -> Self {
        Self {
            id: value.id.to_hex(),
            username: value.username,
            email: value.email,
            role: value.role,
            account_number: value.account_number,
            ifsc_code: value.ifsc_code,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct UserWithToken {
    pub user: User,
    pub token: String,
}
