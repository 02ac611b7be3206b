use crate::auth::Role;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,

    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,

    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
