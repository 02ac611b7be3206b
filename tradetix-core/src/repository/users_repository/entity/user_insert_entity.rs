use crate::auth::Role;
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub _id: ObjectId,

    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,

    pub tokens: Vec<UserTokenEntity<'a>>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Serialize)]
pub struct UserTokenEntity<'a> {
    pub token: &'a str,
}
