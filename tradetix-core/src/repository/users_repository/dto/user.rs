use crate::{auth::Role, repository::users_repository::entity::UserFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct User {
    pub id: ObjectId,

    pub username: String,
    pub email: String,

    /// bcrypt hash
    pub password: String,
    pub role: Role,

    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            id: value._id,
            username: value.username,
            email: value.email,
            password: value.password,
            role: value.role,
            account_number: value.account_number,
            ifsc_code: value.ifsc_code,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
