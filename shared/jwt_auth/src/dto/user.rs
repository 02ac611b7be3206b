use bson::oid::ObjectId;
use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Debug, Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from his JWT.
///
#[derive(Debug)]
pub struct InnerUser {
    pub id: ObjectId,
    pub role: String,

    /// raw token the user authenticated with
    pub token: String,
}

impl User {
    pub fn new(id: ObjectId, role: String, token: String) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, role, token }),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
