//!
//! All roles used within application
//!

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn admin() {
        let role = Role::Admin.as_ref();
        assert_eq!(role, "admin");
    }

    #[test]
    fn user_serialized_same_as_ref() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, format!("\"{}\"", Role::User.as_ref()));
    }
}
