use crate::{error::MissingRoleError, User};

///
/// Validates that user has the required role.
///
/// ### Errors
/// - [MissingRoleError] when user has any other role
///
pub fn require_role(user: &User, role: &str) -> Result<(), MissingRoleError> {
    match user.has_role(role) {
        true => Ok(()),
        false => Err(MissingRoleError {
            missing_role: role.to_string(),
        }),
    }
}
