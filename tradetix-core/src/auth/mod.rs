mod middleware;
mod role;

pub use middleware::SessionLayer;
pub use role::*;

use jwt_auth::User;

pub fn is_admin(user: &User) -> bool {
    user.has_role(Role::Admin.as_ref())
}
