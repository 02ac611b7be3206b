use super::session_service::SessionService;
use crate::service::users_service::UsersService;
use std::sync::Arc;
use tower::Layer;

///
/// Layer that checks whether token of the [jwt_auth::User]
/// is still stored with the user. It has to be placed after
/// [jwt_auth::JwtAuthLayer] so the user is already in extensions.
///
#[derive(Clone)]
pub struct SessionLayer {
    users_service: Arc<dyn UsersService>,
}

impl SessionLayer {
    pub fn new(users_service: Arc<dyn UsersService>) -> Self {
        Self { users_service }
    }
}

impl<S> Layer<S> for SessionLayer {
    type Service = SessionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionService::new(inner, self.users_service.clone())
    }
}
