use crate::{error::Error, service::users_service::UsersService};
use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use jwt_auth::User;
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

#[derive(Clone)]
pub struct SessionService<S> {
    inner: S,
    users_service: Arc<dyn UsersService>,
}

impl<S> SessionService<S> {
    pub fn new(inner: S, users_service: Arc<dyn UsersService>) -> Self {
        Self {
            inner,
            users_service,
        }
    }
}

impl<S> Service<Request> for SessionService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // service that was polled ready has to handle the request
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let users_service = self.users_service.clone();

        Box::pin(async move {
            let Some(user) = req.extensions().get::<User>().cloned() else {
                tracing::warn!("user missing in request extensions");
                return Ok(Error::SessionInvalid.into_response());
            };

            if let Err(err) = users_service
                .authenticate(user.id, user.token.clone())
                .await
            {
                return Ok(err.into_response());
            }

            inner.call(req).await
        })
    }
}
