use super::ApplicationEnv;
use crate::{auth::SessionLayer, service::users_service::UsersService};
use jwt_auth::JwtAuthLayer;
use std::sync::Arc;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub jwt: JwtAuthLayer,
    pub session: SessionLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(
    env: &ApplicationEnv,
    users_service: Arc<dyn UsersService>,
) -> ApplicationMiddleware {
    let jwt = JwtAuthLayer::new(env.jwt_decoding_key.clone(), env.jwt_algorithms.clone());

    let session = SessionLayer::new(users_service);

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        jwt,
        session,
        body_limit,
        trace,
    }
}
