use super::jwt_auth_service::JwtAuthService;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Layer that validates JWT in Authorization header.
/// If token is correct [crate::User] is added to request extensions,
/// otherwise 401 is returned without calling inner service.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Claims, JwtEncoder, User};
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, HeaderValue, Method, Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use bson::oid::ObjectId;
    use jsonwebtoken::{EncodingKey, Header};
    use std::time::Duration;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &[u8] = b"some secret";

    #[tokio::test]
    async fn missing_authorization_header() {
        test_invalid_authorization_header(None).await;
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_invalid_authorization_header("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("NotBearer").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let claims = Claims {
            sub: ObjectId::new().to_hex(),
            role: "user".to_string(),
            exp: 12312,
            jti: Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        test_invalid_authorization_header(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let encoder = JwtEncoder::new(
            EncodingKey::from_secret(b"Wrong key"),
            Algorithm::HS256,
            Duration::from_secs(600),
        );
        let token = encoder.encode(ObjectId::new(), "user").unwrap();

        test_invalid_authorization_header(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn subject_not_object_id() {
        let claims = Claims {
            sub: "379a73e6-91dd-48a3-a652-002d34c43670".to_string(),
            role: "user".to_string(),
            exp: 253402210800,
            jti: Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        test_invalid_authorization_header(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let user_id = ObjectId::new();
        let encoder = JwtEncoder::new(
            EncodingKey::from_secret(SECRET),
            Algorithm::HS256,
            Duration::from_secs(600),
        );
        let token = encoder.encode(user_id, "admin").unwrap();
        let expected_token = token.clone();

        let router = Router::new()
            .route(
                "/",
                get(move |Extension(user): Extension<User>| async move {
                    if user.id != user_id {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }
                    if user.role != "admin" {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }
                    if user.token != expected_token {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) {
        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            ));

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
