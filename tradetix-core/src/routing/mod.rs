mod events;
mod health;
mod listings;
mod tickets;
mod transactions;
mod users;

use crate::application::{ApplicationMiddleware, ApplicationState};
use axum::{routing::post, Router};

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .nest("/api/v1/users", users::routing())
        .nest("/api/v1/tickets", tickets::routing())
        .nest("/api/v1/events", events::routing())
        .nest("/api/v1/listings", listings::routing())
        .nest("/api/v1/transactions", transactions::routing())
        .route_layer(application_middleware.session.clone())
        .route_layer(application_middleware.jwt.clone())
        .route("/api/v1/users/register", post(users::register))
        .route("/api/v1/users/login", post(users::login))
        .merge(health::routing())
        .layer(application_middleware.body_limit.clone())
}

#[cfg(test)]
mod test {
    use crate::{
        application::{create_application, ApplicationMiddleware, ApplicationState},
        auth::{Role, SessionLayer},
        dto::{output, TicketStatus},
        error::{Entity, Error},
        service::{
            events_service::MockEventsService, listings_service::MockListingsService,
            tickets_service::MockTicketsService, transactions_service::MockTransactionsService,
            users_service::MockUsersService,
        },
    };
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, StatusCode},
        Router,
    };
    use bson::oid::ObjectId;
    use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
    use jwt_auth::JwtEncoder;
    use serde_json::Value;
    use std::{
        sync::Arc,
        time::{Duration, Instant},
    };
    use time::OffsetDateTime;
    use tower::ServiceExt;
    use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

    const SECRET: &[u8] = b"routing secret";

    struct Mocks {
        users_service: MockUsersService,
        tickets_service: MockTicketsService,
        events_service: MockEventsService,
        listings_service: MockListingsService,
        transactions_service: MockTransactionsService,
    }

    impl Mocks {
        fn new() -> Self {
            let mut users_service = MockUsersService::new();
            users_service.expect_authenticate().returning(|_, _| Ok(()));

            Self {
                users_service,
                tickets_service: MockTicketsService::new(),
                events_service: MockEventsService::new(),
                listings_service: MockListingsService::new(),
                transactions_service: MockTransactionsService::new(),
            }
        }

        fn into_router(self) -> Router {
            let users_service = Arc::new(self.users_service);
            let state = ApplicationState {
                users_service: users_service.clone(),
                tickets_service: Arc::new(self.tickets_service),
                events_service: Arc::new(self.events_service),
                listings_service: Arc::new(self.listings_service),
                transactions_service: Arc::new(self.transactions_service),
                started_at: Instant::now(),
            };
            let middleware = ApplicationMiddleware {
                jwt: jwt_auth::JwtAuthLayer::new(
                    DecodingKey::from_secret(SECRET),
                    vec![Algorithm::HS256],
                ),
                session: SessionLayer::new(users_service),
                body_limit: RequestBodyLimitLayer::new(1024),
                trace: TraceLayer::new_for_http(),
            };

            create_application(state, middleware)
        }
    }

    fn token(user_id: ObjectId, role: Role) -> String {
        JwtEncoder::new(
            EncodingKey::from_secret(SECRET),
            Algorithm::HS256,
            Duration::from_secs(600),
        )
        .encode(user_id, role.as_ref())
        .unwrap()
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn output_ticket(id: ObjectId, owner: ObjectId) -> output::Ticket {
        output::Ticket {
            id: id.to_hex(),
            title: "Arijit Singh Concert".to_string(),
            description: None,
            price: 1000,
            status: TicketStatus::Sold,
            owner: owner.to_hex(),
            buyer: Some(ObjectId::new().to_hex()),
            event_id: None,
            expiry: OffsetDateTime::now_utc(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn ping_without_token() {
        let router = Mocks::new().into_router();

        let response = router
            .oneshot(request(Method::GET, "/api/ping", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "pong");
    }

    #[tokio::test]
    async fn health_without_token() {
        let router = Mocks::new().into_router();

        let response = router
            .oneshot(request(Method::GET, "/api/health", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "UP");
    }

    #[tokio::test]
    async fn protected_route_without_token() {
        let mut mocks = Mocks::new();
        mocks.tickets_service.expect_find_open_tickets().never();
        let router = mocks.into_router();

        let response = router
            .oneshot(request(Method::GET, "/api/v1/tickets/open", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logged_out_token_rejected() {
        let mut mocks = Mocks::new();
        mocks.users_service = MockUsersService::new();
        mocks
            .users_service
            .expect_authenticate()
            .returning(|_, _| Err(Error::SessionInvalid));
        mocks.tickets_service.expect_find_open_tickets().never();
        let router = mocks.into_router();
        let token = token(ObjectId::new(), Role::User);

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/tickets/open",
                Some(&token),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn register_without_token() {
        let mut mocks = Mocks::new();
        mocks.users_service.expect_register().returning(|_| {
            Err(Error::AlreadyExists(Entity::User))
        });
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/users/register",
                None,
                Some(r#"{"username":"john","email":"john@example.com","password":"secret"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["status"], 409);
        assert_eq!(json["message"], "CONFLICT: User");
    }

    #[tokio::test]
    async fn malformed_body_bad_request() {
        let router = Mocks::new().into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/users/login",
                None,
                Some("not json"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_id_bad_request() {
        let mut mocks = Mocks::new();
        mocks.tickets_service.expect_find_ticket().never();
        let router = mocks.into_router();
        let token = token(ObjectId::new(), Role::User);

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/tickets/not-an-id",
                Some(&token),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_users_requires_admin() {
        let mut mocks = Mocks::new();
        mocks.users_service.expect_find_users().never();
        let router = mocks.into_router();
        let token = token(ObjectId::new(), Role::User);

        let response = router
            .oneshot(request(Method::GET, "/api/v1/users", Some(&token), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn bank_details_of_other_user_forbidden() {
        let mut mocks = Mocks::new();
        mocks.users_service.expect_add_bank_details().never();
        let router = mocks.into_router();
        let token = token(ObjectId::new(), Role::User);
        let uri = format!("/api/v1/users/{}/bank-details", ObjectId::new().to_hex());

        let response = router
            .oneshot(request(
                Method::POST,
                &uri,
                Some(&token),
                Some(r#"{"accountNumber":"1234567890","IFSCCode":"SBIN0000001"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn buy_ticket_ok() {
        let buyer = ObjectId::new();
        let ticket_id = ObjectId::new();
        let mut mocks = Mocks::new();
        mocks
            .tickets_service
            .expect_buy_ticket()
            .returning(move |id, buyer_id| {
                assert_eq!(id, ticket_id);
                assert_eq!(buyer_id, buyer);
                Ok(output_ticket(id, ObjectId::new()))
            });
        let router = mocks.into_router();
        let token = token(buyer, Role::User);
        let uri = format!("/api/v1/tickets/{}/buy", ticket_id.to_hex());

        let response = router
            .oneshot(request(Method::PATCH, &uri, Some(&token), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "TICKET_BOUGHT");
        assert_eq!(json["data"]["status"], "sold");
    }

    #[tokio::test]
    async fn buy_ticket_already_sold() {
        let mut mocks = Mocks::new();
        mocks
            .tickets_service
            .expect_buy_ticket()
            .returning(|_, _| Err(Error::TicketAlreadySold));
        let router = mocks.into_router();
        let token = token(ObjectId::new(), Role::User);
        let uri = format!("/api/v1/tickets/{}/buy", ObjectId::new().to_hex());

        let response = router
            .oneshot(request(Method::PATCH, &uri, Some(&token), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn create_event_ticket_passes_event_id() {
        let event_id = ObjectId::new();
        let owner = ObjectId::new();
        let mut mocks = Mocks::new();
        mocks
            .tickets_service
            .expect_create_ticket()
            .returning(move |owner, passed_event_id, _| {
                assert_eq!(passed_event_id, Some(event_id));
                Ok(output_ticket(ObjectId::new(), owner))
            });
        let router = mocks.into_router();
        let token = token(owner, Role::User);
        let uri = format!("/api/v1/events/{}/tickets", event_id.to_hex());

        let response = router
            .oneshot(request(
                Method::POST,
                &uri,
                Some(&token),
                Some(r#"{"title":"Front row","price":1500,"expiry":"2099-01-01T00:00:00Z"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["status"], 201);
        assert_eq!(json["message"], "TICKET_CREATED");
    }

    #[tokio::test]
    async fn body_too_large() {
        let router = Mocks::new().into_router();
        let body = format!(r#"{{"email":"{}","password":"x"}}"#, "a".repeat(2048));

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/users/login",
                None,
                Some(&body),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
