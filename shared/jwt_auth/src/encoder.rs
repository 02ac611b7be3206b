use crate::Claims;
use bson::oid::ObjectId;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Issues tokens accepted by [crate::JwtAuthLayer]
/// configured with the matching decoding key.
///
#[derive(Clone)]
pub struct JwtEncoder {
    inner: Arc<JwtEncoderInner>,
}

struct JwtEncoderInner {
    key: EncodingKey,
    header: Header,
    lifespan: Duration,
}

impl JwtEncoder {
    pub fn new(key: EncodingKey, algorithm: Algorithm, lifespan: Duration) -> Self {
        let inner = JwtEncoderInner {
            key,
            header: Header::new(algorithm),
            lifespan,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn encode(
        &self,
        user_id: ObjectId,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let expire_at = OffsetDateTime::now_utc() + self.inner.lifespan;
        let claims = Claims {
            sub: user_id.to_hex(),
            role: role.to_string(),
            exp: expire_at.unix_timestamp(),
            jti: Uuid::new_v4(),
        };

        jsonwebtoken::encode(&self.inner.header, &claims, &self.inner.key)
    }
}
