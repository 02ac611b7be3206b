#![cfg(feature = "test_utils")]

use crate::{
    util::{parse_jwt_algorithms, parse_jwt_encoding_key},
    JwtEncoder,
};
use bson::oid::ObjectId;
use std::time::Duration;

///
/// Creates JWT that passes signature validation.
/// The token is not stored anywhere, so services
/// that keep track of sessions will reject it.
///
pub fn create_jwt(user_id: ObjectId, role: &str, jwt_algorithms: String, jwt_key: String) -> String {
    let jwt_algorithms = parse_jwt_algorithms(jwt_algorithms).unwrap();
    let jwt_algorithm = *jwt_algorithms
        .first()
        .expect("algorithms list cannot be empty");
    let jwt_key = parse_jwt_encoding_key(&jwt_algorithm, jwt_key).unwrap();

    JwtEncoder::new(jwt_key, jwt_algorithm, Duration::from_secs(3600))
        .encode(user_id, role)
        .unwrap()
}
