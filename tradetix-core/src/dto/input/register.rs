use serde::Deserialize;

///
/// Fields are optional so that missing ones
/// are reported by the service as validation errors
///
#[derive(Debug, Deserialize)]
pub struct Register {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
