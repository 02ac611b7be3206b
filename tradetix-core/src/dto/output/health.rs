use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
pub struct Pong {
    pub response: &'static str,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,

    /// seconds since the server started
    pub uptime: f64,

    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
