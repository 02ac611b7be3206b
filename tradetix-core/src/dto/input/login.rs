use serde::Deserialize;

#[derive(Deserialize)]
pub struct Login {
    pub email: Option<String>,
    pub password: Option<String>,
}
