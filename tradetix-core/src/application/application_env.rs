use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_decoding_key, parse_jwt_encoding_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family.
    /// Tokens are issued with the first one.
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_encoding_key: EncodingKey,
    pub jwt_decoding_key: DecodingKey,
    pub jwt_token_lifespan: Duration,

    pub password_hash_cost: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TRADETIX_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TRADETIX_LOG_FILENAME")?;
        let bind_address = Self::env_var("TRADETIX_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TRADETIX_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("TRADETIX_DB_NAME")?;
        let max_http_content_len = Self::env_var("TRADETIX_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms = parse_jwt_algorithms(Self::env_var("TRADETIX_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "TRADETIX_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_encoding_key =
            parse_jwt_encoding_key(jwt_algorithm, Self::env_var("TRADETIX_JWT_ENCODING_KEY")?)?;
        let jwt_decoding_key =
            parse_jwt_decoding_key(jwt_algorithm, Self::env_var("TRADETIX_JWT_DECODING_KEY")?)?;
        let jwt_token_lifespan = Self::env_var("TRADETIX_JWT_TOKEN_LIFESPAN")?.parse()?;
        let jwt_token_lifespan = Duration::from_secs(jwt_token_lifespan);
        let password_hash_cost = Self::env_var("TRADETIX_PASSWORD_HASH_COST")?.parse()?;
        if !(4..=31).contains(&password_hash_cost) {
            return Err(anyhow!(
                "TRADETIX_PASSWORD_HASH_COST must be between 4 and 31"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_encoding_key,
            jwt_decoding_key,
            jwt_token_lifespan,
            password_hash_cost,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
