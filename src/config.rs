use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub platform_api_url: String,
    pub platform_api_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            platform_api_url: env::var("PLATFORM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            platform_api_token: env::var("PLATFORM_API_TOKEN").unwrap_or_default(),
        }
    }
}
