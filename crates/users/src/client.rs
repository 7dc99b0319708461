//! Users service HTTP client
//!
//! Fetches profiles with `GET {base_url}/api/users/{id}`.

use reqwest::StatusCode;

use crate::{IdentityConfig, IdentityError, IdentityService, UserProfile};

/// Real HTTP client for the users service.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let base_url = config.base_url.ok_or_else(|| {
            IdentityError::Configuration(
                "USERS_SERVICE_URL is required for the http provider".to_string(),
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IdentityError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl IdentityService for HttpIdentityClient {
    async fn fetch_user(
        &self,
        user_id: i64,
        bearer: Option<&str>,
    ) -> Result<UserProfile, IdentityError> {
        let url = format!("{}/api/users/{}", self.base_url, user_id);

        let mut request = self.http.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(IdentityError::Response(format!(
                "Users service returned {} for user {}",
                response.status(),
                user_id
            )));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }
}
