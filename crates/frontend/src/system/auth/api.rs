use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use contracts::system::auth::{AdminUser, LoginRequest, LoginResult};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ME_PATH: &str = "/api/auth/me";

#[derive(Clone, Copy)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn login_url(&self) -> String {
        self.client.url(LOGIN_PATH)
    }

    pub fn me_url(&self) -> String {
        self.client.url(ME_PATH)
    }

    /// Login with email and password
    pub async fn login(&self, email: String, password: String) -> Result<LoginResult, ApiError> {
        let request = LoginRequest { email, password };
        self.client.post_json(&self.login_url(), &request).await
    }

    /// Current user for the stored token
    pub async fn me(&self) -> Result<AdminUser, ApiError> {
        self.client.get(&self.me_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_urls() {
        let auth = AuthService::new(ApiClient::new("http://localhost:5000", 1000));
        assert_eq!(auth.login_url(), "http://localhost:5000/api/auth/login");
        assert_eq!(auth.me_url(), "http://localhost:5000/api/auth/me");
    }
}
