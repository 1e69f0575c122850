//! Registration and login.
//!
//! Login returns the user's profile together with a JWT. The client is
//! responsible for persisting the credential (under
//! [`crate::storage::keys::AUTH_TOKEN`]) and rebuilding the [`ApiClient`]
//! so subsequent requests carry it; the API layer itself stays stateless.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use harbor_core::{Email, UserId};

use super::{ApiClient, ApiError};

/// Payload for creating an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password: String,
    /// Account roles; the server defaults to `["customer"]` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Response from the registration endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Registered {
    pub message: String,
}

/// Profile and credential returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(rename = "_id")]
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub roles: Vec<String>,
    /// Bearer credential for subsequent requests.
    pub token: String,
}

impl AuthSession {
    /// Whether this account carries the seller role.
    #[must_use]
    pub fn is_seller(&self) -> bool {
        self.roles.iter().any(|role| role == "seller")
    }

    /// The locally persistable part of the session (never the token).
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// The logged-in user's profile as persisted under
/// [`crate::storage::keys::USER`]. The credential is stored separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub roles: Vec<String>,
}

impl Profile {
    /// Whether this account carries the seller role.
    #[must_use]
    pub fn is_seller(&self) -> bool {
        self.roles.iter().any(|role| role == "seller")
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a Email,
    password: &'a str,
}

impl ApiClient {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already registered or the request
    /// fails.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Registered, ApiError> {
        self.post("/auth/register", request).await
    }

    /// Log in and obtain a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request
    /// fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &Email, password: &str) -> Result<AuthSession, ApiError> {
        self.post("/auth/login", &LoginRequest { email, password })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_session_deserializes_login_response() {
        let json = r#"{
            "_id": "665f1c2e8b3e4a0012d45e10",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "roles": ["customer", "seller"],
            "token": "eyJhbGciOiJIUzI1NiJ9.e30.sig"
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id.as_str(), "665f1c2e8b3e4a0012d45e10");
        assert!(session.is_seller());
    }

    #[test]
    fn test_register_request_omits_default_roles() {
        let request = RegisterRequest {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            email: Email::parse("jane@example.com").unwrap(),
            password: "hunter2hunter2".to_owned(),
            roles: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert!(json.get("roles").is_none());
    }
}
