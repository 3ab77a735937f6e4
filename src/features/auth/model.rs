use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Caller identity attached to the request by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Name of the role that unlocks the admin-only routes
#[derive(Debug, Clone)]
pub struct AdminRole(Arc<str>);

impl AdminRole {
    pub fn new(role: impl Into<Arc<str>>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Claims carried by the bearer token
///
/// Roles may arrive either as a `roles` array or a single `role` string; both are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    pub fn into_user(self) -> AuthenticatedUser {
        let mut roles = self.roles;
        if let Some(role) = self.role {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }

        AuthenticatedUser {
            sub: self.sub,
            roles,
        }
    }
}
