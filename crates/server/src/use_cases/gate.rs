//! Single-administrator authorization gate.
//!
//! Every administrative mutation passes through here before any repository
//! write. The gate only answers allow/deny for one configured identity;
//! which operations consult it is the caller's policy.

use crate::use_cases::ServiceError;

/// Caller-supplied identity: an email-like name paired with a secret.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub secret: String,
}

impl AdminIdentity {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

struct AdminCredentials {
    email: String,
    secret: String,
}

/// Credential check for the one configured administrator.
pub struct AdminGate {
    credentials: Option<AdminCredentials>,
}

impl AdminGate {
    /// Gate with configured credentials. An empty email or secret counts
    /// as unconfigured.
    pub fn configured(email: impl Into<String>, secret: impl Into<String>) -> Self {
        let email = email.into();
        let secret = secret.into();
        if email.is_empty() || secret.is_empty() {
            return Self::unconfigured();
        }
        Self {
            credentials: Some(AdminCredentials { email, secret }),
        }
    }

    /// Gate with no administrator configured; every check reports a
    /// configuration error.
    pub fn unconfigured() -> Self {
        Self { credentials: None }
    }

    /// Checks an identity against the configured administrator.
    ///
    /// Exact, case-sensitive equality on both fields. Fails with
    /// `ServiceError::Configuration` when no administrator is configured,
    /// which is distinct from a denial.
    pub fn authorize(&self, identity: &AdminIdentity) -> Result<Decision, ServiceError> {
        let Some(credentials) = &self.credentials else {
            return Err(ServiceError::Configuration(
                "Administrator credentials are not configured".to_string(),
            ));
        };

        if identity.email == credentials.email && identity.secret == credentials.secret {
            Ok(Decision::Allow)
        } else {
            // Log the attempted email only; the secret must never appear.
            tracing::warn!(email = %identity.email, "admin authorization denied");
            Ok(Decision::Deny)
        }
    }

    /// Authorization as a guard: Deny becomes an error the caller can `?`.
    pub fn require(&self, identity: &AdminIdentity) -> Result<(), ServiceError> {
        match self.authorize(identity)? {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(ServiceError::Authorization),
        }
    }
}
