//! Identity boundary. The external provider hands over an opaque
//! authenticated-actor identifier; credentials are never inspected here.
//! Sessions are passed explicitly into whatever needs them rather than read
//! from ambient context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated actor. Existence of a session implies authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub actor_id: Uuid,
}

pub trait IdentityProvider: Send + Sync {
    /// The current session, or `None` for anonymous actors.
    fn session(&self) -> Option<AuthSession>;

    fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// Fixed identity for embedding and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIdentity(pub Option<AuthSession>);

impl StaticIdentity {
    pub fn signed_in(actor_id: Uuid) -> Self {
        Self(Some(AuthSession { actor_id }))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn session(&self) -> Option<AuthSession> {
        self.0
    }
}
