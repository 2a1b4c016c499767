//! Source of the current session's principal

use std::sync::RwLock;

use crate::domain::models::Principal;
use crate::shared::errors::AuthError;

/// Supplies the signed-in user, if any, and ends the session on request.
///
/// Session teardown (cookie invalidation, redirect) belongs to the implementation,
/// never to the shell.
pub trait AuthenticatedPrincipal: Send + Sync {
    fn current(&self) -> Result<Option<Principal>, AuthError>;

    fn logout(&self) -> Result<(), AuthError>;
}

/// In-process principal source for a single session
#[derive(Debug, Default)]
pub struct SessionPrincipal {
    principal: RwLock<Option<Principal>>,
}

impl SessionPrincipal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(principal: Principal) -> Self {
        Self {
            principal: RwLock::new(Some(principal)),
        }
    }
}

impl AuthenticatedPrincipal for SessionPrincipal {
    fn current(&self) -> Result<Option<Principal>, AuthError> {
        self.principal
            .read()
            .map(|slot| slot.clone())
            .map_err(|_| AuthError::SessionPoisoned)
    }

    fn logout(&self) -> Result<(), AuthError> {
        let mut slot = self.principal.write().map_err(|_| AuthError::SessionPoisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;

    #[test]
    fn test_anonymous_session() {
        let session = SessionPrincipal::anonymous();
        assert_eq!(session.current().unwrap(), None);
    }

    #[test]
    fn test_signed_in_then_logout() {
        let user = Principal::new("user", "John Normal").with_role(Role::User);
        let session = SessionPrincipal::signed_in(user.clone());

        assert_eq!(session.current().unwrap(), Some(user));

        session.logout().unwrap();
        assert_eq!(session.current().unwrap(), None);
    }
}
