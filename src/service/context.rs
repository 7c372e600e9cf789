use crate::service::error::ServiceError;
use ledger_store::UserId;

/// Identity resolved by the caller's authentication layer.
///
/// An empty context means no identity was resolved; every service
/// operation rejects it before touching the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    user_id: Option<UserId>,
}

impl RequestContext {
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn require_user(&self) -> Result<UserId, ServiceError> {
        self.user_id.ok_or(ServiceError::Unauthorized)
    }
}
