//! Shared types for the API layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::core_state::CoreState;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// Validated session id, injected into request extensions by the session
/// middleware after a successful store lookup.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);
