//! CMS domain state and session backend integration

use axum::extract::FromRef;
use khabar_auth::SessionBackend;

use crate::upstream::CmsClient;

/// Application state for the CMS domain
#[derive(Debug, Clone)]
pub struct CmsState {
    pub sessions: SessionBackend,
    pub cms: CmsClient,
}

impl FromRef<CmsState> for SessionBackend {
    fn from_ref(state: &CmsState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<CmsState> for CmsClient {
    fn from_ref(state: &CmsState) -> Self {
        state.cms.clone()
    }
}
