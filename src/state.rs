use crate::auth::JwtService;
use crate::store::Store;
use std::sync::Arc;

/// 라우터 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt: JwtService) -> Self {
        Self {
            store,
            jwt: Arc::new(jwt),
        }
    }
}
