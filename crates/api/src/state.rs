use std::sync::Arc;

use tokio::sync::Mutex;

use skinsmith_core::engine::SkinEngine;
use skinsmith_core::error::CoreError;
use skinsmith_core::preview::PreviewSession;
use skinsmith_core::steam::SteamEnv;
use skinsmith_core::store::ThemeStore;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skinsmith_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// On-disk theme store.
    pub store: Arc<ThemeStore>,
    /// Steam-dependent services; `None` when no installation was found at
    /// startup, in which case the millennium endpoints answer 500.
    pub millennium: Option<MillenniumState>,
    /// WebSocket connection registry (live preview clients).
    pub ws_manager: Arc<WsManager>,
}

/// Services bound to a discovered Steam installation.
///
/// Constructed once at startup and handed to the router -- there is no
/// lazily created global.
#[derive(Clone)]
pub struct MillenniumState {
    pub env: Arc<SteamEnv>,
    pub engine: Arc<SkinEngine>,
    /// The single live preview session; the mutex serializes start,
    /// update, and stop calls from HTTP and WebSocket alike.
    pub preview: Arc<Mutex<PreviewSession>>,
}

impl MillenniumState {
    pub fn new(env: SteamEnv) -> Self {
        let engine = Arc::new(SkinEngine::for_env(&env));
        Self {
            env: Arc::new(env),
            preview: Arc::new(Mutex::new(PreviewSession::new(Arc::clone(&engine)))),
            engine,
        }
    }
}

impl AppState {
    /// The millennium services, or the structured environment error
    /// when Steam was never found.
    pub fn millennium(&self) -> AppResult<MillenniumState> {
        self.millennium
            .clone()
            .ok_or(AppError::Core(CoreError::EnvironmentNotFound))
    }
}
