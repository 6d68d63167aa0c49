//! WebSocket infrastructure for the live preview channel.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler used by Axum routes.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::preview_ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
