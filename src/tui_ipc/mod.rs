//! Inter-process communication between the proof engine and the panel.
//!
//! This module provides:
//! - `protocol`: Shared types for serialization over Unix socket
//! - `tui_endpoint`: Panel-side client connection

mod protocol;
mod tui_endpoint;

pub use protocol::{socket_path, Command, Message};
pub use tui_endpoint::{spawn_socket_handler, TuiIpcSocketEndpoint};
