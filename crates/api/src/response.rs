//! Shared response types for API handlers.

use serde::Serialize;

/// Confirmation body for destructive operations: `{ "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
