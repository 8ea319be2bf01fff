//! Request handlers.
//!
//! Handlers translate HTTP requests into repository calls on
//! `slidedeck_db` and map outcomes to responses via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod slides;
