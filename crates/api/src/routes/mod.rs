//! Route tables.
//!
//! Pure static dispatch: each submodule maps method+path pairs to handler
//! functions. Middleware lives in [`crate::router`], not here.

pub mod health;
pub mod slides;
