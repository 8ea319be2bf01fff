//! Route table for the slide deck, mounted at `/slides`.
//!
//! ```text
//! GET    /      -> list_slides
//! POST   /      -> create_slide
//! PUT    /      -> replace_slides  (bulk replace)
//! PUT    /{id}  -> update_slide
//! DELETE /{id}  -> delete_slide
//! ```
//!
//! The literal `/` route wins over the `/{id}` capture, so the bulk
//! replace and per-slide update never collide.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::slides;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(slides::list_slides)
                .post(slides::create_slide)
                .put(slides::replace_slides),
        )
        .route(
            "/{id}",
            put(slides::update_slide).delete(slides::delete_slide),
        )
}
