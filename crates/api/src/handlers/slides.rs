//! Handlers for the slide deck CRUD surface.
//!
//! Store failures are caught here, logged, and reported with a fixed
//! per-operation message; internals are never exposed to the client.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use slidedeck_core::error::CoreError;
use slidedeck_core::types::SlideId;
use slidedeck_db::models::slide::{CreateSlide, ReplaceDeckRequest, UpdateSlide};
use slidedeck_db::repositories::SlideRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /slides
///
/// List the whole deck ordered by `order` ascending. An empty store is
/// seeded with the default deck first, then re-read.
pub async fn list_slides(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slides = SlideRepo::list_ordered(&state.pool)
        .await
        .map_err(AppError::db("Failed to fetch slides"))?;

    if !slides.is_empty() {
        return Ok(Json(slides));
    }

    tracing::info!("No slides found, seeding default deck");
    SlideRepo::seed_default_deck(&state.pool)
        .await
        .map_err(AppError::db("Failed to fetch slides"))?;

    let slides = SlideRepo::list_ordered(&state.pool)
        .await
        .map_err(AppError::db("Failed to fetch slides"))?;

    tracing::info!(count = slides.len(), "Default deck seeded");

    Ok(Json(slides))
}

/// POST /slides
///
/// Create a new slide. Absent fields take the entity defaults.
pub async fn create_slide(
    State(state): State<AppState>,
    Json(input): Json<CreateSlide>,
) -> AppResult<impl IntoResponse> {
    let slide = SlideRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::db("Failed to create slide"))?;

    tracing::info!(slide_id = %slide.id, title = %slide.title, "Slide created");

    Ok((StatusCode::CREATED, Json(slide)))
}

/// PUT /slides/{id}
///
/// Partially update a slide. Only fields present in the request are
/// merged; an explicit empty string or zero is persisted as-is.
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateSlide>,
) -> AppResult<impl IntoResponse> {
    let slide_id = parse_slide_id(&id)?;

    let slide = SlideRepo::update(&state.pool, slide_id, &input)
        .await
        .map_err(AppError::db("Failed to update slide"))?
        .ok_or_else(|| slide_not_found(&id))?;

    tracing::info!(slide_id = %slide.id, "Slide updated");

    Ok(Json(slide))
}

/// DELETE /slides/{id}
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let slide_id = parse_slide_id(&id)?;

    let deleted = SlideRepo::delete(&state.pool, slide_id)
        .await
        .map_err(AppError::db("Failed to delete slide"))?;

    if !deleted {
        return Err(slide_not_found(&id));
    }

    tracing::info!(slide_id = %slide_id, "Slide deleted");

    Ok(Json(MessageResponse {
        message: "Slide deleted successfully",
    }))
}

/// PUT /slides
///
/// Replace the whole deck in one transaction. `order` is reassigned from
/// payload position; provided ids are kept, missing ids are generated.
/// A body that is not an object with a `slides` array is a 400.
pub async fn replace_slides(
    State(state): State<AppState>,
    payload: Result<Json<ReplaceDeckRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) =
        payload.map_err(|_| AppError::BadRequest("Invalid slides data".to_string()))?;

    let slides = SlideRepo::replace_all(&state.pool, &input.slides)
        .await
        .map_err(AppError::db("Failed to update slides"))?;

    tracing::info!(count = slides.len(), "Deck replaced");

    Ok(Json(slides))
}

/// A syntactically invalid id can never match a stored slide, so it maps
/// to the same NotFound as an unknown one.
fn parse_slide_id(raw: &str) -> Result<SlideId, AppError> {
    raw.parse().map_err(|_| slide_not_found(raw))
}

fn slide_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Slide",
        id: id.to_string(),
    })
}
