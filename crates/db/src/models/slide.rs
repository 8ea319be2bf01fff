//! Slide model and DTOs.
//!
//! The deck is a flat, single-table model: every slide carries its own
//! display position and there are no relationships to other entities.

use serde::{Deserialize, Serialize};
use slidedeck_core::types::{SlideId, Timestamp};
use sqlx::FromRow;

/// Presentation style tag for a slide.
///
/// Mirrors the `slide_layout` Postgres enum, so the four-value invariant
/// holds at both layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "slide_layout", rename_all = "kebab-case")]
pub enum SlideLayout {
    Title,
    #[default]
    Content,
    TwoColumn,
    Code,
}

/// A row from the `slides` table.
///
/// `display_order` is advisory: duplicates are allowed and ties break by
/// `created_at` when listing. It is serialized as `"order"`, which is an
/// SQL keyword and therefore renamed at the column level.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub content: String,
    pub layout: SlideLayout,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new slide.
///
/// Every field is optional; absent fields take the entity defaults
/// (`"Untitled Slide"`, `""`, `content`, `0`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSlide {
    pub title: Option<String>,
    pub content: Option<String>,
    pub layout: Option<SlideLayout>,
    #[serde(rename = "order")]
    pub display_order: Option<i32>,
}

/// DTO for partially updating a slide.
///
/// `None` means "field omitted -- keep the stored value". An explicit empty
/// string or zero arrives as `Some` and is persisted as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSlide {
    pub title: Option<String>,
    pub content: Option<String>,
    pub layout: Option<SlideLayout>,
    #[serde(rename = "order")]
    pub display_order: Option<i32>,
}

/// One entry in a bulk-replace payload.
///
/// A provided `id` is kept; entries without one get a fresh v4 id. There is
/// no `order` field: the display position is always reassigned from the
/// entry's position in the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceSlide {
    pub id: Option<SlideId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub layout: Option<SlideLayout>,
}

/// Payload for `PUT /slides`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceDeckRequest {
    pub slides: Vec<ReplaceSlide>,
}
