/// Domain-level errors, independent of the HTTP layer.
///
/// `id` is the raw identifier from the request: a syntactically invalid id
/// can never match a stored slide, so it produces the same `NotFound` as an
/// unknown one.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}
