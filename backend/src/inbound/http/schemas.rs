//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here describe their wire shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for the failure envelope rendered from
/// [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false` for failures.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message safe to show to visitors.
    #[schema(example = "Invalid email format")]
    error: String,
}
