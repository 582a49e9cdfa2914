//! The engine's narrow, explicit error taxonomy.
//!
//! Most caller-contract violations (non-convex input, non-coplanar
//! vertices) are not cheap to detect and are left as best-effort per the
//! engine's design notes; `CsgError` only covers the one invariant that is
//! cheap to check at construction time.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsgError {
    #[error("polygon needs at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },
}
