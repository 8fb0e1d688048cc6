//! Structural checks for compact JWT tokens.
//!
//! Only the segment count is inspected here. Signature and claims
//! verification happen inside the proxy once it talks to the runner.

/// Number of dot-separated segments in a compact JWT (`header.payload.signature`).
pub const TOKEN_SEGMENT_COUNT: usize = 3;

/// Returns `true` when `token` splits on `.` into exactly three segments.
///
/// Segments may be empty; `".."` passes while `""` and `"a.b"` do not.
pub fn validate_token_format(token: &str) -> bool {
    token.split('.').count() == TOKEN_SEGMENT_COUNT
}
