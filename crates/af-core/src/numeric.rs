use crate::CoreError;

/// Floating point type used for positions and costs.
pub type Real = f64;

/// Upper bound of every 0..=100 score.
pub const SCORE_MAX: i64 = 100;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Clamp a raw (possibly negative or oversized) score into `0..=100`.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(0, SCORE_MAX) as u32
}
