//! Presence rule for optional numeric fields.
//!
//! Any falsy number counts as missing: a sensitivity or specificity of
//! exactly `0` behaves like an absent value. Every engine operation goes
//! through [`truthy`] so the rule lives in one place.

/// Returns the value only when it is present and truthy.
///
/// `None`, `0.0`, `-0.0`, and `NaN` all map to `None`.
#[inline]
pub fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
