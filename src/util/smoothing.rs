//! Scalar smoothing helpers shared by the FOV and car-pitch trackers.

/// Move `from` toward `to` by `fraction`, clamped to `[0, 1]`.
///
/// A fraction of 1 or more lands exactly on `to`, so large frame times never
/// overshoot.
#[inline]
#[must_use]
pub fn lerp_to(from: f32, to: f32, fraction: f32) -> f32 {
    let t = fraction.clamp(0.0, 1.0);
    if t >= 1.0 {
        return to;
    }
    from + (to - from) * t
}

/// Ratio `value / scale`, or `None` when `scale` cannot divide safely.
///
/// Tunables configured as zero or negative mean "disabled"; callers pick the
/// fallback behaviour.
#[inline]
#[must_use]
pub fn safe_ratio(value: f32, scale: f32) -> Option<f32> {
    (scale > 0.0 && scale.is_finite()).then(|| value / scale)
}

/// Clamp `value` between two bounds given in either order.
///
/// Hand-edited presets can invert a min/max pair; `f32::clamp` would panic.
#[inline]
#[must_use]
pub fn clamp_ordered(value: f32, a: f32, b: f32) -> f32 {
    value.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_to_endpoints() {
        assert_eq!(lerp_to(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp_to(2.0, 6.0, 0.5), 4.0);
        assert_eq!(lerp_to(2.0, 6.0, 1.0), 6.0);
    }

    #[test]
    fn lerp_to_clamps_fraction() {
        assert_eq!(lerp_to(2.0, 6.0, 3.0), 6.0);
        assert_eq!(lerp_to(2.0, 6.0, -1.0), 2.0);
    }

    #[test]
    fn clamp_ordered_accepts_inverted_bounds() {
        assert_eq!(clamp_ordered(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp_ordered(5.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp_ordered(-5.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn safe_ratio_rejects_non_positive_scale() {
        assert_eq!(safe_ratio(5.0, 0.0), None);
        assert_eq!(safe_ratio(5.0, -2.0), None);
        assert_eq!(safe_ratio(5.0, f32::INFINITY), None);
        assert_eq!(safe_ratio(5.0, 10.0), Some(0.5));
    }
}
