//! Slider ↔ beta nonlinear mapping.
//!
//! A linear control over [0, 100] is mapped onto beta logarithmically in
//! `beta - 1`, so equal slider steps give equal multiplicative changes in
//! `beta - 1`. Both ends are flat clamped regions: every beta at or below
//! 1.02 reads as 0, every beta at or above 30.0 reads as 100, and the round
//! trip is only an inverse strictly between them.
use crate::constants::{
    BETA_MAX, BETA_MIN, SLIDER_MAX, SLIDER_MIN, SLIDER_SPAN_HIGH, SLIDER_SPAN_LOW,
};
use crate::error::{Result, TildeError};
use crate::params::Beta;

/// Width of the slider range in log space: ln(29) - ln(0.02).
#[inline]
fn log_span() -> f64 {
    SLIDER_SPAN_HIGH.ln() - SLIDER_SPAN_LOW.ln()
}

/// Map a beta value to a slider position in [0, 100].
///
/// Accepts any real so presentation code can feed it unvalidated values;
/// out-of-range inputs land on the clamped ends. NaN is an error.
pub fn beta_to_slider(beta: f64) -> Result<f64> {
    if beta.is_nan() {
        return Err(TildeError::BetaOutOfRange { value: beta });
    }
    if beta <= BETA_MIN {
        return Ok(SLIDER_MIN);
    }
    if beta >= BETA_MAX {
        return Ok(SLIDER_MAX);
    }
    Ok(SLIDER_MAX * ((beta - 1.0).ln() - SLIDER_SPAN_LOW.ln()) / log_span())
}

/// Map a slider position to beta. Positions outside [0, 100] are clamped first.
pub fn slider_to_beta(slider: f64) -> Result<Beta> {
    if slider.is_nan() {
        return Err(TildeError::SliderNotFinite);
    }
    let s = slider.clamp(SLIDER_MIN, SLIDER_MAX);
    let raw = 1.0 + (SLIDER_SPAN_LOW.ln() + (s / SLIDER_MAX) * log_span()).exp();
    Beta::clamped(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(beta_to_slider(BETA_MIN).unwrap(), 0.0);
        assert_eq!(beta_to_slider(BETA_MAX).unwrap(), 100.0);
    }

    #[test]
    fn outside_range_clamps() {
        assert_eq!(beta_to_slider(1.0).unwrap(), 0.0);
        assert_eq!(beta_to_slider(-2.0).unwrap(), 0.0);
        assert_eq!(beta_to_slider(1e9).unwrap(), 100.0);
        assert_eq!(beta_to_slider(f64::INFINITY).unwrap(), 100.0);
    }

    #[test]
    fn slider_ends_map_to_beta_bounds() {
        assert_relative_eq!(slider_to_beta(0.0).unwrap().value(), BETA_MIN, epsilon = 1e-12);
        assert_relative_eq!(slider_to_beta(100.0).unwrap().value(), BETA_MAX, epsilon = 1e-12);
        assert_relative_eq!(slider_to_beta(-50.0).unwrap().value(), BETA_MIN, epsilon = 1e-12);
        assert_relative_eq!(slider_to_beta(150.0).unwrap().value(), BETA_MAX, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_inside_range() {
        for &beta in &[1.03, 1.1, 1.5, 2.0, 2.5, 4.0, 10.0, 29.9] {
            let back = slider_to_beta(beta_to_slider(beta).unwrap()).unwrap();
            assert_relative_eq!(back.value(), beta, max_relative = 1e-6);
        }
    }

    #[test]
    fn slider_is_monotonic() {
        let mut prev = beta_to_slider(1.021).unwrap();
        let mut beta = 1.021;
        while beta < 29.9 {
            beta *= 1.05;
            let s = beta_to_slider(beta).unwrap();
            assert!(s > prev, "slider must increase with beta");
            prev = s;
        }
    }

    #[test]
    fn midpoint_is_geometric_mean_of_spans() {
        // Halfway along the slider, beta - 1 = sqrt(0.02 * 29)
        let mid = slider_to_beta(50.0).unwrap().value();
        assert_relative_eq!(mid - 1.0, (0.02f64 * 29.0).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn nan_rejected() {
        assert!(beta_to_slider(f64::NAN).is_err());
        assert_eq!(slider_to_beta(f64::NAN), Err(TildeError::SliderNotFinite));
    }
}
