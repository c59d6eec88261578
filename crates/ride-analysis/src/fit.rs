//! Least-squares line fits

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// First-degree polynomial `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Undefined fit, returned when there is not enough data
    pub const UNDEFINED: LinearFit = LinearFit {
        slope: f64::NAN,
        intercept: f64::NAN,
    };

    /// Ordinary least-squares fit of `y` against `x`.
    ///
    /// Fewer than two points, or no spread in `x`, yields `UNDEFINED`.
    /// Any NaN in the inputs propagates into the result.
    pub fn least_squares(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        if n < 2 {
            return Self::UNDEFINED;
        }
        let (x, y) = (&x[..n], &y[..n]);

        let mean_x = x.iter().sum::<f64>() / n as f64;
        let mean_y = y.iter().sum::<f64>() / n as f64;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - mean_x;
            sxx += dx * dx;
            sxy += dx * (yi - mean_y);
        }

        if sxx == 0.0 {
            return Self::UNDEFINED;
        }

        let slope = sxy / sxx;
        Self {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    /// Evaluate the line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Whether both coefficients are finite
    pub fn is_defined(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Centered rolling least-squares slope of `y` against `x`.
///
/// The window for row `i` starts at `i - window / 2` and spans `window`
/// samples. Rows closer than `window / 2` to either end are NaN.
pub fn rolling_slope(x: &[f64], y: &[f64], window: usize) -> Result<Vec<f64>, AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if window < 2 {
        return Err(AnalysisError::InvalidWindow(window));
    }

    let n = x.len();
    let half = window / 2;
    let mut slopes = vec![f64::NAN; n];
    if n < 2 * half + 1 {
        return Ok(slopes);
    }

    for (i, slope) in slopes.iter_mut().enumerate().take(n - half).skip(half) {
        let lo = i - half;
        let hi = lo + window;
        *slope = LinearFit::least_squares(&x[lo..hi], &y[lo..hi]).slope;
    }

    Ok(slopes)
}
