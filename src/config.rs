use crate::error::{ModelError, ModelResult};

/// Additive (Laplace) pseudo-count applied to every class and every pixel outcome.
pub const LAPLACE: f64 = 1.0;

/// Number of digit classes, 0 through 9.
pub const NUM_DIGITS: usize = 10;

/// Pixels are either unshaded (0) or shaded (1).
pub const NUM_SHADES: usize = 2;

/// Smoothing parameters used when turning raw counts into probabilities.
///
/// Only the pseudo-count is adjustable; the class and shade counts are fixed by
/// the corpus format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig {
    pseudo_count: f64,
    num_classes: usize,
    num_shades: usize,
}

impl SmoothingConfig {
    /// Rejects a pseudo-count that is not a finite positive number.
    pub fn with_pseudo_count(pseudo_count: f64) -> ModelResult<Self> {
        if !pseudo_count.is_finite() || pseudo_count <= 0.0 {
            return Err(ModelError::InvalidSmoothing(pseudo_count));
        }
        Ok(SmoothingConfig {
            pseudo_count,
            ..Self::default()
        })
    }

    pub fn pseudo_count(&self) -> f64 {
        self.pseudo_count
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn num_shades(&self) -> usize {
        self.num_shades
    }

    /// P(class) with the pseudo-count spread over every class.
    pub fn prior(&self, class_total: usize, total: usize) -> f64 {
        (self.pseudo_count + class_total as f64)
            / (self.num_classes as f64 * self.pseudo_count + total as f64)
    }

    /// P(pixel = shade | class) with the pseudo-count spread over every shade.
    pub fn likelihood(&self, count: usize, class_total: usize) -> f64 {
        (self.pseudo_count + count as f64)
            / (self.num_shades as f64 * self.pseudo_count + class_total as f64)
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        SmoothingConfig {
            pseudo_count: LAPLACE,
            num_classes: NUM_DIGITS,
            num_shades: NUM_SHADES,
        }
    }
}
