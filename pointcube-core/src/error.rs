/// Errors raised while building renderer configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must be at least 1")]
    Zero { name: &'static str },
    #[error("grid of {per_axis} points per axis exceeds the limit of {max}")]
    GridTooDense { per_axis: f64, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that a geometry parameter is usable as a length or scale
pub(crate) fn positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { name, value })
    }
}
