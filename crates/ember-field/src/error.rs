use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a particle field.
///
/// Runtime failures (a missing drawing context, odd viewport sizes) are not
/// errors: the animator degrades to drawing nothing instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Particle settings outside their valid ranges.
    #[error("invalid field settings: {0}")]
    InvalidSettings(String),

    /// Raster scale that is zero, negative or not finite.
    #[error("invalid surface scale {0}, expected a positive number")]
    InvalidScale(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::InvalidSettings("radius_min must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid field settings"));
        assert!(msg.contains("radius_min"));
        assert!(format!("{}", Error::InvalidScale(-1.0)).contains("-1"));
    }
}
