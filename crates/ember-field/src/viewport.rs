//! Surface dimensions and the capability that supplies them.

/// Logical width and height of a drawing surface.
///
/// Values are applied exactly as the host reports them; zero or negative
/// sizes (a hidden window, for instance) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Supplies the current viewport size to the animator.
pub trait SurfaceSizeProvider {
    /// Current viewport dimensions.
    fn surface_size(&self) -> SurfaceSize;
}

impl SurfaceSizeProvider for SurfaceSize {
    fn surface_size(&self) -> SurfaceSize {
        *self
    }
}
