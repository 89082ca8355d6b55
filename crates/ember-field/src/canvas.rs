//! Drawing abstractions the animator paints through.

use ember_core::Rgba;

use crate::gradient::RadialGradient;
use crate::viewport::SurfaceSize;

/// A 2D drawing context.
pub trait Canvas {
    /// Fill an axis-aligned rectangle, compositing `color` over what is
    /// already there.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Fill the circle at `(cx, cy)` with `radius` using `gradient`.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, gradient: &RadialGradient);
}

/// A resizable drawing surface that may hand out a 2D context.
pub trait Surface {
    type Context: Canvas + ?Sized;

    /// Current logical dimensions.
    fn size(&self) -> SurfaceSize;

    /// Change the logical dimensions.
    fn resize(&mut self, size: SurfaceSize);

    /// The 2D drawing context, if this surface can provide one.
    fn context_2d(&mut self) -> Option<&mut Self::Context>;
}
