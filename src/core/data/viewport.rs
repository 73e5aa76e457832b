use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidCenter { center: Complex },
    InvalidZoomFactor { factor: f64 },
    EmptyCanvas { size: CanvasSize },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(
                    f,
                    "viewport scale must be finite and positive, got {}",
                    scale
                )
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite, got ({}, {})",
                    center.real, center.imag
                )
            }
            Self::InvalidZoomFactor { factor } => {
                write!(
                    f,
                    "zoom factor {} would leave the viewport degenerate",
                    factor
                )
            }
            Self::EmptyCanvas { size } => {
                write!(
                    f,
                    "cannot move the viewport over an empty {}x{} canvas",
                    size.width, size.height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Maps canvas pixels onto the complex plane.
///
/// `scale` is the extent of the plane covered by the canvas along each axis;
/// `center` is the plane point drawn at the middle of the canvas. Each axis is
/// normalised by its own pixel dimension, so a non-square canvas stretches the
/// plane rather than cropping it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    center: Complex,
}

impl Viewport {
    pub fn new(scale: f64, center: Complex) -> Result<Self, ViewportError> {
        if !is_valid_scale(scale) {
            return Err(ViewportError::InvalidScale { scale });
        }

        if !center.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        Ok(Self { scale, center })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    /// Forward transform from a canvas-local pixel position to the plane.
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: ScreenPoint, size: CanvasSize) -> Complex {
        let width = f64::from(size.width);
        let height = f64::from(size.height);

        Complex {
            real: self.center.real + (pixel.x - width / 2.0) * (self.scale / width),
            imag: self.center.imag + (pixel.y - height / 2.0) * (self.scale / height),
        }
    }

    /// Inverse of [`Viewport::pixel_to_plane`].
    #[must_use]
    pub fn plane_to_pixel(&self, point: Complex, size: CanvasSize) -> ScreenPoint {
        let width = f64::from(size.width);
        let height = f64::from(size.height);

        ScreenPoint {
            x: (point.real - self.center.real) * (width / self.scale) + width / 2.0,
            y: (point.imag - self.center.imag) * (height / self.scale) + height / 2.0,
        }
    }

    /// Multiplies the scale by `factor` while keeping the plane point under
    /// `focus` (canvas-local pixels) fixed on screen.
    ///
    /// On error the viewport is left untouched.
    pub fn zoom_at(
        &mut self,
        factor: f64,
        focus: ScreenPoint,
        size: CanvasSize,
    ) -> Result<(), ViewportError> {
        if size.is_empty() {
            return Err(ViewportError::EmptyCanvas { size });
        }

        if !is_valid_scale(factor) {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let anchor = self.pixel_to_plane(focus, size);
        let scale = self.scale * factor;

        if !is_valid_scale(scale) {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let width = f64::from(size.width);
        let height = f64::from(size.height);
        let center = Complex {
            real: anchor.real - (focus.x - width / 2.0) * (scale / width),
            imag: anchor.imag - (focus.y - height / 2.0) * (scale / height),
        };

        if !center.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        self.scale = scale;
        self.center = center;

        Ok(())
    }

    /// Recenters the viewport at `anchor` shifted by a pixel `delta`.
    ///
    /// `anchor` is the center captured when the drag started, so replaying a
    /// whole gesture from its start never accumulates rounding drift.
    pub fn pan_from(
        &mut self,
        anchor: Complex,
        delta: ScreenPoint,
        size: CanvasSize,
    ) -> Result<(), ViewportError> {
        if size.is_empty() {
            return Err(ViewportError::EmptyCanvas { size });
        }

        let center = Complex {
            real: anchor.real - delta.x * (self.scale / f64::from(size.width)),
            imag: anchor.imag - delta.y * (self.scale / f64::from(size.height)),
        };

        if !center.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        self.center = center;

        Ok(())
    }
}

fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn viewport(scale: f64, real: f64, imag: f64) -> Viewport {
        Viewport::new(scale, Complex::new(real, imag)).unwrap()
    }

    #[test]
    fn test_new_rejects_degenerate_scale() {
        let center = Complex::new(0.0, 0.0);

        assert_eq!(
            Viewport::new(0.0, center),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            Viewport::new(-1.0, center),
            Err(ViewportError::InvalidScale { scale: -1.0 })
        );
        assert!(Viewport::new(f64::INFINITY, center).is_err());
        assert!(Viewport::new(f64::NAN, center).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_center() {
        assert!(Viewport::new(1.0, Complex::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_canvas_center_maps_to_viewport_center() {
        let view = viewport(3.0, -0.05, 0.005);
        let size = CanvasSize::new(800, 600);

        let point = view.pixel_to_plane(ScreenPoint::new(400.0, 300.0), size);

        assert_eq!(point, Complex::new(-0.05, 0.005));
    }

    #[test]
    fn test_canvas_corners_span_scale() {
        let view = viewport(2.0, 0.0, 0.0);
        let size = CanvasSize::new(100, 50);

        let top_left = view.pixel_to_plane(ScreenPoint::new(0.0, 0.0), size);
        let bottom_right = view.pixel_to_plane(ScreenPoint::new(100.0, 50.0), size);

        assert_eq!(top_left, Complex::new(-1.0, -1.0));
        assert_eq!(bottom_right, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_pixel_plane_round_trip() {
        let size = CanvasSize::new(640, 480);
        let views = [
            viewport(3.0, -0.05, 0.005),
            viewport(0.4, 1.5, -2.25),
            viewport(1e-6, -0.7435, 0.1314),
        ];

        for view in views {
            for &(px, py) in &[(0.0, 0.0), (639.0, 479.0), (320.0, 10.5), (17.0, 401.0)] {
                let pixel = ScreenPoint::new(px, py);
                let back = view.plane_to_pixel(view.pixel_to_plane(pixel, size), size);

                assert!(
                    (back.x - px).abs() < 1e-6 && (back.y - py).abs() < 1e-6,
                    "round trip of ({}, {}) gave ({}, {})",
                    px,
                    py,
                    back.x,
                    back.y
                );
            }
        }
    }

    #[test]
    fn test_zoom_keeps_focus_fixed() {
        let size = CanvasSize::new(300, 200);
        let focus = ScreenPoint::new(37.0, 160.0);

        for factor in [0.9, 1.1, 0.5, 2.0, 1e-3, 250.0] {
            let mut view = viewport(3.0, -0.05, 0.005);
            let before = view.pixel_to_plane(focus, size);

            view.zoom_at(factor, focus, size).unwrap();
            let after = view.pixel_to_plane(focus, size);

            assert!(approx_eq(view.scale(), 3.0 * factor));
            assert!(approx_eq(before.real, after.real), "factor {}", factor);
            assert!(approx_eq(before.imag, after.imag), "factor {}", factor);
        }
    }

    #[test]
    fn test_zoom_at_canvas_center_keeps_center() {
        let size = CanvasSize::new(100, 100);
        let mut view = viewport(1.0, 0.25, -0.5);

        view.zoom_at(0.5, ScreenPoint::new(50.0, 50.0), size).unwrap();

        assert_eq!(view.center(), Complex::new(0.25, -0.5));
        assert_eq!(view.scale(), 0.5);
    }

    #[test]
    fn test_zoom_rejects_invalid_factor_and_leaves_state() {
        let size = CanvasSize::new(100, 100);
        let focus = ScreenPoint::new(10.0, 10.0);
        let original = viewport(1.0, 0.0, 0.0);

        for factor in [0.0, -1.1, f64::NAN, f64::INFINITY] {
            let mut view = original;
            assert!(matches!(
                view.zoom_at(factor, focus, size),
                Err(ViewportError::InvalidZoomFactor { .. })
            ));
            assert_eq!(view, original);
        }
    }

    #[test]
    fn test_zoom_rejects_scale_underflow() {
        let size = CanvasSize::new(100, 100);
        let mut view = viewport(f64::MIN_POSITIVE, 0.0, 0.0);

        let result = view.zoom_at(1e-300, ScreenPoint::new(0.0, 0.0), size);

        assert!(result.is_err());
        assert_eq!(view.scale(), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_zoom_on_empty_canvas_is_rejected() {
        let size = CanvasSize::new(0, 100);
        let mut view = viewport(1.0, 0.0, 0.0);

        assert_eq!(
            view.zoom_at(0.9, ScreenPoint::new(0.0, 0.0), size),
            Err(ViewportError::EmptyCanvas { size })
        );
    }

    #[test]
    fn test_pan_replays_from_anchor() {
        let size = CanvasSize::new(100, 100);
        let mut view = viewport(1.0, 0.0, 0.0);
        let anchor = view.center();

        view.pan_from(anchor, ScreenPoint::new(10.0, 0.0), size).unwrap();
        assert!(approx_eq(view.center().real, -0.1));

        view.pan_from(anchor, ScreenPoint::new(20.0, 0.0), size).unwrap();
        assert!(approx_eq(view.center().real, -0.2));
        assert_eq!(view.center().imag, 0.0);
    }

    #[test]
    fn test_pan_uses_each_axis_dimension() {
        let size = CanvasSize::new(200, 50);
        let mut view = viewport(2.0, 1.0, 1.0);

        view.pan_from(view.center(), ScreenPoint::new(-100.0, 25.0), size).unwrap();

        assert!(approx_eq(view.center().real, 2.0));
        assert!(approx_eq(view.center().imag, 0.0));
    }
}
