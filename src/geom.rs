//! Rectangle math shared by the animation engine and the renderer.

pub use glam::Vec2;

/// Floating-point destination rectangle handed to the renderer once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Integer rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A `size` × `size` box centered on the origin.
    ///
    /// Sprites are described in local space this way and then placed by the
    /// animation's anchor point.
    pub fn centered_square(size: f32) -> Self {
        Self::new(-size * 0.5, -size * 0.5, size, size)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Snap to pixels by flooring every component.
    pub fn to_pixels(&self) -> PixelRect {
        PixelRect {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
            w: self.w.floor() as i32,
            h: self.h.floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_is_centered_on_origin() {
        let r = Rect::centered_square(256.0);
        assert_eq!(r, Rect::new(-128.0, -128.0, 256.0, 256.0));
        assert_eq!(r.center(), Vec2::ZERO);
        assert_eq!(r.bottom(), 128.0);
    }

    #[test]
    fn to_pixels_floors_negative_values() {
        let r = Rect::new(-0.5, 10.9, 3.99, 0.1);
        assert_eq!(
            r.to_pixels(),
            PixelRect {
                x: -1,
                y: 10,
                w: 3,
                h: 0
            }
        );
    }
}
