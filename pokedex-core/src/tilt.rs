//! Hover tilt: pointer position over an element to rotation angles
//!
//! Stateless. Recompute on every pointer move and use [`Tilt::default`]
//! when the pointer leaves the element.

/// Default maximum tilt in degrees
pub const DEFAULT_MAX_TILT_DEG: f32 = 15.0;

/// Rotation to apply to the hovered element, in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis; positive tips the top away
    pub rotate_x: f32,
    /// Rotation around the vertical axis; positive turns the right edge away
    pub rotate_y: f32,
}

/// Element bounds in the same coordinate space as the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Compute the tilt for a pointer at `(px, py)` over `bounds`
///
/// The pointer is normalized to `-1.0..=1.0` around the element center and
/// clamped, so a pointer outside the element tilts no further than its edge.
pub fn tilt(px: f32, py: f32, bounds: Bounds, max_deg: f32) -> Tilt {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Tilt::default();
    }

    let half_w = bounds.width / 2.0;
    let half_h = bounds.height / 2.0;
    let nx = ((px - (bounds.x + half_w)) / half_w).clamp(-1.0, 1.0);
    let ny = ((py - (bounds.y + half_h)) / half_h).clamp(-1.0, 1.0);

    Tilt {
        rotate_x: -ny * max_deg,
        rotate_y: nx * max_deg,
    }
}
