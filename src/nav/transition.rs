// Progress-to-style interpolation for the screen card (pure functions)

use eframe::egui::Rect;

/// Card scale when the drawer is fully closed / fully open
pub const SCALE_CLOSED: f32 = 1.0;
pub const SCALE_OPEN: f32 = 0.8;

/// Card corner radius when the drawer is fully closed / fully open
pub const RADIUS_CLOSED: f32 = 0.0;
pub const RADIUS_OPEN: f32 = 16.0;

/// Derived visual properties of the screen card for a given drawer progress.
///
/// This is a continuous declarative mapping, re-derived every frame from the
/// framework-owned progress value. There is no start/stop/cancel API: the
/// drawer's own open/close tween is the only driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub scale: f32,
    pub corner_radius: f32,
}

impl StackTransform {
    /// Derive the card transform from the drawer open fraction.
    ///
    /// Progress outside [0, 1] clamps to the boundary values: the card never
    /// overshoots past fully-closed or fully-open.
    pub fn from_progress(progress: f32) -> Self {
        let t = progress.clamp(0.0, 1.0);
        Self {
            scale: lerp(SCALE_CLOSED, SCALE_OPEN, t),
            corner_radius: lerp(RADIUS_CLOSED, RADIUS_OPEN, t),
        }
    }

    /// Shrink a rect about its center by the card scale
    pub fn apply_to(&self, rect: Rect) -> Rect {
        Rect::from_center_size(rect.center(), rect.size() * self.scale)
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_closed_transform() {
        let t = StackTransform::from_progress(0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.corner_radius, 0.0);
    }

    #[test]
    fn test_open_transform() {
        let t = StackTransform::from_progress(1.0);
        assert_eq!(t.scale, 0.8);
        assert_eq!(t.corner_radius, 16.0);
    }

    #[test]
    fn test_midpoint_transform() {
        // Linear interpolation: halfway open means halfway scaled/rounded
        let t = StackTransform::from_progress(0.5);
        assert_eq!(t.scale, 0.9);
        assert_eq!(t.corner_radius, 8.0);
    }

    #[test]
    fn test_progress_clamps_at_boundaries() {
        // No extrapolation beyond [0, 1]
        assert_eq!(
            StackTransform::from_progress(-0.5),
            StackTransform::from_progress(0.0)
        );
        assert_eq!(
            StackTransform::from_progress(1.5),
            StackTransform::from_progress(1.0)
        );
    }

    #[test]
    fn test_apply_scales_about_center() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 200.0));
        let card = StackTransform::from_progress(1.0).apply_to(rect);

        assert_eq!(card.center(), rect.center());
        assert_eq!(card.size(), vec2(80.0, 160.0));
    }
}
