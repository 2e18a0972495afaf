//! Cursor tracking
//!
//! Converts absolute pointer coordinates into a damped head orientation.
//! Smoothing is applied per pointer-move event, not per frame, so the head
//! lags organically behind the cursor instead of snapping.

/// On-screen bounding box of the widget, in the pointer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetRect {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Head yaw limit in radians. The head never leaves this envelope.
pub const YAW_LIMIT: f32 = 0.6;
/// Head pitch limit in radians.
pub const PITCH_LIMIT: f32 = 0.4;
/// Target yaw per unit of normalized horizontal cursor offset.
pub const YAW_PER_UNIT: f32 = 0.5;
/// Target pitch per unit of normalized vertical cursor offset.
pub const PITCH_PER_UNIT: f32 = 0.3;
/// Exponential smoothing factor applied per pointer-move event.
pub const SMOOTHING: f32 = 0.1;

/// Damped head steering toward the last known pointer position.
#[derive(Debug, Clone)]
pub struct CursorTracker {
    rect: WidgetRect,
    yaw: f32,
    pitch: f32,
}

impl CursorTracker {
    #[must_use]
    pub fn new(rect: WidgetRect) -> Self {
        Self {
            rect,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Updates the widget's on-screen rect (host layout change).
    pub fn set_rect(&mut self, rect: WidgetRect) {
        self.rect = rect;
    }

    #[must_use]
    pub fn rect(&self) -> WidgetRect {
        self.rect
    }

    /// Current head yaw (rotation around Y), clamped.
    #[inline]
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current head pitch (rotation around X), clamped.
    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Feeds one pointer-move event in absolute coordinates.
    ///
    /// The offset is normalized against the widget rect to [-1, 1] (values
    /// outside the rect exceed that range), scaled to target angles, damped
    /// and clamped. The clamp holds for arbitrarily distant pointers.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        let nx = (px - self.rect.left) / self.rect.width * 2.0 - 1.0;
        let ny = -((py - self.rect.top) / self.rect.height) * 2.0 + 1.0;

        let target_yaw = nx * YAW_PER_UNIT;
        let target_pitch = ny * PITCH_PER_UNIT;

        self.yaw += (target_yaw - self.yaw) * SMOOTHING;
        self.pitch += (target_pitch - self.pitch) * SMOOTHING;

        self.yaw = self.yaw.clamp(-YAW_LIMIT, YAW_LIMIT);
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> CursorTracker {
        CursorTracker::new(WidgetRect::new(100.0, 200.0, 120.0, 120.0))
    }

    #[test]
    fn center_of_rect_targets_zero() {
        let mut t = tracker();
        for _ in 0..200 {
            t.pointer_moved(160.0, 260.0);
        }
        assert!(t.yaw().abs() < 1e-3);
        assert!(t.pitch().abs() < 1e-3);
    }

    #[test]
    fn smoothing_moves_a_fraction_per_event() {
        let mut t = tracker();
        // Right edge: nx = 1, target yaw = 0.5; one event covers 10%.
        t.pointer_moved(220.0, 260.0);
        assert!((t.yaw() - 0.05).abs() < 1e-6);
    }
}
