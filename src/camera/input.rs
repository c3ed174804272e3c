//! Look-input buffering between camera ticks.
//!
//! Input events can arrive several times per frame. [`LookInput`] folds them
//! into one [`LookDelta`] that the controller drains once per tick.

use glam::Vec2;

/// Accumulated look delta in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookDelta {
    /// Yaw change; positive turns left.
    pub yaw: f32,
    /// Pitch change; positive looks down.
    pub pitch: f32,
}

impl LookDelta {
    /// No input.
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    /// Construct from yaw and pitch degrees.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Whether this delta carries any input.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.yaw.abs() + self.pitch.abs() > 0.0
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite()
    }
}

impl std::ops::Add for LookDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            yaw: self.yaw + rhs.yaw,
            pitch: self.pitch + rhs.pitch,
        }
    }
}

/// Buffers look input from the event layer until the next tick.
pub struct LookInput {
    pending: LookDelta,
    last_cursor: Option<Vec2>,
    /// Degrees of rotation per pixel of cursor travel.
    sensitivity: f32,
}

impl Default for LookInput {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl LookInput {
    /// Create an empty buffer with the given cursor sensitivity.
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self {
            pending: LookDelta::ZERO,
            last_cursor: None,
            sensitivity,
        }
    }

    /// Add an analog delta (gamepad stick, already in degrees).
    pub fn push(&mut self, delta: LookDelta) {
        let delta = if delta.is_finite() {
            delta
        } else {
            LookDelta::ZERO
        };
        self.pending = self.pending + delta;
    }

    /// Feed an absolute cursor position in pixels.
    ///
    /// The first position only seeds tracking. Moving right turns right,
    /// moving down looks down.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let current = Vec2::new(x, y);
        if let Some(last) = self.last_cursor {
            let d = (current - last) * self.sensitivity;
            self.push(LookDelta::new(-d.x, d.y));
        }
        self.last_cursor = Some(current);
    }

    /// Forget the cursor anchor (e.g. when the pointer is released).
    pub fn release_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Pending delta without draining it.
    #[must_use]
    pub fn peek(&self) -> LookDelta {
        self.pending
    }

    /// Drain the buffered delta.
    pub fn take(&mut self) -> LookDelta {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_until_taken() {
        let mut input = LookInput::default();
        input.push(LookDelta::new(2.0, 1.0));
        input.push(LookDelta::new(3.0, -4.0));
        assert_eq!(input.peek(), LookDelta::new(5.0, -3.0));
        assert_eq!(input.take(), LookDelta::new(5.0, -3.0));
        assert!(!input.take().is_active());
    }

    #[test]
    fn cursor_motion_maps_to_look_directions() {
        let mut input = LookInput::new(0.5);
        input.cursor_moved(100.0, 100.0);
        assert!(!input.peek().is_active());
        input.cursor_moved(110.0, 104.0);
        let delta = input.take();
        assert_eq!(delta.yaw, -5.0);
        assert_eq!(delta.pitch, 2.0);
    }

    #[test]
    fn releasing_cursor_reseeds_tracking() {
        let mut input = LookInput::new(1.0);
        input.cursor_moved(0.0, 0.0);
        input.release_cursor();
        input.cursor_moved(500.0, 500.0);
        assert!(!input.take().is_active());
    }

    #[test]
    fn non_finite_deltas_are_dropped() {
        let mut input = LookInput::default();
        input.push(LookDelta::new(f32::NAN, 1.0));
        assert!(!input.take().is_active());
    }
}
