//! Touch swipe classification.

use crate::mode::SwipeDirection;

/// Tracks the start point of the touch in progress.
#[derive(Clone, Copy, Debug)]
pub struct GestureTracker {
    horizontal_threshold: f32,
    vertical_threshold: f32,
    start: Option<(f32, f32)>,
}

impl GestureTracker {
    pub fn new(horizontal_swipe_px: u32, vertical_swipe_px: u32) -> Self {
        Self {
            horizontal_threshold: horizontal_swipe_px as f32,
            vertical_threshold: vertical_swipe_px as f32,
            start: None,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Ends the current touch. Travel must strictly exceed the threshold;
    /// a vertical swipe wins when it dominates the horizontal travel.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dy.abs() > self.vertical_threshold && dy.abs() >= dx.abs() {
            return Some(if dy < 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            });
        }

        if dx.abs() > self.horizontal_threshold {
            return Some(if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            });
        }

        None
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
