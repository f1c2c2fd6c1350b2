//! Hero slideshow rotation state.
//!
//! The front end owns the timer; this type only decides which slide comes next.

use std::time::Duration;

/// How long each hero slide stays on screen before auto-advancing.
pub const SLIDE_DURATION: Duration = Duration::from_millis(5000);

/// Current position in a fixed-length ring of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRotator {
    len: usize,
    current: usize,
}

impl SlideRotator {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Only a slideshow with more than one slide rotates on its own.
    pub fn is_auto_advancing(&self) -> bool {
        self.len > 1
    }

    /// Moves to the next slide, wrapping to the first.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`, wrapped into range.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.len > 0 {
            self.current = index % self.len;
        }
        self.current
    }

    /// Auto-advance interval, if this slideshow rotates at all.
    pub fn interval(&self) -> Option<Duration> {
        self.is_auto_advancing().then_some(SLIDE_DURATION)
    }
}
