//! Circular slide index.

/// Index of the visible slide in a carousel of `len` slides.
///
/// `active` stays in `[0, len)`; with `len == 0` every navigation call is a
/// no-op and `active` stays `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    active: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Returns `false` and leaves the state untouched when
    /// `index` is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.active = index;
            true
        } else {
            false
        }
    }
}
