//! Lightbox
//!
//! An indexed image carousel overlay. The index always stays within the
//! current sequence; navigation wraps around in both directions.

use crate::error::{PortfolioError, PortfolioResult};
use crate::scroll_lock::{LockHolder, ScrollLock};
use crate::types::LightboxImage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<LightboxImage>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence, show the overlay and lock page scroll.
    ///
    /// `start` past the end is clamped to the last image.
    pub fn open(
        &mut self,
        images: Vec<LightboxImage>,
        start: usize,
        lock: &mut ScrollLock,
    ) -> PortfolioResult<()> {
        if images.is_empty() {
            return Err(PortfolioError::EmptyGallery);
        }
        self.index = start.min(images.len() - 1);
        self.images = images;
        self.open = true;
        lock.acquire(LockHolder::Lightbox);
        tracing::debug!(index = self.index, images = self.images.len(), "Lightbox opened");
        Ok(())
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.open = false;
        lock.release(LockHolder::Lightbox);
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len > 1 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn next(&mut self) {
        let len = self.images.len();
        if len > 1 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn current(&self) -> Option<&LightboxImage> {
        self.images.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Prev/next controls are only shown for two or more images
    pub fn shows_navigation(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<LightboxImage> {
        (0..n)
            .map(|i| LightboxImage::new(format!("{}.png", i), format!("Shot {}", i)))
            .collect()
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        lb.open(images(3), 0, &mut lock).unwrap();

        lb.prev();
        assert_eq!(lb.index(), 2);
        lb.next();
        lb.next();
        assert_eq!(lb.index(), 1);
        assert_eq!(lb.current().map(|i| i.caption.as_str()), Some("Shot 1"));
    }

    #[test]
    fn single_image_never_moves() {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        lb.open(images(1), 0, &mut lock).unwrap();

        lb.next();
        lb.prev();
        assert_eq!(lb.index(), 0);
        assert!(!lb.shows_navigation());
    }

    #[test]
    fn open_and_close_toggle_the_lock() {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        lb.open(images(2), 5, &mut lock).unwrap();
        assert_eq!(lb.index(), 1);
        assert!(lock.is_locked());

        lb.close(&mut lock);
        assert!(!lb.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        assert_eq!(lb.open(Vec::new(), 0, &mut lock), Err(PortfolioError::EmptyGallery));
        assert!(!lb.is_open());
        assert!(!lock.is_locked());
    }
}
