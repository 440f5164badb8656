//! Settings panel widgets and pointer routing.
//!
//! Widgets are plain state machines: they receive pointer positions already
//! translated into their parent's space, mutate the [`Photocell`] they are
//! handed, and report whether anything visible changed. Drawing happens
//! separately, from state, into a [`DisplayList`].
//!
//! [`Photocell`]: crate::physics::Photocell
//! [`DisplayList`]: crate::render::DisplayList

mod canvas;
mod light_settings;
mod material_selector;
mod menu;
mod settings;
mod slider;

pub use canvas::Canvas;
pub use light_settings::{LightParameter, LightSettings};
pub use material_selector::MaterialSelector;
pub use menu::{Button, Layout, Menu, Panel};
pub use settings::Settings;
pub use slider::{round_to_accuracy, Slider};

use crate::error::{Result, SimError};

/// The three phases of a press-drag-release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed
    Start,
    /// Pointer moved while the button is held
    Pos,
    /// Button released
    Stop,
}

/// Outcome of an input event, bubbled up so ancestors know to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Redraw,
}

impl Response {
    pub fn or(self, other: Response) -> Response {
        if self == Response::Redraw || other == Response::Redraw {
            Response::Redraw
        } else {
            Response::Ignored
        }
    }

    pub fn needs_redraw(self) -> bool {
        self == Response::Redraw
    }
}

/// Ordered items with exactly one active at all times.
pub struct Selection<T> {
    items: Vec<T>,
    active_index: usize,
}

impl<T> Selection<T> {
    /// Fails on an empty list since there would be nothing to mark active.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(SimError::EmptyMenu);
        }
        Ok(Self {
            items,
            active_index: 0,
        })
    }

    pub fn active(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Activates `index`, ignoring indices past the end.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.active_index = index;
            true
        } else {
            false
        }
    }

    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        assert!(matches!(Selection::<u8>::new(vec![]), Err(SimError::EmptyMenu)));
    }

    #[test]
    fn out_of_range_keeps_current() {
        let mut s = Selection::new(vec!['a', 'b']).unwrap();
        assert!(s.set_active(1));
        assert!(!s.set_active(5));
        assert_eq!(*s.active(), 'b');
    }

    #[test]
    fn redraw_wins() {
        assert_eq!(Response::Ignored.or(Response::Redraw), Response::Redraw);
        assert_eq!(Response::Ignored.or(Response::Ignored), Response::Ignored);
    }
}
