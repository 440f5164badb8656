use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::render::{Color, DisplayList, FontStyle};

use super::Selection;

/// Settings pages reachable from the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Light,
    Cathode,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::Light => "Light and Voltage",
            Panel::Cathode => "Cathode Material",
        }
    }
}

/// A labelled button keyed by whatever it selects.
#[derive(Debug, Clone)]
pub struct Button<K> {
    pub key: K,
    pub label: String,
    pub rect: Rect,
}

/// How a menu places its buttons inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One centred column, rows spaced `height / (n + 1)` apart
    Column { button_w: i32, button_h: i32 },
    /// Square cells filled left to right, top to bottom
    Grid { cell: i32, button: i32 },
}

impl Layout {
    /// Button rectangles for `count` buttons in a container of `size`.
    pub fn place(self, count: usize, size: Rect) -> Vec<Rect> {
        match self {
            Layout::Column { button_w, button_h } => {
                let x = size.w / 2;
                let row_h = size.h / (count as i32 + 1);
                (1..=count as i32)
                    .map(|i| Rect::from_center(Point::new(x, row_h * i), button_w, button_h))
                    .collect()
            }
            Layout::Grid { cell, button } => {
                let cols = (size.w / cell).max(1);
                (0..count as i32)
                    .map(|i| {
                        let cell_rect = Rect::new(cell * (i % cols), cell * (i / cols), cell, cell);
                        Rect::from_center(cell_rect.center(), button, button)
                    })
                    .collect()
            }
        }
    }
}

/// Single-select button group.
pub struct Menu<K> {
    rect: Rect,
    layout: Layout,
    buttons: Selection<Button<K>>,
}

impl<K: PartialEq> Menu<K> {
    /// The first button starts out active.
    pub fn new(rect: Rect, layout: Layout, entries: Vec<(K, String)>) -> Result<Self> {
        let buttons = entries
            .into_iter()
            .map(|(key, label)| Button {
                key,
                label,
                rect: Rect::new(0, 0, 0, 0),
            })
            .collect();
        let mut menu = Self {
            rect,
            layout,
            buttons: Selection::new(buttons)?,
        };
        menu.arrange();
        Ok(menu)
    }

    fn arrange(&mut self) {
        let rects = self.layout.place(self.buttons.len(), self.rect.local());
        for (button, rect) in self.buttons.items_mut().iter_mut().zip(rects) {
            button.rect = rect;
        }
    }

    /// Makes the button at `index` the active one.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.buttons.set_active(index);
        self.arrange();
        changed
    }

    pub fn select_key(&mut self, key: &K) -> bool {
        match self.buttons.position(|b| &b.key == key) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Selects the button under `pos` (menu-local). Returns the hit index.
    pub fn click(&mut self, pos: Point) -> Option<usize> {
        let index = self.buttons.position(|b| b.rect.contains(pos))?;
        self.select(index);
        Some(index)
    }

    pub fn active(&self) -> &K {
        &self.buttons.active().key
    }

    pub fn active_index(&self) -> usize {
        self.buttons.active_index()
    }

    pub fn buttons(&self) -> &[Button<K>] {
        self.buttons.items()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn draw(&self, out: &mut DisplayList) {
        out.with_origin(&self.rect, |out| {
            out.fill_rect(self.rect.local(), Color::WHITE);
            for (i, button) in self.buttons.items().iter().enumerate() {
                let fill = if i == self.buttons.active_index() {
                    Color::HIGHLIGHT
                } else {
                    Color::WHITE
                };
                out.framed_box(button.rect, fill, 2);
                out.text(button.rect.center(), button.label.as_str(), FontStyle::Button);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_layout_matches_side_menu() {
        let rects = Layout::Column { button_w: 200, button_h: 60 }.place(2, Rect::new(0, 0, 300, 350));
        assert_eq!(rects[0].center(), Point::new(150, 116));
        assert_eq!(rects[1].center(), Point::new(150, 232));
    }

    #[test]
    fn grid_wraps_after_full_row() {
        let rects = Layout::Grid { cell: 44, button: 40 }.place(16, Rect::new(0, 0, 600, 300));
        // 600 / 44 = 13 columns
        assert_eq!(rects[0], Rect::new(2, 2, 40, 40));
        assert_eq!(rects[12].center(), Point::new(12 * 44 + 22, 22));
        assert_eq!(rects[13].center(), Point::new(22, 66));
    }
}
