use crate::error::{Result, SimError};
use crate::geometry::{Point, Rect};
use crate::render::{Color, DisplayList, FontStyle, SpriteId};

const WIDTH: i32 = 500;
const HEIGHT: i32 = 100;
const TRACK_WIDTH: i32 = 350;
const TRACK_HEIGHT: i32 = 50;
/// Vertical centre of the track, below the value readout
const TRACK_CENTER_Y: i32 = HEIGHT / 2 + 15;
/// Keeps the cursor from overhanging the track ends
const TRACK_MARGIN: i32 = 4;
const CURSOR_WIDTH: i32 = 8;
const CURSOR_HEIGHT: i32 = 64;
const LIMIT_DISPLAY_WIDTH: i32 = 75;
const VALUE_DISPLAY_HEIGHT: i32 = 40;

/// Rounds to `accuracy` decimal places; 0 means whole numbers.
pub fn round_to_accuracy(value: f64, accuracy: u32) -> f64 {
    if accuracy == 0 {
        value.round()
    } else {
        let scale = 10f64.powi(accuracy as i32);
        (value * scale).round() / scale
    }
}

/// Horizontal slider with a draggable cursor.
#[derive(Debug, Clone)]
pub struct Slider {
    rect: Rect,
    min_value: f64,
    max_value: f64,
    unit: String,
    accuracy: u32,
    value: f64,
    cursor_x: i32,
    drag_anchor: Option<Point>,
}

impl Slider {
    /// Creates a slider resting at the middle of its range.
    pub fn new(min_value: f64, max_value: f64, unit: &str, accuracy: u32) -> Result<Self> {
        if !(max_value > min_value) {
            return Err(SimError::InvalidSliderRange {
                min: min_value,
                max: max_value,
            });
        }
        let mut slider = Self {
            rect: Rect::new(0, 0, WIDTH, HEIGHT),
            min_value,
            max_value,
            unit: unit.to_string(),
            accuracy,
            value: min_value,
            cursor_x: 0,
            drag_anchor: None,
        };
        slider.set_value(min_value + (max_value - min_value) / 2.0);
        Ok(slider)
    }

    /// Places the slider so its centre lands on `center` in parent space.
    pub fn set_center(&mut self, center: Point) {
        self.rect = Rect::from_center(center, WIDTH, HEIGHT);
    }

    /// Sets the value programmatically, clamped and rounded like a drag would be.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.quantize(value);
        let (lo, hi) = self.cursor_interval();
        let fraction = (self.value - self.min_value) / (self.max_value - self.min_value);
        self.cursor_x = lo + (fraction * f64::from(hi - lo)).round() as i32;
    }

    fn quantize(&self, value: f64) -> f64 {
        round_to_accuracy(value.clamp(self.min_value, self.max_value), self.accuracy)
            .clamp(self.min_value, self.max_value)
    }

    fn track_rect() -> Rect {
        Rect::from_center(Point::new(WIDTH / 2, TRACK_CENTER_Y), TRACK_WIDTH, TRACK_HEIGHT)
    }

    /// Pixel range the cursor centre may occupy, slider-local.
    pub fn cursor_interval(&self) -> (i32, i32) {
        let track = Self::track_rect();
        (track.left() + TRACK_MARGIN, track.right() - TRACK_MARGIN)
    }

    pub fn cursor_rect(&self) -> Rect {
        Rect::from_center(Point::new(self.cursor_x, TRACK_CENTER_Y), CURSOR_WIDTH, CURSOR_HEIGHT)
    }

    /// Starts a drag when `pos` (slider-local) hits the cursor.
    pub fn begin_drag(&mut self, pos: Point) -> bool {
        if self.cursor_rect().contains(pos) {
            self.drag_anchor = Some(pos);
            true
        } else {
            false
        }
    }

    /// Follows the pointer while dragging. Nothing is committed yet.
    pub fn drag(&mut self, pos: Point) {
        if self.is_dragging() {
            self.track_pointer(pos);
        }
    }

    /// Finishes the drag and returns the committed value.
    pub fn end_drag(&mut self, pos: Point) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        self.track_pointer(pos);
        self.drag_anchor = None;
        Some(self.value)
    }

    fn track_pointer(&mut self, pos: Point) {
        let (lo, hi) = self.cursor_interval();
        let x = pos.x.clamp(lo, hi);
        let fraction = f64::from(x - lo) / f64::from(hi - lo);
        self.value = self.quantize(self.min_value + (self.max_value - self.min_value) * fraction);
        self.cursor_x = x;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn format(&self, value: f64) -> String {
        format!("{:.*} {}", self.accuracy as usize, value, self.unit)
    }

    pub fn value_label(&self) -> String {
        self.format(self.value)
    }

    pub fn draw(&self, out: &mut DisplayList) {
        out.with_origin(&self.rect, |out| {
            out.fill_rect(self.rect.local(), Color::WHITE);

            let track = Self::track_rect();
            out.fill_rect(Rect::new(track.left(), TRACK_CENTER_Y - 1, track.w, 2), Color::BLACK);
            for x in [track.left(), track.right() - 2] {
                out.fill_rect(Rect::new(x, TRACK_CENTER_Y - 10, 2, 20), Color::BLACK);
            }

            let half = LIMIT_DISPLAY_WIDTH / 2;
            out.text(Point::new(half, TRACK_CENTER_Y), self.format(self.min_value), FontStyle::Slider);
            out.text(
                Point::new(half + LIMIT_DISPLAY_WIDTH + track.w, TRACK_CENTER_Y),
                self.format(self.max_value),
                FontStyle::Slider,
            );
            out.text(Point::new(WIDTH / 2, VALUE_DISPLAY_HEIGHT / 2), self.value_label(), FontStyle::Slider);

            out.sprite(SpriteId::SliderCursor, self.cursor_rect());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_interval() {
        let s = Slider::new(0.0, 100.0, "%", 0).unwrap();
        assert_eq!(s.cursor_interval(), (79, 421));
        assert_eq!(s.cursor_rect().center().x, 250);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(
            Slider::new(5.0, 5.0, "nm", 0),
            Err(SimError::InvalidSliderRange { .. })
        ));
    }
}
