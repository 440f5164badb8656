use crate::constants::{ELECTRODE_GAP, ELECTRON_MASS, ELECTRON_SIZE, ELEMENTARY_CHARGE};
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectronState {
    InFlight,
    Destroyed,
}

/// A visible electron crossing the gap between cathode and anode.
#[derive(Debug, Clone)]
pub struct Electron {
    velocity_x: f64,
    position: Point,
    /// Horizontal travel not yet applied to `position`, always in (-1, 1) px
    sub_pixel: f64,
    region: Rect,
    state: ElectronState,
}

impl Electron {
    pub fn new(velocity_x: f64, position: Point, region: Rect) -> Self {
        Self {
            velocity_x,
            position,
            sub_pixel: 0.0,
            region,
            state: ElectronState::InFlight,
        }
    }

    /// Moves the electron and lets the field act on it.
    ///
    /// A positive voltage increases `velocity_x`, pulling electrons towards the
    /// anode on the right. Once the electron has left its region it is
    /// destroyed and stays that way.
    pub fn advance(&mut self, time_delta: f64, voltage: f64) -> ElectronState {
        if self.state == ElectronState::Destroyed {
            return self.state;
        }

        self.sub_pixel += self.velocity_x * time_delta;
        let whole = self.sub_pixel.trunc();
        if whole != 0.0 {
            self.position.x += whole as i32;
            self.sub_pixel -= whole;
        }

        if self.bounds().intersects(&self.region) {
            let field_strength = voltage / ELECTRODE_GAP;
            let electric_force = field_strength * ELEMENTARY_CHARGE;
            let acceleration = electric_force / ELECTRON_MASS;
            self.velocity_x += acceleration * time_delta;
        } else {
            self.state = ElectronState::Destroyed;
        }
        self.state
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, ELECTRON_SIZE, ELECTRON_SIZE)
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn state(&self) -> ElectronState {
        self.state
    }
}

/// The electrons currently in flight.
#[derive(Debug, Default)]
pub struct ElectronSwarm {
    electrons: Vec<Electron>,
}

impl ElectronSwarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every electron and drops the ones that left their region.
    /// Returns how many were removed.
    pub fn advance(&mut self, time_delta: f64, voltage: f64) -> usize {
        let before = self.electrons.len();
        self.electrons
            .retain_mut(|e| e.advance(time_delta, voltage) == ElectronState::InFlight);
        let removed = before - self.electrons.len();
        if removed > 0 {
            log::debug!("{removed} electrons left the tube, {} in flight", self.electrons.len());
        }
        removed
    }

    pub fn adopt(&mut self, electrons: impl IntoIterator<Item = Electron>) {
        self.electrons.extend(electrons);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Electron> {
        self.electrons.iter()
    }

    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INTER_ELECTRODE_REGION;

    #[test]
    fn slow_electron_accumulates_sub_pixel_motion() {
        let mut e = Electron::new(1.0, Point::new(300, 150), INTER_ELECTRODE_REGION);
        for _ in 0..3 {
            e.advance(0.3, 0.0);
        }
        assert_eq!(e.position().x, 300);
        e.advance(0.3, 0.0);
        assert_eq!(e.position().x, 301);
    }

    #[test]
    fn negative_motion_truncates_toward_zero() {
        let mut e = Electron::new(-1.5, Point::new(300, 150), INTER_ELECTRODE_REGION);
        e.advance(1.0, 0.0);
        assert_eq!(e.position().x, 299);
        e.advance(1.0, 0.0);
        assert_eq!(e.position().x, 297);
    }

    #[test]
    fn destroyed_is_terminal() {
        let mut e = Electron::new(0.0, Point::new(0, 0), INTER_ELECTRODE_REGION);
        assert_eq!(e.advance(1.0, 1.0), ElectronState::Destroyed);
        let v = e.velocity_x();
        assert_eq!(e.advance(1.0, 1.0), ElectronState::Destroyed);
        assert_eq!(e.velocity_x(), v);
    }
}
