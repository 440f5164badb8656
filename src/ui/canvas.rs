use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::physics::Photocell;
use crate::render::{Color, DisplayList};

use super::{LightSettings, MaterialSelector, Panel, PointerPhase, Response};

/// Right-hand area of the settings strip showing one panel at a time.
pub struct Canvas {
    rect: Rect,
    light: LightSettings,
    cathode: MaterialSelector,
    active: Panel,
}

impl Canvas {
    pub fn new(rect: Rect, photocell: &Photocell, active: Panel) -> Result<Self> {
        Ok(Self {
            rect,
            light: LightSettings::new(rect, photocell)?,
            cathode: MaterialSelector::new(rect, photocell)?,
            active,
        })
    }

    pub fn change_active(&mut self, to: Panel) {
        if self.active != to {
            log::debug!("switching settings panel to {to:?}");
        }
        self.active = to;
    }

    /// Forwards a settings-space pointer event to the visible panel.
    pub fn handle_input(
        &mut self,
        pos: Point,
        phase: PointerPhase,
        photocell: &mut Photocell,
    ) -> Result<Response> {
        let local = self.rect.to_local(pos);
        match self.active {
            Panel::Light => Ok(self.light.handle_input(local, phase, photocell)),
            Panel::Cathode => self.cathode.handle_input(local, phase, photocell),
        }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn light(&self) -> &LightSettings {
        &self.light
    }

    pub fn cathode(&self) -> &MaterialSelector {
        &self.cathode
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn draw(&self, out: &mut DisplayList) {
        out.with_origin(&self.rect, |out| {
            out.fill_rect(self.rect.local(), Color::WHITE);
            match self.active {
                Panel::Light => self.light.draw(out),
                Panel::Cathode => self.cathode.draw(out),
            }
        });
    }
}
