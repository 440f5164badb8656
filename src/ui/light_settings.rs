use crate::constants::FULL_LIGHT_PERFORMANCE;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::physics::Photocell;
use crate::render::{Color, DisplayList};

use super::{PointerPhase, Response, Slider};

/// Photocell inputs adjustable from the light panel, in slider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightParameter {
    /// Percent of full light performance
    Intensity,
    /// Nanometres
    Wavelength,
    /// Millivolts
    Voltage,
}

impl LightParameter {
    pub const ALL: [LightParameter; 3] = [
        LightParameter::Intensity,
        LightParameter::Wavelength,
        LightParameter::Voltage,
    ];

    fn slider(self) -> Result<Slider> {
        match self {
            LightParameter::Intensity => Slider::new(0.0, 100.0, "%", 0),
            LightParameter::Wavelength => Slider::new(280.0, 750.0, "nm", 0),
            LightParameter::Voltage => Slider::new(0.1, 10.0, "mV", 1),
        }
    }

    /// Current photocell setting in slider units.
    pub fn read(self, photocell: &Photocell) -> f64 {
        match self {
            LightParameter::Intensity => photocell.light_intensity_percent(),
            LightParameter::Wavelength => photocell.wave_length(),
            LightParameter::Voltage => photocell.voltage() * 1e3,
        }
    }

    /// Writes a committed slider value into the photocell.
    pub fn apply(self, value: f64, photocell: &mut Photocell) {
        match self {
            LightParameter::Intensity => {
                photocell.set_light_performance(value / 100.0 * FULL_LIGHT_PERFORMANCE)
            }
            LightParameter::Wavelength => photocell.set_wave_length(value),
            LightParameter::Voltage => photocell.set_voltage(value * 1e-3),
        }
    }
}

/// Intensity, wavelength and voltage sliders stacked in equal rows.
pub struct LightSettings {
    rect: Rect,
    sliders: Vec<(LightParameter, Slider)>,
    dragging: Option<LightParameter>,
}

impl LightSettings {
    pub fn new(parent: Rect, photocell: &Photocell) -> Result<Self> {
        let sliders = LightParameter::ALL
            .iter()
            .map(|&param| {
                let mut slider = param.slider()?;
                slider.set_value(param.read(photocell));
                Ok((param, slider))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut settings = Self {
            rect: parent.local(),
            sliders,
            dragging: None,
        };
        settings.arrange();
        Ok(settings)
    }

    fn arrange(&mut self) {
        let row_h = self.rect.h / self.sliders.len() as i32;
        let column_x = self.rect.w / 2;
        for (i, (_, slider)) in self.sliders.iter_mut().enumerate() {
            slider.set_center(Point::new(column_x, row_h / 2 + row_h * i as i32));
        }
    }

    /// Handles a pointer event in canvas space.
    ///
    /// A press on a slider cursor claims every following event until release,
    /// wherever the pointer wanders.
    pub fn handle_input(&mut self, pos: Point, phase: PointerPhase, photocell: &mut Photocell) -> Response {
        let local = self.rect.to_local(pos);
        match (phase, self.dragging) {
            (PointerPhase::Start, None) => {
                for (param, slider) in &mut self.sliders {
                    if slider.rect().contains(local) && slider.begin_drag(slider.rect().to_local(local)) {
                        self.dragging = Some(*param);
                        return Response::Redraw;
                    }
                }
                Response::Ignored
            }
            (_, Some(param)) => {
                let slider = self.slider_mut(param);
                let slider_pos = slider.rect().to_local(local);
                if phase == PointerPhase::Stop {
                    if let Some(value) = slider.end_drag(slider_pos) {
                        param.apply(value, photocell);
                        log::info!("{param:?} set to {value}");
                    }
                    self.dragging = None;
                } else {
                    slider.drag(slider_pos);
                }
                Response::Redraw
            }
            _ => Response::Ignored,
        }
    }

    fn slider_mut(&mut self, param: LightParameter) -> &mut Slider {
        &mut self.sliders[param as usize].1
    }

    pub fn slider(&self, param: LightParameter) -> &Slider {
        &self.sliders[param as usize].1
    }

    pub fn dragging(&self) -> Option<LightParameter> {
        self.dragging
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn draw(&self, out: &mut DisplayList) {
        out.with_origin(&self.rect, |out| {
            out.fill_rect(self.rect.local(), Color::WHITE);
            for (_, slider) in &self.sliders {
                slider.draw(out);
            }
        });
    }
}
