//! Render list for the photocell itself, rebuilt from simulation state every frame.

use crate::constants::{FULL_LIGHT_PERFORMANCE, INTER_ELECTRODE_REGION};
use crate::geometry::Rect;
use crate::render::{spectrum_color, Color, DisplayList, FontStyle, SpriteId};
use crate::simulation::Simulation;

pub const SCENE_RECT: Rect = Rect::new(0, 0, 1000, 450);

const CATHODE: Rect = Rect::new(218, 96, 15, 150);
const ANODE: Rect = Rect::new(730, 96, 15, 150);
const TUBE: Rect = Rect::new(190, 70, 585, 200);
const CURRENT_READOUT: Rect = Rect::new(440, 305, 114, 49);
const VOLTAGE_READOUT: Rect = Rect::new(150, 305, 134, 49);

const LIGHT_RAY_CENTER: [f32; 2] = [368.0, 116.0];
const LIGHT_RAY_SIZE: [f32; 2] = [330.0, 45.0];
const LIGHT_RAY_ANGLE_DEG: f32 = 21.0;

const ELECTRODE_GREY: Color = Color::rgb(120, 120, 120);
const GLASS: Color = Color::rgb(150, 180, 200);

pub struct PhotocellView;

impl PhotocellView {
    pub fn draw(sim: &Simulation, out: &mut DisplayList) {
        let photocell = &sim.photocell;
        out.fill_rect(SCENE_RECT, Color::WHITE);
        out.stroke_rect(TUBE, GLASS, 3.0);
        out.fill_rect(CATHODE, ELECTRODE_GREY);
        out.fill_rect(ANODE, ELECTRODE_GREY);
        Self::draw_circuit(out);

        let alpha = (photocell.light_performance() / FULL_LIGHT_PERFORMANCE * 255.0).clamp(0.0, 255.0) as u8;
        let color = spectrum_color(photocell.wave_length()).with_alpha(alpha);
        out.quad(light_ray_corners(), color);

        for electron in sim.electrons.iter() {
            out.sprite(SpriteId::Electron, electron.bounds());
        }

        Self::readout(out, CURRENT_READOUT, format!("I = {:.2} A", photocell.current()));
        Self::readout(out, VOLTAGE_READOUT, format!("U = {:.2} mV", photocell.voltage() * 1e3));
    }

    /// Wires from both electrodes down to the meters.
    fn draw_circuit(out: &mut DisplayList) {
        let y = CURRENT_READOUT.center().y;
        let region = INTER_ELECTRODE_REGION;
        out.fill_rect(Rect::new(CATHODE.center().x - 1, CATHODE.bottom(), 2, y - CATHODE.bottom()), Color::BLACK);
        out.fill_rect(Rect::new(ANODE.center().x - 1, ANODE.bottom(), 2, y - ANODE.bottom()), Color::BLACK);
        out.fill_rect(Rect::new(CATHODE.center().x, y - 1, region.right() - CATHODE.center().x + 8, 2), Color::BLACK);
    }

    fn readout(out: &mut DisplayList, rect: Rect, text: String) {
        out.framed_box(rect, Color::WHITE, 2);
        out.text(rect.center(), text, FontStyle::Label);
    }
}

/// Corners of the light beam, rotated counter-clockwise on screen.
fn light_ray_corners() -> [[f32; 2]; 4] {
    let [cx, cy] = LIGHT_RAY_CENTER;
    let (hw, hh) = (LIGHT_RAY_SIZE[0] / 2.0, LIGHT_RAY_SIZE[1] / 2.0);
    let (sin, cos) = LIGHT_RAY_ANGLE_DEG.to_radians().sin_cos();
    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| [cx + x * cos + y * sin, cy - x * sin + y * cos])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_ray_rises_to_the_right() {
        let corners = light_ray_corners();
        // right end is higher on screen than the left end
        assert!(corners[1][1] < corners[0][1]);
        let cx = corners.iter().map(|c| c[0]).sum::<f32>() / 4.0;
        assert!((cx - LIGHT_RAY_CENTER[0]).abs() < 1e-3);
    }
}
