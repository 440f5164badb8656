//! Photoelectric emission model.
//!
//! The [`Photocell`] turns light into a photocurrent and a stream of visible
//! [`Electron`]s; the electrons themselves live in an [`ElectronSwarm`] owned
//! by whoever drives the simulation.

mod electron;

pub use electron::{Electron, ElectronState, ElectronSwarm};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ATTOJOULE, ELECTRONS_PER_SPRITE, ELECTRON_MASS, ELEMENTARY_CHARGE, EMISSION_X, EMISSION_Y_MAX,
    EMISSION_Y_MIN, FULL_LIGHT_PERFORMANCE, INTER_ELECTRODE_REGION, MAX_EMISSION_ANGLE_DEG,
    NANOMETRE, PLANCK, SPEED_OF_LIGHT,
};
use crate::error::Result;
use crate::geometry::Point;
use crate::material::{Material, MaterialTable};

/// Startup values for the photocell, read from the `[photocell]` table of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotocellParams {
    /// Photon flux in photons per second
    pub light_performance: f64,
    /// Wavelength of the incident light in nanometres
    pub wave_length: f64,
    /// Anode voltage in volts
    pub voltage: f64,
    /// Cathode material code
    pub cathode: String,
}

impl Default for PhotocellParams {
    fn default() -> Self {
        Self {
            light_performance: 2.5e19,
            wave_length: 515.0,
            voltage: 5.05e-3,
            cathode: "Al".to_string(),
        }
    }
}

/// Energy of a single photon of the given wavelength, in joules.
pub fn photon_energy(wave_length_nm: f64) -> f64 {
    PLANCK * SPEED_OF_LIGHT / (wave_length_nm * NANOMETRE)
}

/// Speed of an electron carrying `kinetic_energy` joules.
///
/// Energies below zero (light just under the tabulated cutoff but still below
/// the work function) yield a standing electron.
pub fn electron_speed(kinetic_energy: f64) -> f64 {
    (2.0 * kinetic_energy.max(0.0) / ELECTRON_MASS).sqrt()
}

pub struct Photocell {
    light_performance: f64,
    wave_length: f64,
    voltage: f64,
    cathode: Material,
    materials: MaterialTable,
    current: f64,
    electron_count: f64,
    produced_last_tick: f64,
    rng: StdRng,
}

impl Photocell {
    pub fn new(params: &PhotocellParams, materials: MaterialTable) -> Result<Self> {
        let cathode = materials.get(&params.cathode)?.clone();
        Ok(Self {
            light_performance: params.light_performance,
            wave_length: params.wave_length,
            voltage: params.voltage,
            cathode,
            materials,
            current: 0.0,
            electron_count: 0.0,
            produced_last_tick: 0.0,
            rng: StdRng::from_entropy(),
        })
    }

    /// Replaces the random source with a seeded one for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Advances the emission model by `time_delta` simulated seconds.
    ///
    /// Returns the electrons that became visible this tick; the caller adopts
    /// them into its swarm. A non-positive step is rejected and changes nothing.
    pub fn advance(&mut self, time_delta: f64) -> Vec<Electron> {
        if time_delta <= 0.0 {
            log::warn!("ignoring non-positive time step {time_delta}");
            return Vec::new();
        }

        let (produced, kinetic_energy) = if self.wave_length < self.cathode.max_wavelength {
            let produced = (self.light_performance * time_delta).floor();
            let kinetic = photon_energy(self.wave_length) - self.cathode.work_function * ATTOJOULE;
            (produced, kinetic)
        } else {
            (0.0, 0.0)
        };

        // Only this tick's production counts; electrons already in flight are ignored.
        self.current = produced * ELEMENTARY_CHARGE / time_delta;
        self.produced_last_tick = produced;
        self.electron_count += produced;

        let speed = electron_speed(kinetic_energy);
        let mut electrons = Vec::new();
        while self.electron_count >= ELECTRONS_PER_SPRITE {
            self.electron_count -= ELECTRONS_PER_SPRITE;
            electrons.push(self.spawn(speed));
        }

        if !electrons.is_empty() {
            log::debug!("spawned {} electrons at {:.3e} m/s", electrons.len(), speed);
        }
        electrons
    }

    fn spawn(&mut self, speed: f64) -> Electron {
        let degrees = self.rng.gen_range(0..=MAX_EMISSION_ANGLE_DEG);
        let velocity_x = speed * f64::from(degrees).to_radians().cos();
        let y = self.rng.gen_range(EMISSION_Y_MIN..=EMISSION_Y_MAX);
        Electron::new(velocity_x, Point::new(EMISSION_X, y), INTER_ELECTRODE_REGION)
    }

    pub fn set_material(&mut self, code: &str) -> Result<()> {
        self.cathode = self.materials.get(code)?.clone();
        log::info!(
            "cathode set to {} (work function {} aJ, cutoff {} nm)",
            self.cathode.code,
            self.cathode.work_function,
            self.cathode.max_wavelength
        );
        Ok(())
    }

    pub fn set_light_performance(&mut self, photons_per_second: f64) {
        self.light_performance = photons_per_second.max(0.0);
    }

    pub fn set_wave_length(&mut self, nanometres: f64) {
        self.wave_length = nanometres;
    }

    pub fn set_voltage(&mut self, volts: f64) {
        self.voltage = volts;
    }

    pub fn light_performance(&self) -> f64 {
        self.light_performance
    }

    /// Light performance as a percentage of full intensity.
    pub fn light_intensity_percent(&self) -> f64 {
        self.light_performance / FULL_LIGHT_PERFORMANCE * 100.0
    }

    pub fn wave_length(&self) -> f64 {
        self.wave_length
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn cathode(&self) -> &str {
        &self.cathode.code
    }

    pub fn work_function(&self) -> f64 {
        self.cathode.work_function
    }

    pub fn max_wavelength(&self) -> f64 {
        self.cathode.max_wavelength
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Photocurrent in amperes from the most recent tick.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Emitted electrons not yet represented by a visible electron.
    pub fn electron_count(&self) -> f64 {
        self.electron_count
    }

    /// Electrons released during the most recent tick.
    pub fn produced_last_tick(&self) -> f64 {
        self.produced_last_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn photon_energy_at_cutoff_matches_aluminium() {
        // 290 nm sits right at aluminium's 0.68 aJ work function
        assert_relative_eq!(photon_energy(290.0), 0.685e-18, max_relative = 1e-2);
    }

    #[test]
    fn negative_kinetic_energy_gives_standing_electron() {
        assert_eq!(electron_speed(-1e-20), 0.0);
        assert!(electron_speed(1e-19) > 0.0);
    }
}
