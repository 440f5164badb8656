//! Interactive photoelectric effect simulator.
//!
//! Light of a chosen wavelength and intensity hits a cathode inside a
//! photocell; electrons are released when the photon energy beats the
//! cathode's work function and then cross the tube under a uniform field.
//! The settings strip below the tube lets the user change light, voltage and
//! cathode material with sliders and buttons.

pub mod app_settings;
pub mod assets;
pub mod constants;
pub mod error;
pub mod frame_clock;
pub mod geometry;
pub mod material;
pub mod physics;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod ui;

pub use app_settings::AppSettings;
pub use assets::Assets;
pub use error::{Result, SimError};
pub use geometry::{Point, Rect};
pub use material::{Material, MaterialTable};
pub use physics::{Electron, ElectronState, ElectronSwarm, Photocell, PhotocellParams};
pub use render::{DisplayList, DrawCommand};
pub use scene::PhotocellView;
pub use simulation::Simulation;
pub use ui::{PointerPhase, Response, Settings};
