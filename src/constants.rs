//! Physical constants and the fixed layout of the photocell scene.

use crate::geometry::Rect;

/// Planck constant in J·s
pub const PLANCK: f64 = 6.626_070_15e-34;
/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Elementary charge in C
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Electron rest mass in kg, rounded the way the classroom model uses it
pub const ELECTRON_MASS: f64 = 9.1e-31;

/// Attojoules to joules
pub const ATTOJOULE: f64 = 1e-18;
/// Nanometres to metres
pub const NANOMETRE: f64 = 1e-9;

/// Number of emitted electrons represented by one visible electron.
pub const ELECTRONS_PER_SPRITE: f64 = 5e14;
/// Physical distance between cathode and anode in metres.
pub const ELECTRODE_GAP: f64 = 0.1;
/// Largest emission angle off the tube axis, in whole degrees.
pub const MAX_EMISSION_ANGLE_DEG: u32 = 85;
/// Photon flux that corresponds to a 100 % intensity setting.
pub const FULL_LIGHT_PERFORMANCE: f64 = 5e19;

/// Region between the electrodes in scene pixels; the field acts only here.
pub const INTER_ELECTRODE_REGION: Rect = Rect::new(233, 121, 497, 100);
/// Left edge where new electrons appear.
pub const EMISSION_X: i32 = 234;
/// Inclusive vertical band new electrons are spread over.
pub const EMISSION_Y_MIN: i32 = 121;
pub const EMISSION_Y_MAX: i32 = 211;
/// Side length of an electron sprite in pixels.
pub const ELECTRON_SIZE: i32 = 10;
