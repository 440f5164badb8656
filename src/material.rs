use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// A cathode material and the two numbers the emission model needs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Chemical symbol used as the lookup key, e.g. "Al"
    pub code: String,
    /// Work function in attojoules
    pub work_function: f64,
    /// Cutoff wavelength in nanometres; longer light emits nothing
    pub max_wavelength: f64,
}

const STANDARD_MATERIALS: [(&str, f64, f64); 16] = [
    ("Al", 0.68, 290.0),
    ("Au", 0.77, 260.0),
    ("As", 0.82, 245.0),
    ("Ba", 0.42, 480.0),
    ("Be", 0.71, 280.0),
    ("Cs", 0.31, 635.0),
    ("Ce", 0.46, 435.0),
    ("Eu", 0.40, 500.0),
    ("Ag", 0.69, 290.0),
    ("Ga", 0.66, 300.0),
    ("Ge", 0.78, 255.0),
    ("Hf", 0.62, 320.0),
    ("Ca", 0.45, 440.0),
    ("K", 0.36, 550.0),
    ("Hg", 0.72, 275.0),
    ("Pb", 0.66, 300.0),
];

/// Immutable, ordered lookup of cathode materials.
///
/// Order matters: the material selector lays its buttons out in table order.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// The sixteen metals offered by the cathode picker.
    pub fn standard() -> Self {
        let materials = STANDARD_MATERIALS
            .iter()
            .map(|&(code, work_function, max_wavelength)| Material {
                code: code.to_string(),
                work_function,
                max_wavelength,
            })
            .collect();
        Self { materials }
    }

    pub fn get(&self, code: &str) -> Result<&Material> {
        self.materials
            .iter()
            .find(|m| m.code == code)
            .ok_or_else(|| SimError::UnknownMaterial(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|m| m.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_lookups() {
        let table = MaterialTable::standard();
        assert_eq!(table.len(), 16);
        let cs = table.get("Cs").unwrap();
        assert_eq!(cs.work_function, 0.31);
        assert_eq!(cs.max_wavelength, 635.0);
        assert_eq!(table.codes().next(), Some("Al"));
    }

    #[test]
    fn unknown_code_is_an_error() {
        let table = MaterialTable::standard();
        assert!(matches!(table.get("Xx"), Err(SimError::UnknownMaterial(code)) if code == "Xx"));
    }
}
