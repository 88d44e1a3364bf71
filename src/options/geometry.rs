use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Geometry detail options for molecular rendering primitives.
pub struct GeometryOptions {
    /// Fraction of the van der Waals radius used for atom spheres.
    pub ball_radius_scale: f32,
    /// Bond cylinder radius in angstroms.
    pub bond_radius: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            ball_radius_scale: 0.3,
            bond_radius: 0.15,
        }
    }
}
