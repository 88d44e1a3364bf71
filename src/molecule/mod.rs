//! Molecule model: atoms, explicit bonds, and procedural constructors.
//!
//! Values here are plain geometric data with no lifecycle: every build
//! recomputes positions from scratch, nothing is mutated in place.

mod element;
pub mod presets;

pub use element::Element;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MolstickError;
use crate::geometry::{central_atom, peripheral_atom};

/// An atom: element label plus position. The element carries the visual
/// attributes (CPK color, van der Waals radius); it is presentation data,
/// not structural.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element label.
    pub element: Element,
    /// Position in angstroms.
    pub position: Vec3,
}

/// A bond between two atoms, by index into [`Molecule::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    /// First atom index.
    pub a: usize,
    /// Second atom index.
    pub b: usize,
}

/// A small molecule: named atom list plus explicit bond list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// Human-readable name.
    pub name: String,
    /// Atoms, central atom first.
    pub atoms: Vec<Atom>,
    /// Bonds between atoms.
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Build a bent triatomic molecule: the central atom at the origin and
    /// two peripheral atoms fanned in the XY plane, `bond_angle` radians
    /// apart as seen from the center.
    ///
    /// # Errors
    ///
    /// Propagates [`MolstickError::InvalidBondLength`] /
    /// [`MolstickError::InvalidBondAngle`] from
    /// [`peripheral_atom`].
    pub fn bent_triatomic(
        name: &str,
        central: Element,
        peripheral: Element,
        bond_length: f32,
        bond_angle: f32,
    ) -> Result<Self, MolstickError> {
        let mut atoms = vec![Atom {
            element: central,
            position: central_atom(),
        }];
        for i in 0..2 {
            atoms.push(Atom {
                element: peripheral,
                position: peripheral_atom(bond_length, bond_angle, i, 2)?,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            atoms,
            bonds: vec![Bond { a: 0, b: 1 }, Bond { a: 0, b: 2 }],
        })
    }
}
