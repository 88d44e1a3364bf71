//! Renderer-agnostic scene descriptors for ball-and-stick molecules.
//!
//! Descriptor generation is pure CPU work: one sphere per atom, two
//! half-bond cylinders per bond (so each end takes its atom's color). An
//! external retained-mode renderer consumes the output; this crate never
//! touches a scene graph, camera, or GPU buffer itself.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MolstickError;
use crate::geometry::BondSpec;
use crate::molecule::{Element, Molecule};
use crate::options::{AnimationOptions, Options};

/// Surface material for a rendered primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Surface roughness in [0, 1].
    pub roughness: f32,
    /// Metalness in [0, 1].
    pub metalness: f32,
}

impl Material {
    /// Matte finish used for atoms and bonds.
    fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            roughness: 0.8,
            metalness: 0.1,
        }
    }
}

/// A sphere primitive, one per atom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescriptor {
    /// Atom label (element symbol), for picking/tooltips on the renderer
    /// side.
    pub label: String,
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Surface material.
    pub material: Material,
}

/// A cylinder primitive, two per bond (one half-bond per endpoint color).
///
/// The renderer applies this to its unit cylinder (unit length, aligned to
/// its up axis, centered at origin): scale to `length` along the axis,
/// rotate by `rotation`, translate to `midpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderDescriptor {
    /// Cylinder center.
    pub midpoint: Vec3,
    /// Shortest-arc rotation from the renderer's up axis to the bond
    /// direction.
    pub rotation: Quat,
    /// Cylinder length along its axis.
    pub length: f32,
    /// Cylinder radius.
    pub radius: f32,
    /// Surface material.
    pub material: Material,
}

/// A complete scene ready for an external renderer to upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Scene name (from the molecule).
    pub name: String,
    /// Background clear color.
    pub background: [f32; 3],
    /// Spin rates for the renderer's per-frame callback.
    pub animation: AnimationOptions,
    /// Atom spheres.
    pub spheres: Vec<SphereDescriptor>,
    /// Bond cylinders.
    pub cylinders: Vec<CylinderDescriptor>,
}

/// Output buffers for descriptor generation.
#[derive(Default)]
struct DescriptorCollector {
    spheres: Vec<SphereDescriptor>,
    cylinders: Vec<CylinderDescriptor>,
}

impl DescriptorCollector {
    /// Push a cylinder spanning `spec`, colored `color`.
    fn push_bond(
        &mut self,
        spec: &BondSpec,
        color: [f32; 3],
    ) -> Result<(), MolstickError> {
        let t = spec.transform()?;
        self.cylinders.push(CylinderDescriptor {
            midpoint: t.midpoint,
            rotation: t.rotation,
            length: t.length,
            radius: spec.radius,
            material: Material::matte(color),
        });
        Ok(())
    }
}

/// Return atom color: if a carbon tint is configured, carbon atoms use it;
/// all other elements keep standard CPK coloring.
fn atom_color(elem: Element, carbon_tint: Option<[f32; 3]>) -> [f32; 3] {
    match (elem, carbon_tint) {
        (Element::C, Some(tint)) => tint,
        _ => elem.cpk_color(),
    }
}

/// Build sphere and cylinder descriptors for every atom and bond of
/// `molecule`.
///
/// # Errors
///
/// - [`MolstickError::InvalidAtomIndex`] if a bond references an atom
///   index outside the molecule's atom list,
/// - [`MolstickError::DegenerateBond`] if a bond's endpoints coincide; the
///   caller must skip that bond or correct the molecule.
pub fn build_molecule_scene(
    molecule: &Molecule,
    options: &Options,
) -> Result<SceneDescriptor, MolstickError> {
    let mut out = DescriptorCollector::default();
    let tint = options.colors.carbon_tint;

    for atom in &molecule.atoms {
        out.spheres.push(SphereDescriptor {
            label: atom.element.symbol().to_owned(),
            center: atom.position,
            radius: atom.element.vdw_radius()
                * options.geometry.ball_radius_scale,
            material: Material::matte(atom_color(atom.element, tint)),
        });
    }

    for bond in &molecule.bonds {
        let a = atom_at(molecule, bond.a)?;
        let b = atom_at(molecule, bond.b)?;
        let radius = options.geometry.bond_radius;

        // Split at the midpoint so each half carries its atom's color.
        let mid = (a.position + b.position) * 0.5;
        out.push_bond(
            &BondSpec {
                start: a.position,
                end: mid,
                radius,
            },
            atom_color(a.element, tint),
        )?;
        out.push_bond(
            &BondSpec {
                start: mid,
                end: b.position,
                radius,
            },
            atom_color(b.element, tint),
        )?;
    }

    log::debug!(
        "built scene '{}': {} spheres, {} cylinders",
        molecule.name,
        out.spheres.len(),
        out.cylinders.len()
    );

    Ok(SceneDescriptor {
        name: molecule.name.clone(),
        background: options.colors.background,
        animation: options.animation.clone(),
        spheres: out.spheres,
        cylinders: out.cylinders,
    })
}

fn atom_at(
    molecule: &Molecule,
    index: usize,
) -> Result<&crate::molecule::Atom, MolstickError> {
    molecule.atoms.get(index).ok_or(MolstickError::InvalidAtomIndex {
        index,
        count: molecule.atoms.len(),
    })
}
