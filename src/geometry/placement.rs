//! Procedural atom placement from bond lengths and bond angles.

use glam::Vec3;

use crate::error::MolstickError;

/// Position of the central atom: always the coordinate-system origin.
///
/// All peripheral atoms are positioned relative to this point.
#[must_use]
pub fn central_atom() -> Vec3 {
    Vec3::ZERO
}

/// Place peripheral atom `atom_index` of `atom_count` symmetric atoms
/// bonded to the central atom at the origin.
///
/// Atoms are arranged as a planar fan in the XY plane, symmetric about the
/// +Y reference axis: atom `i` sits at in-plane angle
/// `(i - (n-1)/2) * bond_angle` from +Y, at distance `bond_length`. For the
/// two-atom case this is exactly `±bond_angle/2`, producing the bent
/// triatomic geometry where `bond_angle` is the angle subtended at the
/// central atom between any two adjacent peripheral atoms.
///
/// # Errors
///
/// Fails fast rather than producing overlapping or reflected geometry:
/// - [`MolstickError::InvalidBondLength`] if `bond_length` is not a
///   positive finite number,
/// - [`MolstickError::InvalidBondAngle`] if `bond_angle` is outside the
///   open interval (0, π),
/// - [`MolstickError::InvalidAtomIndex`] if `atom_index >= atom_count` or
///   `atom_count` is zero.
pub fn peripheral_atom(
    bond_length: f32,
    bond_angle: f32,
    atom_index: usize,
    atom_count: usize,
) -> Result<Vec3, MolstickError> {
    if !(bond_length > 0.0 && bond_length.is_finite()) {
        return Err(MolstickError::InvalidBondLength {
            length: bond_length,
        });
    }
    if !(bond_angle > 0.0 && bond_angle < std::f32::consts::PI) {
        return Err(MolstickError::InvalidBondAngle { angle: bond_angle });
    }
    if atom_index >= atom_count {
        return Err(MolstickError::InvalidAtomIndex {
            index: atom_index,
            count: atom_count,
        });
    }

    // Signed offset from the +Y axis, centered so the fan is symmetric.
    let centered = atom_index as f32 - (atom_count as f32 - 1.0) / 2.0;
    let theta = centered * bond_angle;

    Ok(Vec3::new(
        bond_length * theta.sin(),
        bond_length * theta.cos(),
        0.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    /// Angle subtended at the origin between two positions, in radians.
    fn subtended_angle(a: Vec3, b: Vec3) -> f32 {
        (a.dot(b) / (a.length() * b.length())).clamp(-1.0, 1.0).acos()
    }

    #[test]
    fn central_atom_is_origin() {
        assert_eq!(central_atom(), Vec3::ZERO);
    }

    #[test]
    fn peripheral_atoms_lie_at_bond_length() {
        for &(length, angle) in
            &[(1.0, 1.0), (0.9584, 1.8238), (1.8, 1.8238), (2.5, 0.3)]
        {
            for i in 0..2 {
                let p = peripheral_atom(length, angle, i, 2).unwrap();
                assert!(
                    (p.length() - length).abs() < EPSILON,
                    "|p| = {} for (L={length}, angle={angle}, i={i})",
                    p.length()
                );
                assert_eq!(p.z, 0.0, "placement must stay in the XY plane");
            }
        }
    }

    #[test]
    fn bond_angle_is_reproduced_between_the_two_atoms() {
        for &(length, angle) in &[(1.0, 0.5), (1.8, 1.8238), (3.0, 2.9)] {
            let a = peripheral_atom(length, angle, 0, 2).unwrap();
            let b = peripheral_atom(length, angle, 1, 2).unwrap();
            assert!(
                (subtended_angle(a, b) - angle).abs() < 1e-4,
                "angle {} != {angle}",
                subtended_angle(a, b)
            );
        }
    }

    #[test]
    fn bent_triatomic_reference_geometry() {
        // L = 1.8, angle = 104.5 deg: atoms at +/- 52.25 deg from +Y.
        let angle = 104.5_f32.to_radians();
        let a = peripheral_atom(1.8, angle, 0, 2).unwrap();
        let b = peripheral_atom(1.8, angle, 1, 2).unwrap();

        assert!((b.x - 1.4232).abs() < 1e-3, "b.x = {}", b.x);
        assert!((b.y - 1.1020).abs() < 1e-3, "b.y = {}", b.y);
        // Mirror image across the Y axis.
        assert!((a.x + b.x).abs() < EPSILON);
        assert!((a.y - b.y).abs() < EPSILON);
    }

    #[test]
    fn three_atom_fan_keeps_adjacent_angles() {
        let angle = 0.8;
        let a = peripheral_atom(1.0, angle, 0, 3).unwrap();
        let b = peripheral_atom(1.0, angle, 1, 3).unwrap();
        let c = peripheral_atom(1.0, angle, 2, 3).unwrap();
        assert!((subtended_angle(a, b) - angle).abs() < 1e-4);
        assert!((subtended_angle(b, c) - angle).abs() < 1e-4);
        // The middle atom of an odd fan sits on the reference axis.
        assert!(b.x.abs() < EPSILON);
    }

    #[test]
    fn rejects_non_positive_bond_length() {
        assert!(matches!(
            peripheral_atom(0.0, 1.0, 0, 2),
            Err(MolstickError::InvalidBondLength { .. })
        ));
        assert!(matches!(
            peripheral_atom(-1.8, 1.0, 0, 2),
            Err(MolstickError::InvalidBondLength { .. })
        ));
        assert!(matches!(
            peripheral_atom(f32::NAN, 1.0, 0, 2),
            Err(MolstickError::InvalidBondLength { .. })
        ));
    }

    #[test]
    fn rejects_out_of_domain_bond_angle() {
        assert!(matches!(
            peripheral_atom(1.0, 0.0, 0, 2),
            Err(MolstickError::InvalidBondAngle { .. })
        ));
        assert!(matches!(
            peripheral_atom(1.0, PI, 0, 2),
            Err(MolstickError::InvalidBondAngle { .. })
        ));
        assert!(matches!(
            peripheral_atom(1.0, -0.5, 0, 2),
            Err(MolstickError::InvalidBondAngle { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_atom_index() {
        assert!(matches!(
            peripheral_atom(1.0, 1.0, 2, 2),
            Err(MolstickError::InvalidAtomIndex { index: 2, count: 2 })
        ));
        assert!(matches!(
            peripheral_atom(1.0, 1.0, 0, 0),
            Err(MolstickError::InvalidAtomIndex { .. })
        ));
    }
}
