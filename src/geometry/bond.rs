//! Bond-cylinder transforms: orienting a unit cylinder between two points.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MolstickError;

/// Endpoint separations below this have no usable bond direction.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// A bond to be rendered: two endpoints plus a cylinder radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSpec {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
    /// Cylinder radius.
    pub radius: f32,
}

impl BondSpec {
    /// Transform carrying a unit cylinder onto this bond.
    ///
    /// # Errors
    ///
    /// [`MolstickError::DegenerateBond`] if the endpoints coincide.
    pub fn transform(&self) -> Result<BondTransform, MolstickError> {
        compute_bond_transform(self.start, self.end)
    }
}

/// Transform carrying a unit cylinder onto a bond.
///
/// The reference cylinder is unit length, aligned to +Y, and centered at the
/// origin. Scaling it to `length` along Y, rotating by `rotation`, and
/// translating to `midpoint` yields a cylinder whose end caps coincide with
/// the bond's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTransform {
    /// Cylinder center: halfway between the endpoints.
    pub midpoint: Vec3,
    /// Shortest-arc rotation from +Y to the bond direction.
    pub rotation: Quat,
    /// Euclidean distance between the endpoints.
    pub length: f32,
}

impl BondTransform {
    /// Reconstruct the bond endpoints from the transform.
    #[must_use]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.rotation * Vec3::Y * (self.length * 0.5);
        (self.midpoint - half, self.midpoint + half)
    }
}

/// Compute the transform for a cylinder connecting two points.
///
/// The rotation is the shortest-arc rotation mapping the +Y reference axis
/// onto the normalized bond direction (axis = `Y x dir`, angle =
/// `acos(Y . dir)`), never an Euler decomposition, so there is no gimbal
/// ambiguity.
///
/// # Errors
///
/// [`MolstickError::DegenerateBond`] if the endpoint separation is below
/// [`DEGENERATE_EPSILON`]: normalization of the direction is undefined and
/// the caller must skip the bond or supply corrected endpoints.
pub fn compute_bond_transform(
    start: Vec3,
    end: Vec3,
) -> Result<BondTransform, MolstickError> {
    let diff = end - start;
    let length = diff.length();
    if length < DEGENERATE_EPSILON {
        return Err(MolstickError::DegenerateBond { length });
    }

    let direction = diff / length;
    let midpoint = (start + end) * 0.5;

    Ok(BondTransform {
        midpoint,
        rotation: rotation_from_y(direction),
        length,
    })
}

/// Shortest-arc rotation carrying +Y onto the unit vector `direction`.
fn rotation_from_y(direction: Vec3) -> Quat {
    let axis = Vec3::Y.cross(direction);
    if axis.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        // The cross product vanishes when direction is (anti)parallel to +Y.
        if direction.y > 0.0 {
            Quat::IDENTITY
        } else {
            // 180 degrees about any axis perpendicular to +Y.
            Quat::from_axis_angle(
                find_perpendicular(Vec3::Y),
                std::f32::consts::PI,
            )
        }
    } else {
        let angle = Vec3::Y.dot(direction).clamp(-1.0, 1.0).acos();
        Quat::from_axis_angle(axis.normalize(), angle)
    }
}

/// Find any vector perpendicular to the given vector.
fn find_perpendicular(v: Vec3) -> Vec3 {
    if v.length_squared() < 1e-8 {
        return Vec3::X;
    }
    let candidate = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(candidate).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    /// The rotated, scaled reference axis must reproduce `end - start`.
    fn assert_spans(start: Vec3, end: Vec3) {
        let t = compute_bond_transform(start, end).unwrap();
        let reproduced = t.rotation * Vec3::Y * t.length;
        assert!(
            (reproduced - (end - start)).length() < EPSILON,
            "rotated axis {reproduced} != {}",
            end - start
        );
    }

    #[test]
    fn midpoint_and_length_are_exact() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let end = Vec3::new(-2.0, 0.5, 4.0);
        let t = compute_bond_transform(start, end).unwrap();
        assert!((t.midpoint - (start + end) * 0.5).length() < EPSILON);
        assert!((t.length - (end - start).length()).abs() < EPSILON);
    }

    #[test]
    fn parallel_direction_uses_identity_rotation() {
        let t =
            compute_bond_transform(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0))
                .unwrap();
        assert!((t.rotation * Vec3::Y - Vec3::Y).length() < EPSILON);
        assert!((t.length - 1.0).abs() < EPSILON);
    }

    #[test]
    fn antiparallel_direction_flips_the_axis() {
        let t =
            compute_bond_transform(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0))
                .unwrap();
        assert!((t.rotation * Vec3::Y - Vec3::NEG_Y).length() < EPSILON);
    }

    #[test]
    fn perpendicular_direction_is_a_quarter_turn() {
        let t =
            compute_bond_transform(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))
                .unwrap();
        assert!((t.rotation * Vec3::Y - Vec3::X).length() < EPSILON);
    }

    #[test]
    fn arbitrary_directions_span_the_bond() {
        assert_spans(Vec3::new(0.3, -1.2, 2.0), Vec3::new(-0.7, 0.4, -1.1));
        assert_spans(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        assert_spans(Vec3::new(5.0, 5.0, 5.0), Vec3::new(5.0, 5.0, 5.1));
    }

    #[test]
    fn endpoints_round_trip() {
        let start = Vec3::new(-0.5, 0.25, 1.5);
        let end = Vec3::new(2.0, -1.0, 0.5);
        let t = compute_bond_transform(start, end).unwrap();
        let (a, b) = t.endpoints();
        assert!((a - start).length() < EPSILON);
        assert!((b - end).length() < EPSILON);
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let p = Vec3::new(0.1, 0.2, 0.3);
        assert!(matches!(
            compute_bond_transform(p, p),
            Err(MolstickError::DegenerateBond { .. })
        ));
        // Below epsilon but not exactly zero.
        assert!(matches!(
            compute_bond_transform(p, p + Vec3::new(1e-8, 0.0, 0.0)),
            Err(MolstickError::DegenerateBond { .. })
        ));
    }

    #[test]
    fn bond_spec_delegates_to_compute() {
        let spec = BondSpec {
            start: Vec3::ZERO,
            end: Vec3::new(0.0, 2.0, 0.0),
            radius: 0.15,
        };
        let t = spec.transform().unwrap();
        assert!((t.length - 2.0).abs() < EPSILON);
        assert!((t.midpoint - Vec3::new(0.0, 1.0, 0.0)).length() < EPSILON);
    }
}
