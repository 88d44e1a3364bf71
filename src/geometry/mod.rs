//! Pure geometric primitives: atom placement and bond-cylinder transforms.
//!
//! Everything here is a stateless function over in-memory values; nothing
//! touches the renderer. All computations are O(1) per atom or bond.

mod bond;
mod placement;

pub use bond::{compute_bond_transform, BondSpec, BondTransform, DEGENERATE_EPSILON};
pub use placement::{central_atom, peripheral_atom};
