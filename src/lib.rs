// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural ball-and-stick molecular geometry.
//!
//! molstick computes the geometry a retained-mode 3D renderer needs to draw
//! a small molecule: atom positions derived from bond lengths and bond
//! angles, and the midpoint/rotation/length transform that maps a unit
//! cylinder onto a bond between two arbitrary points. The crate produces
//! renderer-agnostic descriptors only; scene-graph management, cameras,
//! input, and the render loop belong to the consuming renderer.
//!
//! # Key entry points
//!
//! - [`geometry::peripheral_atom`] and [`geometry::compute_bond_transform`]
//!   - the core placement and orientation math
//! - [`molecule::presets::water`] - the stock bent-triatomic demo molecule
//! - [`scene::build_molecule_scene`] - sphere/cylinder descriptors ready
//!   for upload by an external renderer
//! - [`options::Options`] - TOML-backed presentation options

pub mod animation;
pub mod error;
pub mod geometry;
pub mod molecule;
pub mod options;
pub mod scene;
