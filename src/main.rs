//! Demo binary: build the water-molecule scene and emit it as JSON for an
//! external renderer to consume.
//!
//! Usage: `molstick [options.toml]`. The optional argument is a TOML
//! options preset; omitted fields fall back to defaults.

// The scene JSON on stdout is the binary's entire purpose.
#![allow(clippy::print_stdout)]

use std::path::Path;
use std::process::ExitCode;

use molstick::error::MolstickError;
use molstick::molecule::presets;
use molstick::options::Options;
use molstick::scene::build_molecule_scene;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), MolstickError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let molecule = presets::water()?;
    let scene = build_molecule_scene(&molecule, &options)?;
    log::info!(
        "{}: {} spheres, {} cylinders",
        scene.name,
        scene.spheres.len(),
        scene.cylinders.len()
    );

    let json = serde_json::to_string_pretty(&scene)
        .map_err(|e| MolstickError::DescriptorEncode(e.to_string()))?;
    println!("{json}");
    Ok(())
}
