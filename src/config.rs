//! Runtime magnetism configuration loaded from `assets/magnetism.toml`.
//!
//! [`MagnetTuning`] is a Bevy [`Resource`] that mirrors the magnetism and
//! spawning constants in [`crate::constants`].  At startup,
//! [`load_magnet_tuning`] reads `assets/magnetism.toml` and overwrites the
//! defaults with any values present in the file.  Missing keys fall back to
//! the compile-time defaults, so a minimal TOML can override just the values
//! you care about.
//!
//! A file that parses but describes an unusable magnet (zero range, window
//! narrower than the footprint, negative strength) is rejected as a whole and
//! the compiled defaults are kept — a bad tune must never reach the per-tick
//! attraction routine.
//!
//! ## Usage in systems
//!
//! Add `tuning: Res<MagnetTuning>` to any system parameter list and build
//! profiles with `tuning.element_profile()` etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `MagnetTuning::default()`.

use crate::constants::*;
use crate::error::SimResult;
use crate::magnet::MagnetProfile;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable magnetism and spawning configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/magnetism.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MagnetTuning {
    // ── Elements ─────────────────────────────────────────────────────────────
    pub element_magnet_range: f32,
    pub element_magnet_strength: f32,
    pub element_footprint_radius: f32,
    pub element_use_squared_distances: bool,

    // ── Power-Ups ────────────────────────────────────────────────────────────
    pub power_up_magnet_range: f32,
    pub power_up_magnet_strength: f32,
    pub power_up_footprint_radius: f32,
    pub power_up_use_squared_distances: bool,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub initial_element_count: usize,
    pub initial_power_up_count: usize,
    pub initial_snake_count: usize,
}

impl Default for MagnetTuning {
    fn default() -> Self {
        Self {
            // Elements
            element_magnet_range: ELEMENT_MAGNET_RANGE,
            element_magnet_strength: ELEMENT_MAGNET_STRENGTH,
            element_footprint_radius: ELEMENT_FOOTPRINT_RADIUS,
            element_use_squared_distances: true,
            // Power-Ups
            power_up_magnet_range: POWER_UP_MAGNET_RANGE,
            power_up_magnet_strength: POWER_UP_MAGNET_STRENGTH,
            power_up_footprint_radius: POWER_UP_FOOTPRINT_RADIUS,
            power_up_use_squared_distances: false,
            // Spawning
            initial_element_count: INITIAL_ELEMENT_COUNT,
            initial_power_up_count: INITIAL_POWER_UP_COUNT,
            initial_snake_count: INITIAL_SNAKE_COUNT,
        }
    }
}

impl MagnetTuning {
    /// Validated element profile (delta-time scaling always on for elements).
    pub fn element_profile(&self) -> SimResult<MagnetProfile> {
        MagnetProfile {
            size: self.element_footprint_radius,
            magnet_range: self.element_magnet_range,
            magnet_strength: self.element_magnet_strength,
            use_squared_distances: self.element_use_squared_distances,
            apply_delta_time: true,
        }
        .validated()
    }

    /// Validated power-up profile (raw per-frame pull).
    pub fn power_up_profile(&self) -> SimResult<MagnetProfile> {
        MagnetProfile {
            size: self.power_up_footprint_radius,
            magnet_range: self.power_up_magnet_range,
            magnet_strength: self.power_up_magnet_strength,
            use_squared_distances: self.power_up_use_squared_distances,
            apply_delta_time: false,
        }
        .validated()
    }

    /// Validated power-up profile with delta-time scaling enabled.
    pub fn power_up_with_delta_profile(&self) -> SimResult<MagnetProfile> {
        Ok(MagnetProfile {
            apply_delta_time: true,
            ..self.power_up_profile()?
        })
    }

    /// Check every profile this tuning can produce.
    pub fn validate(&self) -> SimResult<()> {
        self.element_profile()?;
        self.power_up_profile()?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/magnetism.toml` and overwrite the
/// `MagnetTuning` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse errors and invalid
/// magnet parameters are printed to stderr and the defaults kept.  A missing
/// file is silently ignored (defaults are already in place from
/// `insert_resource`).
pub fn load_magnet_tuning(mut tuning: ResMut<MagnetTuning>) {
    let path = "assets/magnetism.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<MagnetTuning>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *tuning = loaded;
                    println!("✓ Loaded magnet tuning from {path}");
                }
                Err(e) => {
                    eprintln!("⚠ Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn defaults_mirror_constants() {
        let tuning = MagnetTuning::default();
        assert_eq!(tuning.element_magnet_range, ELEMENT_MAGNET_RANGE);
        assert_eq!(tuning.element_magnet_strength, ELEMENT_MAGNET_STRENGTH);
        assert_eq!(tuning.power_up_footprint_radius, POWER_UP_FOOTPRINT_RADIUS);
        assert_eq!(tuning.initial_element_count, INITIAL_ELEMENT_COUNT);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let tuning: MagnetTuning =
            toml::from_str("element_magnet_strength = 6.5\n").expect("parse");
        assert_eq!(tuning.element_magnet_strength, 6.5);
        // Everything else stays at the compiled default.
        assert_eq!(tuning.element_magnet_range, ELEMENT_MAGNET_RANGE);
        assert_eq!(tuning.power_up_magnet_range, POWER_UP_MAGNET_RANGE);
    }

    #[test]
    fn tuned_profiles_reflect_overrides() {
        let tuning: MagnetTuning = toml::from_str(
            "element_magnet_range = 120.0\nelement_use_squared_distances = false\n",
        )
        .expect("parse");
        let profile = tuning.element_profile().unwrap();
        assert_eq!(profile.magnet_range, 120.0);
        assert!(!profile.use_squared_distances);
        assert!(profile.apply_delta_time);
    }

    #[test]
    fn unusable_tuning_is_rejected() {
        // Range no wider than the footprint leaves no attraction window.
        let tuning: MagnetTuning =
            toml::from_str("element_magnet_range = 20.0\n").expect("parse");
        assert_eq!(
            tuning.validate().unwrap_err(),
            SimError::EmptyAttractionWindow {
                range: 20.0,
                size: ELEMENT_FOOTPRINT_RADIUS
            }
        );
    }
}
