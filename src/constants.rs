//! Centralised magnetism and world constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//!
//! ## Tuning guidance
//!
//! Each constant includes the tested range and the observable consequence of
//! changing it.  Runtime overrides go in `assets/magnetism.toml` (see
//! [`crate::config`]); the values below remain the authoritative defaults.

// ── Frame Timing ──────────────────────────────────────────────────────────────

/// Duration of one reference frame (seconds) at the 60 fps baseline.
///
/// The per-tick delta-time factor is `delta_secs / REFERENCE_FRAME_SECS`, so a
/// profile with delta scaling enabled pulls exactly its configured strength per
/// frame at 60 fps, half of it at 120 fps, and so on.  Changing this rescales
/// every delta-scaled magnet strength in the game at once.
pub const REFERENCE_FRAME_SECS: f32 = 1.0 / 60.0;

// ── Magnetism: Elements ───────────────────────────────────────────────────────

/// Maximum distance (world units) at which an element begins drifting toward a
/// snake.
///
/// Tested range: 60–160.  At 100 an element two snake-widths away visibly
/// "wakes up"; above ~200 the whole board creeps toward the player and element
/// clusters smear out before the snake arrives.
pub const ELEMENT_MAGNET_RANGE: f32 = 100.0;

/// Maximum per-frame pull (world units) on an element at the minimum-approach
/// boundary.
///
/// Falloff is linear from this value down to zero at [`ELEMENT_MAGNET_RANGE`].
/// Tested range: 2.0–8.0.  At 4.0 an element 60 u away closes on the snake in
/// roughly half a second; above ~10 pickups teleport visibly.
pub const ELEMENT_MAGNET_STRENGTH: f32 = 4.0;

/// Footprint radius (world units) of an element.
///
/// Doubles as the minimum-approach threshold: inside this distance the element
/// counts as already "at" the snake and receives no further pull.
pub const ELEMENT_FOOTPRINT_RADIUS: f32 = 20.0;

// ── Magnetism: Power-Ups ──────────────────────────────────────────────────────

/// Maximum attraction distance (world units) for power-ups.
/// Wider than elements so rare pickups are harder to miss.
pub const POWER_UP_MAGNET_RANGE: f32 = 150.0;

/// Maximum per-frame pull (world units) on a power-up.
pub const POWER_UP_MAGNET_STRENGTH: f32 = 5.0;

/// Footprint radius (world units) of a power-up.
pub const POWER_UP_FOOTPRINT_RADIUS: f32 = 25.0;

// ── Magnetism: Shared ─────────────────────────────────────────────────────────

/// Fallback minimum-approach threshold (world units) used when a profile's
/// footprint is zero/unset.
///
/// Keeps the attraction window well-defined for ad-hoc profiles built without
/// an explicit size; the strict lower bound on the window also rules out the
/// coincident case before direction normalisation.
pub const DEFAULT_FOOTPRINT_RADIUS: f32 = 16.0;

// ── World Bounds ──────────────────────────────────────────────────────────────

/// Width of the playfield (world units).  Collectibles spawn within
/// ±WORLD_WIDTH/2 of the origin.
pub const WORLD_WIDTH: f32 = 4000.0;

/// Height of the playfield (world units).
pub const WORLD_HEIGHT: f32 = 4000.0;

/// Margin kept clear between spawned collectibles and the playfield edge.
pub const SPAWN_MARGIN: f32 = 150.0;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Number of elements seeded into the world at startup.
///
/// Increasing this densifies the opening board; the magnetism pass is O(snakes
/// × collectibles) per tick, so very large counts (> ~5000) start to show up
/// in frame times before anything else does.
pub const INITIAL_ELEMENT_COUNT: usize = 150;

/// Number of power-ups seeded into the world at startup.
pub const INITIAL_POWER_UP_COUNT: usize = 6;

/// Number of wandering demo snakes spawned when no scenario is selected.
pub const INITIAL_SNAKE_COUNT: usize = 4;

// ── Snake Drift ───────────────────────────────────────────────────────────────

/// Forward speed (u/s) of a wandering demo snake.
pub const SNAKE_DRIFT_SPEED: f32 = 180.0;

/// Maximum random heading change (rad/s) applied to a wandering snake.
///
/// Higher values make demo snakes jittery; lower values send them on long
/// straight runs until the boundary turn-around kicks in.
pub const SNAKE_TURN_RATE: f32 = 1.2;
