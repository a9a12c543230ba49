//! Magnetic attraction: collectibles drift toward nearby snakes.
//!
//! ## Design
//!
//! Every attractable entity carries a [`Magnetic`] component embedding a
//! validated [`MagnetProfile`].  Once per tick [`magnetism_system`] snapshots
//! the live snake set into a plain list of [`SnakePoint`]s and runs
//! [`apply_magnetism`] — a pure function over that list — for each entity.
//! Keeping the core routine free of ECS types means unit tests can drive it
//! with synthetic snake sets and exact numbers.
//!
//! | Item                | Role                                                |
//! |---------------------|-----------------------------------------------------|
//! | [`MagnetProfile`]   | Per-entity-type range/strength/strategy parameters  |
//! | [`Magnetic`]        | Component attaching a profile to an entity          |
//! | [`SnakePoint`]      | Read-only per-tick view of one snake head           |
//! | [`apply_magnetism`] | One simulation step for one entity                  |
//! | [`magnetism_system`]| Bevy wiring: snapshot snakes, step every entity     |
//!
//! ## Attraction window
//!
//! A snake attracts an entity only when their distance is **strictly** inside
//! `(min_approach, magnet_range)`.  Below the minimum-approach threshold the
//! entity is already "at" the snake (the pickup pass takes over); at or beyond
//! the range there is no pull.  Pull magnitude falls off linearly:
//! `(1 − distance/range) × strength`, maximal at the inner boundary and
//! approaching zero at the outer one.
//!
//! The squared-distance strategy performs the window test on `dx² + dy²` and
//! only pays for a square root once an agent is known to be inside the window.
//! This check runs for every snake × every collectible × every tick, so the
//! saved square roots are the bulk of the routine's cost on a dense board.
//! Both strategies must agree on every inclusion decision; the flag trades
//! precision characteristics, never behaviour.

use crate::constants::{
    DEFAULT_FOOTPRINT_RADIUS, ELEMENT_FOOTPRINT_RADIUS, ELEMENT_MAGNET_RANGE,
    ELEMENT_MAGNET_STRENGTH, POWER_UP_FOOTPRINT_RADIUS, POWER_UP_MAGNET_RANGE,
    POWER_UP_MAGNET_STRENGTH, REFERENCE_FRAME_SECS,
};
use crate::error::{validate_footprint, validate_magnet_range, validate_magnet_strength, SimResult};
use crate::snake::SnakeAgent;
use bevy::prelude::*;

// ── Profile ───────────────────────────────────────────────────────────────────

/// Magnetism parameters for one attractable entity type.
///
/// Presets ([`MagnetProfile::ELEMENT`], [`MagnetProfile::POWER_UP`],
/// [`MagnetProfile::POWER_UP_WITH_DELTA`]) are plain data; override individual
/// fields with struct-update syntax and re-validate:
///
/// ```rust
/// use infinite_snake::magnet::MagnetProfile;
///
/// let greedy = MagnetProfile {
///     magnet_strength: 8.0,
///     ..MagnetProfile::ELEMENT
/// }
/// .validated()
/// .unwrap();
/// # assert_eq!(greedy.magnet_strength, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetProfile {
    /// Footprint radius (world units); the minimum-approach threshold.
    /// Zero means "unset" and resolves to [`DEFAULT_FOOTPRINT_RADIUS`].
    pub size: f32,
    /// Maximum distance at which attraction begins.  Must be positive and
    /// strictly greater than `size`.
    pub magnet_range: f32,
    /// Pull (world units per reference frame) at the minimum-approach
    /// boundary.  Must be ≥ 0.
    pub magnet_strength: f32,
    /// Window-test strategy: compare squared distances and defer the square
    /// root until an agent is inside the window.
    pub use_squared_distances: bool,
    /// Scale the pull by the per-tick delta-time factor so displacement per
    /// second is frame-rate independent.
    pub apply_delta_time: bool,
}

impl MagnetProfile {
    /// Common collectible elements: short range, squared-distance fast path,
    /// frame-rate-independent pull.
    pub const ELEMENT: MagnetProfile = MagnetProfile {
        size: ELEMENT_FOOTPRINT_RADIUS,
        magnet_range: ELEMENT_MAGNET_RANGE,
        magnet_strength: ELEMENT_MAGNET_STRENGTH,
        use_squared_distances: true,
        apply_delta_time: true,
    };

    /// Power-ups: wider window and stronger pull, direct distances, raw
    /// per-frame pull.
    pub const POWER_UP: MagnetProfile = MagnetProfile {
        size: POWER_UP_FOOTPRINT_RADIUS,
        magnet_range: POWER_UP_MAGNET_RANGE,
        magnet_strength: POWER_UP_MAGNET_STRENGTH,
        use_squared_distances: false,
        apply_delta_time: false,
    };

    /// [`MagnetProfile::POWER_UP`] with delta-time scaling enabled.
    pub const POWER_UP_WITH_DELTA: MagnetProfile = MagnetProfile {
        apply_delta_time: true,
        ..MagnetProfile::POWER_UP
    };

    /// Validate every configuration-time invariant, consuming and returning
    /// the profile so it chains off struct-update construction.
    pub fn validated(self) -> SimResult<Self> {
        validate_footprint(self.size)?;
        validate_magnet_strength(self.magnet_strength)?;
        // Range is checked against the resolved threshold so a zero size
        // cannot smuggle in a window narrower than the fallback footprint.
        validate_magnet_range(self.magnet_range, self.min_approach())?;
        Ok(self)
    }

    /// The minimum-approach threshold: the configured footprint, or the
    /// type-default fallback when the footprint is zero/unset.
    #[inline]
    pub fn min_approach(&self) -> f32 {
        if self.size > 0.0 {
            self.size
        } else {
            DEFAULT_FOOTPRINT_RADIUS
        }
    }
}

// ── Components & views ────────────────────────────────────────────────────────

/// Attaches a magnetism profile to an attractable entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Magnetic {
    pub profile: MagnetProfile,
}

/// Read-only snapshot of one snake head, taken once per tick.
///
/// The core routine never touches snake entities directly; it consumes a list
/// of these, which the caller owns and refreshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakePoint {
    pub pos: Vec2,
    pub alive: bool,
}

// ── Core routine ──────────────────────────────────────────────────────────────

/// Apply one step of magnetic attraction to `pos`.
///
/// Accumulates the pull of every live snake strictly inside the attraction
/// window and applies the summed displacement once.  Every contribution is
/// measured from the position `pos` held on entry, so the result equals the
/// vector sum of each snake's individually-computed pull.
///
/// `delta_factor` is elapsed time normalised to the reference frame duration
/// (1.0 ≈ one frame at 60 fps); it scales the pull only for profiles with
/// `apply_delta_time` set.  Pass 1.0 when stepping outside a timed loop.
///
/// The profile is assumed validated: a non-positive range would divide by
/// zero here, which is exactly what [`MagnetProfile::validated`] exists to
/// rule out.
pub fn apply_magnetism(
    pos: &mut Vec2,
    profile: &MagnetProfile,
    snakes: &[SnakePoint],
    delta_factor: f32,
) {
    let origin = *pos;
    let min_approach = profile.min_approach();
    let mut displacement = Vec2::ZERO;

    for snake in snakes {
        if !snake.alive {
            continue;
        }
        let delta = snake.pos - origin;

        // Window test, then distance.  The squared path defers the square
        // root until the agent is known to be inside the window; a coincident
        // snake (distance 0) fails the strict lower bound in both paths, so
        // the normalisation below never divides by zero.
        let distance = if profile.use_squared_distances {
            let d2 = delta.length_squared();
            if d2 >= profile.magnet_range * profile.magnet_range
                || d2 <= min_approach * min_approach
            {
                continue;
            }
            d2.sqrt()
        } else {
            let d = delta.length();
            if d >= profile.magnet_range || d <= min_approach {
                continue;
            }
            d
        };

        let mut pull = (1.0 - distance / profile.magnet_range) * profile.magnet_strength;
        if profile.apply_delta_time {
            pull *= delta_factor;
        }
        displacement += (delta / distance) * pull;
    }

    *pos = origin + displacement;
}

// ── System ────────────────────────────────────────────────────────────────────

/// Per-tick magnetism pass: snapshot the snake set, then step every magnetic
/// entity against it.
///
/// The snapshot is taken once and shared read-only across all entities this
/// tick, matching the contract that no entity's update mutates snake state.
/// `Without<SnakeAgent>` keeps the two sets disjoint so a snake can never be
/// attracted to itself.
pub fn magnetism_system(
    time: Res<Time>,
    q_snakes: Query<(&Transform, &SnakeAgent)>,
    mut q_magnetic: Query<(&mut Transform, &Magnetic), Without<SnakeAgent>>,
) {
    let snakes: Vec<SnakePoint> = q_snakes
        .iter()
        .map(|(transform, agent)| SnakePoint {
            pos: transform.translation.truncate(),
            alive: agent.alive,
        })
        .collect();
    if snakes.is_empty() {
        return;
    }

    let delta_factor = time.delta_secs() / REFERENCE_FRAME_SECS;

    for (mut transform, magnetic) in q_magnetic.iter_mut() {
        let mut pos = transform.translation.truncate();
        apply_magnetism(&mut pos, &magnetic.profile, &snakes, delta_factor);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
