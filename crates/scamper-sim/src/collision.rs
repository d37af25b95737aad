use scamper_core::body::{Body, GroundContact};
use scamper_core::geometry;
use scamper_core::level::Level;

use crate::platforms::PlatformState;

/// Slack above a one-way top when judging the previous-tick bottom edge,
/// absorbing float error from carried riders.
const ONE_WAY_TOLERANCE: f32 = 0.1;
/// Slack in the stomp comparison between the player's previous bottom edge
/// and the enemy's previous top edge.
const STOMP_TOLERANCE: f32 = 0.1;

/// What the platform sweep did to a body this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionSummary {
    /// A horizontal push-out occurred; walkers treat it as a wall hit.
    pub hit_wall: bool,
    /// A downward resolution landed the body on a platform top.
    pub landed: bool,
    /// An upward resolution bumped the body against a platform underside.
    pub hit_ceiling: bool,
}

/// Advance a body by its velocity and resolve platform collisions,
/// axis-separated: the horizontal sweep moves and pushes out of solids
/// first, then the vertical sweep lands on tops (recording the ground
/// binding) or bumps against undersides. One-way platforms never block
/// horizontal or upward motion, and catch a faller only if its bottom edge
/// started the tick at or above their top. `prev_bottom` is the body's
/// bottom edge captured after rider carry, before integration moved it.
pub fn move_and_collide(
    body: &mut Body,
    prev_bottom: f32,
    platforms: &[PlatformState],
) -> CollisionSummary {
    let mut summary = CollisionSummary::default();
    body.ground = None;

    // Horizontal sweep. The push-out direction comes from the pre-sweep
    // velocity so stacked solids all resolve the same way.
    let moving_right = body.vx > 0.0;
    let moving_horizontally = body.vx != 0.0;
    body.x += body.vx;
    if moving_horizontally {
        for platform in platforms {
            if platform.is_one_way() {
                continue;
            }
            if body.aabb().overlaps(&platform.rect) {
                body.x = geometry::resolve_x(&body.aabb(), &platform.rect, moving_right);
                body.vx = 0.0;
                summary.hit_wall = true;
            }
        }
    }

    // Vertical sweep.
    let falling = body.vy > 0.0;
    let rising = body.vy < 0.0;
    body.y += body.vy;
    for (index, platform) in platforms.iter().enumerate() {
        if !body.aabb().overlaps(&platform.rect) {
            continue;
        }
        if platform.is_one_way() {
            if falling && prev_bottom <= platform.rect.top() + ONE_WAY_TOLERANCE {
                land(body, index, platform);
                summary.landed = true;
            }
            continue;
        }
        if falling {
            land(body, index, platform);
            summary.landed = true;
        } else if rising {
            body.y = geometry::resolve_y(&body.aabb(), &platform.rect, false);
            body.vy = 0.0;
            summary.hit_ceiling = true;
        }
    }

    summary
}

fn land(body: &mut Body, index: usize, platform: &PlatformState) {
    body.y = platform.rect.y - body.h;
    body.vy = 0.0;
    body.ground = Some(GroundContact {
        platform: index,
        surface: platform.surface(),
    });
}

/// Clamp a body inside the level's horizontal bounds, zeroing vx at either
/// wall. Returns true if a bound was hit.
pub fn clamp_to_level(body: &mut Body, level: &Level) -> bool {
    if body.x < 0.0 {
        body.x = 0.0;
        body.vx = 0.0;
        true
    } else if body.right() > level.width {
        body.x = level.width - body.w;
        body.vx = 0.0;
        true
    } else {
        false
    }
}

/// Classify a player-enemy overlap: a stomp requires the player's bottom
/// edge to have been at or above the enemy's top edge on the previous
/// tick; any other overlap is side contact.
pub fn is_stomp(player_prev_bottom: f32, enemy_prev_top: f32) -> bool {
    player_prev_bottom <= enemy_prev_top + STOMP_TOLERANCE
}
