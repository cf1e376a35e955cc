use spotkick_core::events::ShotOutcome;
use spotkick_core::field::{FieldLayout, Vec2, Zone};

/// Normalized goal-span position below which a crossing is Left.
pub const LEFT_ZONE_MAX: f32 = 0.33;
/// Normalized goal-span position above which a crossing is Right.
/// Both comparisons are strict, so 0.33 and 0.66 themselves land in Center.
pub const RIGHT_ZONE_MIN: f32 = 0.66;

/// Direction from the launch point to `aim`, scaled to `speed`.
///
/// The trajectory is a straight ray at fixed speed; there is no drag or
/// gravity. An aim exactly on the launch point has no direction and yields
/// a zero vector, which resolves to a miss.
pub fn launch_velocity(layout: &FieldLayout, speed: f32, aim: Vec2) -> Vec2 {
    let start = layout.launch_point();
    let dx = aim.x - start.x;
    let dy = aim.y - start.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance < f32::EPSILON {
        return Vec2::ZERO;
    }
    Vec2::new(dx / distance * speed, dy / distance * speed)
}

/// X coordinate where the ray from `start` with `velocity` crosses the goal
/// line, or `None` if it travels away from the goal or leaves the field's
/// horizontal bounds first.
pub fn goal_line_crossing(layout: &FieldLayout, start: Vec2, velocity: Vec2) -> Option<f32> {
    if velocity.y >= 0.0 {
        return None;
    }
    let t = (layout.goal_line_y - start.y) / velocity.y;
    if t < 0.0 {
        return None;
    }
    let x = start.x + velocity.x * t;
    // x is linear in t and starts inside the field, so a crossing outside
    // the horizontal bounds means the ball left the field first.
    if x < 0.0 || x > layout.width {
        return None;
    }
    Some(x)
}

/// Classify a normalized goal-span position into a zone.
pub fn classify_zone(pos: f32) -> Zone {
    if pos < LEFT_ZONE_MAX {
        Zone::Left
    } else if pos > RIGHT_ZONE_MIN {
        Zone::Right
    } else {
        Zone::Center
    }
}

/// Resolve a shot against the goalkeeper's chosen zone.
///
/// Pure: the caller applies any score change. A crossing inside the field
/// but wide of the goal mouth still classifies into the nearest zone; only
/// rays that never reach the goal line are a `Miss`.
pub fn resolve_shot(layout: &FieldLayout, gk_zone: Zone, speed: f32, aim: Vec2) -> ShotOutcome {
    let velocity = launch_velocity(layout, speed, aim);
    match goal_line_crossing(layout, layout.launch_point(), velocity) {
        None => ShotOutcome::Miss,
        Some(x) => {
            let zone = classify_zone(layout.goal_span_position(x));
            if zone == gk_zone {
                ShotOutcome::Saved { zone }
            } else {
                ShotOutcome::Goal { zone }
            }
        },
    }
}
