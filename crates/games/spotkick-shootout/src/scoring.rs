use spotkick_core::events::ShotOutcome;

/// Points a goal is worth.
pub const GOAL_POINTS: u32 = 1;

/// Points the shooter earns for a resolved shot.
pub fn shot_points(outcome: &ShotOutcome) -> u32 {
    if outcome.is_goal() { GOAL_POINTS } else { 0 }
}

/// Slot index of the strictly leading player, or `None` when tied.
pub fn leader(scores: [u32; 2]) -> Option<usize> {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    }
}
