use serde::{Deserialize, Serialize};

/// Events produced by one simulation tick, reported so the UI/audio
/// collaborators can react without re-deriving state. Counters cover the
/// rare ticks where several of the same event land at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Player took damage this tick (hazard, side contact, or fall).
    pub damage_taken: bool,
    /// Enemies destroyed by stomping this tick.
    pub enemies_stomped: u32,
    /// Powerups collected this tick.
    pub powerups_collected: u32,
    /// Enemies injected by the progression controller this tick.
    pub enemies_spawned: u32,
    /// Set exactly once, on the tick lives reached zero.
    pub player_defeated: bool,
}

impl FrameOutcome {
    /// True when anything observable happened this tick.
    pub fn any(&self) -> bool {
        self.damage_taken
            || self.player_defeated
            || self.enemies_stomped > 0
            || self.powerups_collected > 0
            || self.enemies_spawned > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_outcome_is_quiet() {
        let outcome = FrameOutcome::default();
        assert!(!outcome.any(), "A default outcome reports no events");
    }

    #[test]
    fn any_detects_each_field() {
        let mut outcome = FrameOutcome::default();
        outcome.enemies_stomped = 1;
        assert!(outcome.any());

        let mut outcome = FrameOutcome::default();
        outcome.damage_taken = true;
        assert!(outcome.any());

        let mut outcome = FrameOutcome::default();
        outcome.enemies_spawned = 2;
        assert!(outcome.any());
    }
}
