use serde::{Deserialize, Serialize};

/// Abstract per-tick input delivered by the input-mapping collaborator.
/// `jump` is edge-triggered: true only on the tick the jump control went
/// down, never while it is merely held. The mapper owns the per-keypress
/// consumed flag; the simulation just applies the impulse when grounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl PlayerIntent {
    /// Net commanded direction: -1.0, 0.0, or 1.0. Opposing inputs cancel.
    pub fn move_dir(&self) -> f32 {
        (self.move_right as i8 - self.move_left as i8) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_dir_resolves_inputs() {
        assert_eq!(PlayerIntent::default().move_dir(), 0.0);
        assert_eq!(
            PlayerIntent {
                move_right: true,
                ..Default::default()
            }
            .move_dir(),
            1.0
        );
        assert_eq!(
            PlayerIntent {
                move_left: true,
                ..Default::default()
            }
            .move_dir(),
            -1.0
        );
    }

    #[test]
    fn opposing_inputs_cancel() {
        let both = PlayerIntent {
            move_left: true,
            move_right: true,
            jump: false,
        };
        assert_eq!(both.move_dir(), 0.0, "Left + right must cancel to 0");
    }
}
