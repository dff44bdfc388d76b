/// Whose turn it is.
///
/// Exactly one phase is active at a time and only the turn scheduler moves
/// between them. `Setup` blocks every actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Setup,
    Controlling,
    Autonomous,
}

impl TurnPhase {
    pub fn is_controlling(self) -> bool {
        self == TurnPhase::Controlling
    }
}
