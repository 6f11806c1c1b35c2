use super::Tick;

/// Turn bookkeeping advanced by the engine after turn-consuming actions.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Number of turns that have elapsed.
    pub clock: Tick,

    /// Sequential identifier incremented for every executed action,
    /// turn-free ones included.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_clock(&mut self) {
        self.clock = self.clock.saturating_add(1);
    }

    pub fn next_nonce(&mut self) -> u64 {
        let nonce = self.action_nonce;
        self.action_nonce = self.action_nonce.saturating_add(1);
        nonce
    }
}
