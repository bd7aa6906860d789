use super::{Combatant, CombatantId};

/// Player and enemy rosters used to begin an encounter.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSetup {
    /// Player and ally combatants.
    pub party: Vec<Combatant>,
    pub enemies: Vec<Combatant>,
    /// Encounter seed; `None` draws one from the process-global generator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl CombatSetup {
    pub fn new(party: Vec<Combatant>, enemies: Vec<Combatant>) -> Self {
        Self {
            party,
            enemies,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One slot of the fixed initiative order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSlot {
    pub combatant_id: CombatantId,
    pub initiative: i32,
}
