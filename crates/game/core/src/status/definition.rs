use crate::affinity::Element;

/// Whether a status tick hurts or heals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickMode {
    Damage,
    Heal,
}

/// Per-turn tick magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickAmount {
    Fixed(i32),
    /// `max(min, max_hp / divisor)`.
    Fraction { min: i32, divisor: i32 },
}

impl TickAmount {
    pub fn resolve(self, max_hp: i32) -> i32 {
        match self {
            TickAmount::Fixed(amount) => amount,
            TickAmount::Fraction { min, divisor } if divisor > 0 => min.max(max_hp / divisor),
            TickAmount::Fraction { min, .. } => min,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTick {
    pub mode: TickMode,
    pub amount: TickAmount,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
}

/// Who a status lands on when a skill applies it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusTarget {
    #[default]
    Enemy,
    Ally,
    SelfOnly,
}

/// Static description of a status.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusDefinition {
    /// Canonical id. Stored on combatants after resolution.
    pub id: String,
    pub aliases: Vec<String>,
    /// Skill tags that imply this status (e.g. a skill tagged `"ignite"`).
    pub combat_tags: Vec<String>,
    pub default_duration: u32,
    /// Non-blank reason blocks the carrier's turn.
    pub skip_reason: Option<String>,
    pub tick: Option<StatusTick>,
    pub outgoing_multiplier: f64,
    pub incoming_multiplier: f64,
    pub defense_bonus: i32,
    pub target: StatusTarget,
}

impl StatusDefinition {
    pub fn new(id: impl Into<String>, default_duration: u32) -> Self {
        Self {
            id: id.into(),
            default_duration,
            ..Self::default()
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| (*a).to_owned()).collect();
        self
    }

    pub fn with_combat_tags(mut self, tags: &[&str]) -> Self {
        self.combat_tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn with_skip_reason(mut self, reason: impl Into<String>) -> Self {
        self.skip_reason = Some(reason.into());
        self
    }

    pub fn with_tick(mut self, mode: TickMode, amount: TickAmount, element: Element) -> Self {
        self.tick = Some(StatusTick {
            mode,
            amount,
            element,
        });
        self
    }

    pub fn with_outgoing(mut self, multiplier: f64) -> Self {
        self.outgoing_multiplier = multiplier;
        self
    }

    pub fn with_incoming(mut self, multiplier: f64) -> Self {
        self.incoming_multiplier = multiplier;
        self
    }

    pub fn with_defense_bonus(mut self, bonus: i32) -> Self {
        self.defense_bonus = bonus;
        self
    }

    pub fn with_target(mut self, target: StatusTarget) -> Self {
        self.target = target;
        self
    }

    /// Returns the skip reason if it blocks the turn.
    pub fn blocking_reason(&self) -> Option<&str> {
        self.skip_reason
            .as_deref()
            .filter(|reason| !reason.trim().is_empty())
    }
}

impl Default for StatusDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            aliases: Vec::new(),
            combat_tags: Vec::new(),
            default_duration: 0,
            skip_reason: None,
            tick: None,
            outgoing_multiplier: 1.0,
            incoming_multiplier: 1.0,
            defense_bonus: 0,
            target: StatusTarget::Enemy,
        }
    }
}
