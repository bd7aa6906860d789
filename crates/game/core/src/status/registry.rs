use std::collections::HashMap;

use crate::affinity::Element;
use crate::stats::normalize_key;

use super::{StatusDefinition, StatusTarget, TickAmount, TickMode};

/// Case-insensitive lookup table from status id, alias or combat tag to its
/// definition.
///
/// Built once per content load and shared read-only by the engine.
#[derive(Clone, Debug, Default)]
pub struct StatusRegistry {
    definitions: Vec<StatusDefinition>,
    index: HashMap<String, usize>,
    tags: HashMap<String, usize>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = StatusDefinition>) -> Self {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition);
        }
        registry
    }

    /// Registers a definition.
    ///
    /// Re-registering an id replaces the previous definition together with
    /// its aliases and combat tags. Aliases never shadow a canonical id, and
    /// the first definition to claim a combat tag keeps it.
    pub fn register(&mut self, mut definition: StatusDefinition) {
        definition.id = normalize_key(&definition.id);
        let id = definition.id.clone();

        let slot = match self.index.get(&id) {
            Some(&existing) if self.definitions[existing].id == id => {
                self.index.retain(|_, slot| *slot != existing);
                self.tags.retain(|_, slot| *slot != existing);
                self.definitions[existing] = definition;
                existing
            }
            _ => {
                self.definitions.push(definition);
                self.definitions.len() - 1
            }
        };
        self.index.insert(id, slot);

        let definition = &self.definitions[slot];
        for alias in &definition.aliases {
            let alias = normalize_key(alias);
            let claimed_by_id = self
                .index
                .get(&alias)
                .is_some_and(|&other| self.definitions[other].id == alias);
            if !claimed_by_id {
                self.index.insert(alias, slot);
            }
        }
        for tag in &definition.combat_tags {
            self.tags.entry(normalize_key(tag)).or_insert(slot);
        }
    }

    /// Resolves a canonical id or alias.
    pub fn definition(&self, id_or_alias: &str) -> Option<&StatusDefinition> {
        self.index
            .get(&normalize_key(id_or_alias))
            .map(|&slot| &self.definitions[slot])
    }

    /// Resolves the definition implied by a skill combat tag.
    pub fn by_combat_tag(&self, tag: &str) -> Option<&StatusDefinition> {
        self.tags
            .get(&normalize_key(tag))
            .map(|&slot| &self.definitions[slot])
    }

    /// Canonical id for a status reference; unknown ids are only normalized.
    pub fn canonical_id(&self, id_or_alias: &str) -> String {
        self.definition(id_or_alias)
            .map(|definition| definition.id.clone())
            .unwrap_or_else(|| normalize_key(id_or_alias))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Default status set used when no content file is supplied.
    pub fn builtin() -> Self {
        Self::from_definitions([
            StatusDefinition::new("stun", 1)
                .with_aliases(&["stunned", "daze", "dazed"])
                .with_combat_tags(&["stun", "concuss"])
                .with_skip_reason("stunned"),
            StatusDefinition::new("sleep", 2)
                .with_aliases(&["asleep"])
                .with_combat_tags(&["sleep", "lullaby"])
                .with_skip_reason("asleep"),
            StatusDefinition::new("freeze", 1)
                .with_aliases(&["frozen"])
                .with_combat_tags(&["freeze"])
                .with_skip_reason("frozen"),
            StatusDefinition::new("burn", 3)
                .with_aliases(&["burning", "ignite"])
                .with_combat_tags(&["burn", "ignite"])
                .with_tick(
                    TickMode::Damage,
                    TickAmount::Fraction { min: 1, divisor: 16 },
                    Element::Fire,
                ),
            StatusDefinition::new("poison", 3)
                .with_aliases(&["poisoned", "toxin"])
                .with_combat_tags(&["poison", "venom"])
                .with_tick(
                    TickMode::Damage,
                    TickAmount::Fraction { min: 1, divisor: 12 },
                    Element::Toxic,
                ),
            StatusDefinition::new("bleed", 3)
                .with_aliases(&["bleeding"])
                .with_combat_tags(&["bleed", "lacerate"])
                .with_tick(TickMode::Damage, TickAmount::Fixed(3), Element::Physical),
            StatusDefinition::new("regen", 3)
                .with_aliases(&["regenerating", "regeneration"])
                .with_combat_tags(&["regen"])
                .with_tick(
                    TickMode::Heal,
                    TickAmount::Fraction { min: 1, divisor: 10 },
                    Element::Physical,
                )
                .with_target(StatusTarget::Ally),
            StatusDefinition::new("defend", 2)
                .with_aliases(&["defending", "guarding"])
                .with_incoming(0.5)
                .with_target(StatusTarget::SelfOnly),
            StatusDefinition::new("weaken", 2)
                .with_aliases(&["weakened"])
                .with_combat_tags(&["weaken", "sap"])
                .with_outgoing(0.75),
            StatusDefinition::new("empower", 2)
                .with_aliases(&["empowered"])
                .with_combat_tags(&["empower", "rally"])
                .with_outgoing(1.25)
                .with_target(StatusTarget::Ally),
            StatusDefinition::new("exposed", 2)
                .with_aliases(&["vulnerable", "expose"])
                .with_combat_tags(&["expose", "shred"])
                .with_incoming(1.25),
            StatusDefinition::new("shielded", 2)
                .with_aliases(&["shield", "barrier"])
                .with_combat_tags(&["shield", "barrier"])
                .with_defense_bonus(6)
                .with_target(StatusTarget::Ally),
            StatusDefinition::new("target_lock", 3)
                .with_aliases(&["lock", "locked", "mark", "marked"])
                .with_combat_tags(&["mark", "lock_on"]),
        ])
    }
}
