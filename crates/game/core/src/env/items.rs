use crate::affinity::Element;
use crate::state::ActiveBuff;

/// Item lookup and consumption hook.
///
/// The core never touches inventory; `use_item` is where the caller consumes
/// the item and reports what it does.
pub trait ItemOracle: Send + Sync {
    fn item(&self, item_id: &str) -> Option<&Item>;

    fn use_item(&self, item_id: &str) -> Option<ItemUseResult>;
}

/// Effect payload of a consumed item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    Restore {
        hp: i32,
    },
    Damage {
        amount: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        element: Element,
    },
    Buff {
        buffs: Vec<ActiveBuff>,
    },
    /// Out-of-combat unlock. No combat effect.
    LearnSchematic {
        schematic_id: String,
    },
    #[default]
    None,
}

/// Declared default target of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemTarget {
    SelfOnly,
    Enemy,
    Ally,
    Any,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: ItemEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<ItemTarget>,
}

impl Item {
    pub fn new(id: impl Into<String>, effect: ItemEffect) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            effect,
            target: None,
        }
    }

    /// Declared target, or one inferred from the effect shape.
    pub fn default_target(&self) -> ItemTarget {
        self.target.unwrap_or(match &self.effect {
            ItemEffect::Restore { .. } => ItemTarget::SelfOnly,
            ItemEffect::Damage { .. } => ItemTarget::Enemy,
            ItemEffect::Buff { .. } => ItemTarget::Ally,
            ItemEffect::LearnSchematic { .. } | ItemEffect::None => ItemTarget::Any,
        })
    }
}

/// Result of consuming one item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUseResult {
    pub item_id: String,
    pub effect: ItemEffect,
}
