//! Attack definitions.
//!
//! A [`Move`] is tagged with a [`MoveKind`] instead of living in a class
//! hierarchy, and any secondary payload (lifesteal healing, guard shield,
//! magic buff) is carried by [`MoveEffect`]. Damage resolution reads only the
//! damage, penetration and critical fields; effects are inert.

mod catalog;

pub use catalog::{MoveCatalog, MoveChoice, MoveSlot};

/// Capability a move belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Physical,
    Magic,
}

/// Secondary payload attached to a move variant.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveEffect {
    #[default]
    None,
    /// Health restored to the attacker.
    Lifesteal { healing: f64 },
    /// Shield granted to the attacker.
    Guard { shield: f64 },
    /// Bonus magic damage granted to the attacker.
    MagicUp { bonus_magic_damage: f64 },
}

/// Flat and percent reduction of one mitigation stat.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penetration {
    pub flat: f64,
    /// Fraction of the raw mitigation stat discounted on top of `flat`.
    pub percent: f64,
}

impl Penetration {
    pub const NONE: Self = Self {
        flat: 0.0,
        percent: 0.0,
    };

    pub const fn new(flat: f64, percent: f64) -> Self {
        Self { flat, percent }
    }
}

/// A single attack definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub kind: MoveKind,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor_penetration: Penetration,
    pub magic_penetration: Penetration,
    /// Percentage in `0..=100`.
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub effect: MoveEffect,
}

impl Move {
    pub const DEFAULT_BASE_DAMAGE: f64 = 3.0;
    pub const DEFAULT_CRITICAL_CHANCE: f64 = 10.0;
    pub const DEFAULT_CRITICAL_MULTIPLIER: f64 = 1.5;

    /// Physical move with the default 3.0 physical damage and 10% / 1.5x crit.
    pub fn physical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MoveKind::Physical,
            physical_damage: Self::DEFAULT_BASE_DAMAGE,
            magic_damage: 0.0,
            armor_penetration: Penetration::NONE,
            magic_penetration: Penetration::NONE,
            critical_chance: Self::DEFAULT_CRITICAL_CHANCE,
            critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
            effect: MoveEffect::None,
        }
    }

    /// Magic move with the default 3.0 magic damage and 10% / 1.5x crit.
    pub fn magic(name: impl Into<String>) -> Self {
        Self {
            kind: MoveKind::Magic,
            physical_damage: 0.0,
            magic_damage: Self::DEFAULT_BASE_DAMAGE,
            ..Self::physical(name)
        }
    }

    #[must_use]
    pub fn with_damage(mut self, physical: f64, magic: f64) -> Self {
        self.physical_damage = physical;
        self.magic_damage = magic;
        self
    }

    #[must_use]
    pub fn with_armor_penetration(mut self, flat: f64, percent: f64) -> Self {
        self.armor_penetration = Penetration::new(flat, percent);
        self
    }

    #[must_use]
    pub fn with_magic_penetration(mut self, flat: f64, percent: f64) -> Self {
        self.magic_penetration = Penetration::new(flat, percent);
        self
    }

    #[must_use]
    pub fn with_critical(mut self, chance: f64, multiplier: f64) -> Self {
        self.critical_chance = chance;
        self.critical_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: MoveEffect) -> Self {
        self.effect = effect;
        self
    }
}
