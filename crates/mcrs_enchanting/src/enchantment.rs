use derive_more::{Display, From, Into};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Numeric enchantment identifier.
///
/// Ids outside [`ENCHANTMENT_NAMES`] are still valid set keys, they just have no name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Debug, Display, From, Into)]
pub struct EnchantmentId(pub u16);

impl EnchantmentId {
    pub const PROTECTION: EnchantmentId = EnchantmentId(0);
    pub const FIRE_PROTECTION: EnchantmentId = EnchantmentId(1);
    pub const FEATHER_FALLING: EnchantmentId = EnchantmentId(2);
    pub const BLAST_PROTECTION: EnchantmentId = EnchantmentId(3);
    pub const PROJECTILE_PROTECTION: EnchantmentId = EnchantmentId(4);
    pub const RESPIRATION: EnchantmentId = EnchantmentId(5);
    pub const AQUA_AFFINITY: EnchantmentId = EnchantmentId(6);
    pub const THORNS: EnchantmentId = EnchantmentId(7);
    pub const SHARPNESS: EnchantmentId = EnchantmentId(16);
    pub const SMITE: EnchantmentId = EnchantmentId(17);
    pub const BANE_OF_ARTHROPODS: EnchantmentId = EnchantmentId(18);
    pub const KNOCKBACK: EnchantmentId = EnchantmentId(19);
    pub const FIRE_ASPECT: EnchantmentId = EnchantmentId(20);
    pub const LOOTING: EnchantmentId = EnchantmentId(21);
    pub const EFFICIENCY: EnchantmentId = EnchantmentId(32);
    pub const SILK_TOUCH: EnchantmentId = EnchantmentId(33);
    pub const UNBREAKING: EnchantmentId = EnchantmentId(34);
    pub const FORTUNE: EnchantmentId = EnchantmentId(35);
    pub const POWER: EnchantmentId = EnchantmentId(48);
    pub const PUNCH: EnchantmentId = EnchantmentId(49);
    pub const FLAME: EnchantmentId = EnchantmentId(50);
    pub const INFINITY: EnchantmentId = EnchantmentId(51);
    pub const LUCK_OF_THE_SEA: EnchantmentId = EnchantmentId(61);
    pub const LURE: EnchantmentId = EnchantmentId(62);

    /// Resolves a textual id: a decimal number, or a canonical name compared
    /// case-insensitively. Returns `None` when neither matches.
    pub fn from_name(name: &str) -> Option<EnchantmentId> {
        if let Ok(id) = name.parse::<u16>() {
            return Some(EnchantmentId(id));
        }
        ENCHANTMENT_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    /// Canonical name, if this id is one of the known enchantments.
    pub fn name(self) -> Option<&'static str> {
        ENCHANTMENT_NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, n)| *n)
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

pub const ENCHANTMENT_NAMES: [(EnchantmentId, &str); 24] = [
    (EnchantmentId::PROTECTION, "Protection"),
    (EnchantmentId::FIRE_PROTECTION, "FireProtection"),
    (EnchantmentId::FEATHER_FALLING, "FeatherFalling"),
    (EnchantmentId::BLAST_PROTECTION, "BlastProtection"),
    (EnchantmentId::PROJECTILE_PROTECTION, "ProjectileProtection"),
    (EnchantmentId::RESPIRATION, "Respiration"),
    (EnchantmentId::AQUA_AFFINITY, "AquaAffinity"),
    (EnchantmentId::THORNS, "Thorns"),
    (EnchantmentId::SHARPNESS, "Sharpness"),
    (EnchantmentId::SMITE, "Smite"),
    (EnchantmentId::BANE_OF_ARTHROPODS, "BaneOfArthropods"),
    (EnchantmentId::KNOCKBACK, "Knockback"),
    (EnchantmentId::FIRE_ASPECT, "FireAspect"),
    (EnchantmentId::LOOTING, "Looting"),
    (EnchantmentId::EFFICIENCY, "Efficiency"),
    (EnchantmentId::SILK_TOUCH, "SilkTouch"),
    (EnchantmentId::UNBREAKING, "Unbreaking"),
    (EnchantmentId::FORTUNE, "Fortune"),
    (EnchantmentId::POWER, "Power"),
    (EnchantmentId::PUNCH, "Punch"),
    (EnchantmentId::FLAME, "Flame"),
    (EnchantmentId::INFINITY, "Infinity"),
    (EnchantmentId::LUCK_OF_THE_SEA, "LuckOfTheSea"),
    (EnchantmentId::LURE, "Lure"),
];

// Known ids serialize as their canonical name, anything else as a number.
impl Serialize for EnchantmentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u16(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for EnchantmentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnchantmentIdVisitor;

        impl Visitor<'_> for EnchantmentIdVisitor {
            type Value = EnchantmentId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an enchantment name or numeric id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u16::try_from(v)
                    .map(EnchantmentId)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u16::try_from(v)
                    .map(EnchantmentId)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                EnchantmentId::from_name(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(EnchantmentIdVisitor)
    }
}
