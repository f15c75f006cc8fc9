use crate::enchantment::EnchantmentId;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Sparse map of enchantment id to level.
///
/// A stored level is always at least 1: assigning zero or less removes the entry.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Enchantments {
    map: FxHashMap<EnchantmentId, i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnchantmentSpecError {
    #[error("malformed enchantment declaration \"{0}\"")]
    Malformed(String),
    #[error("unknown enchantment \"{0}\"")]
    UnknownEnchantment(String),
    #[error("invalid enchantment level \"{0}\"")]
    InvalidLevel(String),
}

impl Enchantments {
    pub const fn empty() -> Self {
        Self {
            map: FxHashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Builds a set from a `id=level;id=level` spec, skipping malformed declarations.
    pub fn parse(spec: &str) -> Self {
        let mut enchantments = Self::empty();
        enchantments.add_from_text(spec);
        enchantments
    }

    pub fn single(id: EnchantmentId, level: i32) -> Self {
        let mut enchantments = Self::empty();
        enchantments.set_level(id, level);
        enchantments
    }

    /// Merges a textual spec into this set. Later declarations overwrite
    /// earlier ones; bad declarations are logged and skipped.
    pub fn add_from_text(&mut self, spec: &str) {
        for decl in spec.split(';') {
            if decl.trim().is_empty() {
                continue;
            }
            match Self::parse_decl(decl) {
                Ok((id, level)) => self.set_level(id, level),
                Err(err) => warn!(decl, %err, "skipping enchantment declaration"),
            }
        }
    }

    /// Parses a single `id=level` declaration.
    pub fn parse_decl(decl: &str) -> Result<(EnchantmentId, i32), EnchantmentSpecError> {
        let mut parts = decl.split('=').map(str::trim);
        let (Some(id), Some(level), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EnchantmentSpecError::Malformed(decl.to_string()));
        };
        let id = EnchantmentId::from_name(id)
            .ok_or_else(|| EnchantmentSpecError::UnknownEnchantment(id.to_string()))?;
        let level = level
            .parse::<i32>()
            .map_err(|_| EnchantmentSpecError::InvalidLevel(level.to_string()))?;
        Ok((id, level))
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn get_level(&self, id: EnchantmentId) -> i32 {
        self.map.get(&id).copied().unwrap_or(0)
    }

    pub fn set_level(&mut self, id: EnchantmentId, level: i32) {
        if level <= 0 {
            self.map.remove(&id);
        } else {
            self.map.insert(id, level);
        }
    }

    pub fn has_enchantment(&self, id: EnchantmentId) -> bool {
        self.map.contains_key(&id)
    }

    /// Copies every level of `other` into this set, overwriting shared ids.
    pub fn merge(&mut self, other: &Enchantments) {
        for (id, level) in other.iter() {
            self.set_level(id, level);
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnchantmentId, i32)> + '_ {
        self.map.iter().map(|(id, level)| (*id, *level))
    }

    pub fn ids(&self) -> impl Iterator<Item = EnchantmentId> + '_ {
        self.map.keys().copied()
    }
}

impl fmt::Display for Enchantments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, level) in self.iter() {
            write!(f, "{id}={level};")?;
        }
        Ok(())
    }
}

impl FromStr for Enchantments {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<(EnchantmentId, i32)> for Enchantments {
    fn from_iter<T: IntoIterator<Item = (EnchantmentId, i32)>>(iter: T) -> Self {
        let mut enchantments = Self::empty();
        for (id, level) in iter {
            enchantments.set_level(id, level);
        }
        enchantments
    }
}

impl Serialize for Enchantments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Enchantments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Ok(Self::parse(&spec))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn missing_level_is_zero() {
        let enchantments = Enchantments::empty();
        assert_eq!(enchantments.get_level(EnchantmentId::SHARPNESS), 0);
        assert!(enchantments.is_empty());
    }

    #[test]
    fn set_level_zero_removes() {
        let mut enchantments = Enchantments::parse("Sharpness=3;Unbreaking=1");
        enchantments.set_level(EnchantmentId::SHARPNESS, 0);
        assert_eq!(enchantments.get_level(EnchantmentId::SHARPNESS), 0);
        assert!(!enchantments.ids().any(|id| id == EnchantmentId::SHARPNESS));
        assert_eq!(enchantments.len(), 1);

        enchantments.set_level(EnchantmentId::UNBREAKING, -4);
        assert!(enchantments.is_empty());

        // removing an absent id is a no-op
        enchantments.set_level(EnchantmentId::LURE, 0);
        assert!(enchantments.is_empty());
    }

    #[test]
    fn parses_names_and_numbers() {
        let enchantments = Enchantments::parse("sharpness=4; 34 = 2;LuckOfTheSea=1;");
        assert_eq!(enchantments.get_level(EnchantmentId::SHARPNESS), 4);
        assert_eq!(enchantments.get_level(EnchantmentId::UNBREAKING), 2);
        assert_eq!(enchantments.get_level(EnchantmentId::LUCK_OF_THE_SEA), 1);
        assert_eq!(enchantments.len(), 3);
    }

    #[test]
    fn malformed_segments_are_skipped() {
        let enchantments =
            Enchantments::parse("Sharpness;Smite=2=3;Mending=1;Looting=abc;;Knockback=2");
        assert_eq!(enchantments, Enchantments::single(EnchantmentId::KNOCKBACK, 2));
    }

    #[test]
    fn later_declarations_overwrite() {
        let enchantments = Enchantments::parse("Fortune=1;Fortune=3");
        assert_eq!(enchantments.get_level(EnchantmentId::FORTUNE), 3);

        let enchantments = Enchantments::parse("Fortune=1;Fortune=0");
        assert!(enchantments.is_empty());
    }

    #[test]
    fn parse_decl_errors() {
        assert_eq!(
            Enchantments::parse_decl("Sharpness"),
            Err(EnchantmentSpecError::Malformed("Sharpness".to_string()))
        );
        assert_eq!(
            Enchantments::parse_decl("Mending=1"),
            Err(EnchantmentSpecError::UnknownEnchantment("Mending".to_string()))
        );
        assert_eq!(
            Enchantments::parse_decl("Power=x"),
            Err(EnchantmentSpecError::InvalidLevel("x".to_string()))
        );
        assert_eq!(
            Enchantments::parse_decl(" Power = 5 "),
            Ok((EnchantmentId::POWER, 5))
        );
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Enchantments::parse("Protection=4;Thorns=2;Unbreaking=3");
        let b = Enchantments::parse("Unbreaking=3;Protection=4;Thorns=2");
        assert_eq!(a, b);
        assert_ne!(a, Enchantments::parse("Unbreaking=3;Protection=4;Thorns=1"));
    }

    #[test]
    fn to_text_writes_numeric_pairs() {
        let enchantments = Enchantments::single(EnchantmentId::SILK_TOUCH, 1);
        assert_eq!(enchantments.to_text(), "33=1;");
        assert_eq!(Enchantments::empty().to_text(), "");
    }

    #[test]
    fn merge_and_clear() {
        let mut enchantments = Enchantments::parse("Power=1;Punch=1");
        enchantments.merge(&Enchantments::parse("Power=4;Flame=1"));
        assert_eq!(enchantments, Enchantments::parse("Power=4;Punch=1;Flame=1"));
        enchantments.clear();
        assert!(enchantments.is_empty());
    }

    #[test]
    fn serde_goes_through_text() {
        let enchantments = Enchantments::parse("Efficiency=5");
        let json = serde_json::to_string(&enchantments).unwrap();
        assert_eq!(json, "\"32=5;\"");
        let back: Enchantments = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enchantments);
    }

    proptest! {
        #[test]
        fn text_round_trip(entries in proptest::collection::vec((0u16..128, 1i32..=10), 0..12)) {
            let enchantments: Enchantments = entries
                .into_iter()
                .map(|(id, level)| (EnchantmentId(id), level))
                .collect();
            prop_assert_eq!(Enchantments::parse(&enchantments.to_text()), enchantments);
        }
    }
}
