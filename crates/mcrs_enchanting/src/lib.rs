//! Enchantment selection for enchanting tables and books.
//!
//! [`RuleTable::generate`] turns an item and a power level into a weighted
//! candidate pool, [`WeightedEnchantments::draw`] samples it with an injected
//! [`RandomInteger`](mcrs_random::RandomInteger), and
//! [`WeightedEnchantments::apply_conflicts`] prunes the pool between draws.
//! [`Enchanter`] composes the three.

pub mod config;
pub mod conflict;
pub mod enchanter;
pub mod enchantment;
pub mod enchantments;
pub mod item;
pub mod pool;
pub mod rules;
pub mod weight;

pub use config::{ConfigError, EnchantingConfig};
pub use conflict::ExclusivityGroup;
pub use enchanter::Enchanter;
pub use enchantment::EnchantmentId;
pub use enchantments::{EnchantmentSpecError, Enchantments};
pub use item::{EnchantableItem, ItemId};
pub use pool::{WeightedEnchantment, WeightedEnchantments};
pub use rules::{Category, EnchantmentRule, RuleTable, RuleTableError, Tier};
pub use weight::{Weighted, WeightedList};
