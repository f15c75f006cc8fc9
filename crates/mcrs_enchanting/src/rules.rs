//! Per-category enchantment eligibility tables and the candidate generator.
//!
//! Each row names an enchantment and its tiers. For a given power level the
//! highest tier whose inclusive `[min_power, max_power]` range contains the
//! power becomes one candidate; a row with no matching tier contributes nothing.

use crate::enchantment::EnchantmentId;
use crate::enchantments::Enchantments;
use crate::item::EnchantableItem;
use crate::pool::WeightedEnchantments;
use crate::weight::MAX_TOTAL_WEIGHT;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub level: i32,
    pub weight: u32,
    pub min_power: i32,
    pub max_power: i32,
}

impl Tier {
    pub const fn new(level: i32, weight: u32, min_power: i32, max_power: i32) -> Self {
        Self {
            level,
            weight,
            min_power,
            max_power,
        }
    }

    pub const fn contains(&self, power: i32) -> bool {
        self.min_power <= power && power <= self.max_power
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentRule {
    pub enchantment: EnchantmentId,
    pub tiers: Cow<'static, [Tier]>,
}

impl EnchantmentRule {
    pub const fn new(enchantment: EnchantmentId, tiers: &'static [Tier]) -> Self {
        Self {
            enchantment,
            tiers: Cow::Borrowed(tiers),
        }
    }

    /// The highest tier eligible at `power`, if any. Among tiers of equal
    /// level the one listed first wins.
    pub fn select(&self, power: i32) -> Option<&Tier> {
        self.tiers
            .iter()
            .rev()
            .filter(|tier| tier.contains(power))
            .max_by_key(|tier| tier.level)
    }

    fn max_weight(&self) -> u64 {
        self.tiers.iter().map(|tier| tier.weight as u64).max().unwrap_or(0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("enchantment {enchantment} has a tier at level {level}, levels start at 1")]
    InvalidLevel {
        enchantment: EnchantmentId,
        level: i32,
    },
    #[error("enchantment {enchantment} level {level} has zero weight")]
    ZeroWeight {
        enchantment: EnchantmentId,
        level: i32,
    },
    #[error("a single pool can weigh {weight}, above the drawable maximum of {max}")]
    PoolTooHeavy { weight: u64, max: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sword,
    Tool,
    Armor,
    Helmet,
    Boots,
    Bow,
    FishingRod,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Sword,
        Category::Tool,
        Category::Armor,
        Category::Helmet,
        Category::Boots,
        Category::Bow,
        Category::FishingRod,
    ];
}

type Rules = Cow<'static, [EnchantmentRule]>;

/// The complete eligibility table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    pub sword: Rules,
    pub tool: Rules,
    pub armor: Rules,
    pub helmet: Rules,
    pub boots: Rules,
    pub bow: Rules,
    pub fishing_rod: Rules,
    /// Category groups offered to books, in pool order.
    pub book: Cow<'static, [Category]>,
    /// Rows appended for every item, whatever its category.
    pub universal: Rules,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::VANILLA
    }
}

impl RuleTable {
    pub const VANILLA: RuleTable = RuleTable {
        sword: Cow::Borrowed(vanilla::SWORD),
        tool: Cow::Borrowed(vanilla::TOOL),
        armor: Cow::Borrowed(vanilla::ARMOR),
        helmet: Cow::Borrowed(vanilla::HELMET),
        boots: Cow::Borrowed(vanilla::BOOTS),
        bow: Cow::Borrowed(vanilla::BOW),
        fishing_rod: Cow::Borrowed(vanilla::FISHING_ROD),
        book: Cow::Borrowed(&Category::ALL),
        universal: Cow::Borrowed(vanilla::UNIVERSAL),
    };

    pub fn rules(&self, category: Category) -> &[EnchantmentRule] {
        match category {
            Category::Sword => &*self.sword,
            Category::Tool => &*self.tool,
            Category::Armor => &*self.armor,
            Category::Helmet => &*self.helmet,
            Category::Boots => &*self.boots,
            Category::Bow => &*self.bow,
            Category::FishingRod => &*self.fishing_rod,
        }
    }

    /// Checks that every tier forms a drawable candidate and that no pool the
    /// table can generate outweighs [`MAX_TOTAL_WEIGHT`].
    pub fn validate(&self) -> Result<(), RuleTableError> {
        let rows = Category::ALL
            .into_iter()
            .flat_map(|category| self.rules(category))
            .chain(self.universal.iter());
        for rule in rows {
            for tier in rule.tiers.iter() {
                if tier.level < 1 {
                    return Err(RuleTableError::InvalidLevel {
                        enchantment: rule.enchantment,
                        level: tier.level,
                    });
                }
                if tier.weight == 0 {
                    return Err(RuleTableError::ZeroWeight {
                        enchantment: rule.enchantment,
                        level: tier.level,
                    });
                }
            }
        }
        let heaviest = self.max_pool_weight();
        if heaviest > MAX_TOTAL_WEIGHT {
            return Err(RuleTableError::PoolTooHeavy {
                weight: heaviest,
                max: MAX_TOTAL_WEIGHT,
            });
        }
        Ok(())
    }

    /// Upper bound on the total weight of any pool [`generate`](Self::generate)
    /// can return, assuming every row matches with its heaviest tier.
    pub fn max_pool_weight(&self) -> u64 {
        let weight =
            |rules: &[EnchantmentRule]| -> u64 { rules.iter().map(EnchantmentRule::max_weight).sum() };
        let category = |category| weight(self.rules(category));
        let armor = category(Category::Armor)
            + category(Category::Helmet).max(category(Category::Boots));
        let book: u64 = self.book.iter().map(|&c| category(c)).sum();
        let widest = [
            category(Category::Sword),
            category(Category::Tool),
            armor,
            category(Category::Bow),
            category(Category::FishingRod),
            book,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        widest + weight(&self.universal)
    }

    /// Builds the candidate pool for `item` at `power`.
    ///
    /// A plain book receives the union of the `book` groups and is converted
    /// to an enchanted book.
    pub fn generate<I>(&self, item: &mut I, power: i32) -> WeightedEnchantments
    where
        I: EnchantableItem + ?Sized,
    {
        let mut pool = WeightedEnchantments::new();
        if item.is_sword() {
            add_rules(&mut pool, self.rules(Category::Sword), power);
        } else if item.is_tool() {
            add_rules(&mut pool, self.rules(Category::Tool), power);
        } else if item.is_armor() {
            add_rules(&mut pool, self.rules(Category::Armor), power);
            if item.is_helmet() {
                add_rules(&mut pool, self.rules(Category::Helmet), power);
            } else if item.is_boots() {
                add_rules(&mut pool, self.rules(Category::Boots), power);
            }
        } else if item.is_bow() {
            add_rules(&mut pool, self.rules(Category::Bow), power);
        } else if item.is_fishing_rod() {
            add_rules(&mut pool, self.rules(Category::FishingRod), power);
        } else if item.is_book() {
            for &category in self.book.iter() {
                add_rules(&mut pool, self.rules(category), power);
            }
            item.convert_to_enchanted_book();
        }
        add_rules(&mut pool, &self.universal, power);

        debug!(power, candidates = pool.len(), "Generated enchantment candidates");
        pool
    }
}

fn add_rules(pool: &mut WeightedEnchantments, rules: &[EnchantmentRule], power: i32) {
    for rule in rules {
        // a level below 1 cannot be stored in a set
        if let Some(tier) = rule.select(power).filter(|tier| tier.level >= 1) {
            pool.push(Enchantments::single(rule.enchantment, tier.level), tier.weight);
        }
    }
}

mod vanilla {
    use super::{EnchantmentRule, Tier};
    use crate::enchantment::EnchantmentId;

    const SHARPNESS: &[Tier] = &[
        Tier::new(4, 10, 34, 54),
        Tier::new(3, 10, 23, 43),
        Tier::new(2, 10, 12, 32),
        Tier::new(1, 10, 1, 21),
    ];
    // smite and bane of arthropods share a table
    const UNDEAD_ARTHROPOD: &[Tier] = &[
        Tier::new(4, 5, 29, 49),
        Tier::new(3, 5, 21, 41),
        Tier::new(2, 5, 13, 33),
        Tier::new(1, 5, 5, 25),
    ];
    const KNOCKBACK: &[Tier] = &[Tier::new(2, 5, 25, 75), Tier::new(1, 5, 5, 55)];
    const FIRE_ASPECT: &[Tier] = &[Tier::new(2, 2, 30, 80), Tier::new(1, 2, 10, 60)];
    const LOOTING: &[Tier] = &[
        Tier::new(3, 2, 33, 83),
        Tier::new(2, 2, 24, 74),
        Tier::new(1, 2, 15, 65),
    ];

    pub(super) const SWORD: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::SHARPNESS, SHARPNESS),
        EnchantmentRule::new(EnchantmentId::SMITE, UNDEAD_ARTHROPOD),
        EnchantmentRule::new(EnchantmentId::BANE_OF_ARTHROPODS, UNDEAD_ARTHROPOD),
        EnchantmentRule::new(EnchantmentId::KNOCKBACK, KNOCKBACK),
        EnchantmentRule::new(EnchantmentId::FIRE_ASPECT, FIRE_ASPECT),
        EnchantmentRule::new(EnchantmentId::LOOTING, LOOTING),
    ];

    const EFFICIENCY: &[Tier] = &[
        Tier::new(4, 10, 31, 81),
        Tier::new(3, 10, 21, 71),
        Tier::new(2, 10, 11, 61),
        Tier::new(1, 10, 1, 51),
    ];
    const SILK_TOUCH: &[Tier] = &[Tier::new(1, 1, 15, 65)];
    const FORTUNE: &[Tier] = &[
        Tier::new(3, 2, 33, 83),
        Tier::new(2, 2, 24, 74),
        Tier::new(1, 2, 15, 65),
    ];

    pub(super) const TOOL: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::EFFICIENCY, EFFICIENCY),
        EnchantmentRule::new(EnchantmentId::SILK_TOUCH, SILK_TOUCH),
        EnchantmentRule::new(EnchantmentId::FORTUNE, FORTUNE),
    ];

    const PROTECTION: &[Tier] = &[
        Tier::new(4, 10, 34, 54),
        Tier::new(3, 10, 23, 43),
        Tier::new(2, 10, 12, 32),
        Tier::new(1, 10, 1, 21),
    ];
    const FIRE_PROTECTION: &[Tier] = &[
        Tier::new(4, 5, 34, 46),
        Tier::new(3, 5, 26, 38),
        Tier::new(2, 5, 18, 30),
        Tier::new(1, 5, 10, 22),
    ];
    const BLAST_PROTECTION: &[Tier] = &[
        Tier::new(4, 2, 29, 41),
        Tier::new(3, 2, 21, 33),
        Tier::new(2, 2, 13, 25),
        Tier::new(1, 2, 5, 17),
    ];
    const PROJECTILE_PROTECTION: &[Tier] = &[
        Tier::new(4, 5, 21, 36),
        Tier::new(3, 5, 15, 30),
        Tier::new(2, 5, 9, 24),
        Tier::new(1, 5, 3, 18),
    ];
    const THORNS: &[Tier] = &[
        Tier::new(3, 1, 50, 100),
        Tier::new(2, 1, 30, 80),
        Tier::new(1, 1, 10, 60),
    ];

    pub(super) const ARMOR: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::PROTECTION, PROTECTION),
        EnchantmentRule::new(EnchantmentId::FIRE_PROTECTION, FIRE_PROTECTION),
        EnchantmentRule::new(EnchantmentId::BLAST_PROTECTION, BLAST_PROTECTION),
        EnchantmentRule::new(EnchantmentId::PROJECTILE_PROTECTION, PROJECTILE_PROTECTION),
        EnchantmentRule::new(EnchantmentId::THORNS, THORNS),
    ];

    const RESPIRATION: &[Tier] = &[
        Tier::new(3, 2, 30, 60),
        Tier::new(2, 2, 20, 50),
        Tier::new(1, 2, 10, 40),
    ];
    const AQUA_AFFINITY: &[Tier] = &[Tier::new(1, 2, 1, 41)];

    pub(super) const HELMET: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::RESPIRATION, RESPIRATION),
        EnchantmentRule::new(EnchantmentId::AQUA_AFFINITY, AQUA_AFFINITY),
    ];

    const FEATHER_FALLING: &[Tier] = &[
        Tier::new(4, 5, 23, 33),
        Tier::new(3, 5, 17, 27),
        Tier::new(2, 5, 11, 21),
        Tier::new(1, 5, 5, 15),
    ];

    pub(super) const BOOTS: &[EnchantmentRule] =
        &[EnchantmentRule::new(EnchantmentId::FEATHER_FALLING, FEATHER_FALLING)];

    const POWER: &[Tier] = &[
        Tier::new(4, 10, 31, 46),
        Tier::new(3, 10, 21, 36),
        Tier::new(2, 10, 11, 26),
        Tier::new(1, 10, 1, 16),
    ];
    const PUNCH: &[Tier] = &[Tier::new(2, 2, 32, 57), Tier::new(1, 2, 12, 37)];
    const FLAME: &[Tier] = &[Tier::new(1, 2, 20, 50)];
    const INFINITY: &[Tier] = &[Tier::new(1, 1, 20, 50)];

    pub(super) const BOW: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::POWER, POWER),
        EnchantmentRule::new(EnchantmentId::PUNCH, PUNCH),
        EnchantmentRule::new(EnchantmentId::FLAME, FLAME),
        EnchantmentRule::new(EnchantmentId::INFINITY, INFINITY),
    ];

    // luck of the sea and lure always unlock together at the same tier
    const FISHING: &[Tier] = &[
        Tier::new(3, 1, 33, 83),
        Tier::new(2, 1, 24, 74),
        Tier::new(1, 1, 15, 65),
    ];

    pub(super) const FISHING_ROD: &[EnchantmentRule] = &[
        EnchantmentRule::new(EnchantmentId::LUCK_OF_THE_SEA, FISHING),
        EnchantmentRule::new(EnchantmentId::LURE, FISHING),
    ];

    const UNBREAKING: &[Tier] = &[
        Tier::new(3, 5, 21, 71),
        Tier::new(2, 5, 13, 63),
        Tier::new(1, 5, 5, 55),
    ];

    pub(super) const UNIVERSAL: &[EnchantmentRule] =
        &[EnchantmentRule::new(EnchantmentId::UNBREAKING, UNBREAKING)];
}
