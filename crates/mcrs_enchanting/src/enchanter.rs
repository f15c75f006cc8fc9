use crate::enchantments::Enchantments;
use crate::item::EnchantableItem;
use crate::pool::WeightedEnchantments;
use crate::rules::RuleTable;
use mcrs_random::RandomInteger;
use tracing::debug;

pub const DEFAULT_MAX_ENCHANTMENTS: usize = 3;

/// Rolls a conflict-free set of enchantments for an item.
#[derive(Clone, Debug)]
pub struct Enchanter<'a> {
    rules: &'a RuleTable,
    max_enchantments: usize,
}

impl<'a> Enchanter<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            rules,
            max_enchantments: DEFAULT_MAX_ENCHANTMENTS,
        }
    }

    pub fn with_max_enchantments(mut self, max_enchantments: usize) -> Self {
        self.max_enchantments = max_enchantments;
        self
    }

    pub fn max_enchantments(&self) -> usize {
        self.max_enchantments
    }

    pub fn candidates<I>(&self, item: &mut I, power: i32) -> WeightedEnchantments
    where
        I: EnchantableItem + ?Sized,
    {
        self.rules.generate(item, power)
    }

    /// Draws up to `max_enchantments` candidates for `item`. After each draw the
    /// picked candidate and everything it conflicts with leave the pool.
    pub fn enchant<I, R>(&self, item: &mut I, power: i32, random: &mut R) -> Enchantments
    where
        I: EnchantableItem + ?Sized,
        R: RandomInteger + ?Sized,
    {
        let mut pool = self.candidates(item, power);
        let mut result = Enchantments::empty();
        for _ in 0..self.max_enchantments {
            let picked = pool.draw(random);
            if picked.is_empty() {
                break;
            }
            debug!(picked = %picked, remaining = pool.len() - 1, "Picked enchantment");
            pool.remove_enchantments(&picked);
            pool.apply_conflicts_with(&picked);
            result.merge(&picked);
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::conflict::conflicts;
    use crate::enchantment::EnchantmentId;
    use crate::item;
    use crate::rules::{EnchantmentRule, Tier};
    use crate::weight::test::Sequence;
    use mcrs_random::RandomSource;

    #[test]
    fn first_pick_excludes_its_group() {
        let table = RuleTable::VANILLA;
        let enchanter = Enchanter::new(&table).with_max_enchantments(2);
        // power 30 sword pool: sharpness 10, smite 5, bane 5, knockback 5, fire aspect 2,
        // looting 2, unbreaking 5. Draw 0 takes sharpness; the pruned pool is
        // knockback 5, fire aspect 2, looting 2, unbreaking 5, so draw 7 lands on looting.
        let mut random = Sequence::of(&[0, 7]);
        let mut sword = item::DIAMOND_SWORD;
        let result = enchanter.enchant(&mut sword, 30, &mut random);
        assert_eq!(result, Enchantments::parse("Sharpness=3;Looting=2"));
    }

    #[test]
    fn stops_when_pool_runs_dry() {
        let table = RuleTable::VANILLA;
        let enchanter = Enchanter::new(&table).with_max_enchantments(10);
        let mut random = RandomSource::new(5, false);
        let mut rod = item::FISHING_ROD;
        let result = enchanter.enchant(&mut rod, 70, &mut random);
        assert_eq!(
            result,
            Enchantments::parse("LuckOfTheSea=3;Lure=3;Unbreaking=3")
        );
    }

    #[test]
    fn nothing_eligible_gives_empty_set() {
        let table = RuleTable::VANILLA;
        let mut random = RandomSource::new(5, true);
        let mut sword = item::DIAMOND_SWORD;
        assert!(Enchanter::new(&table).enchant(&mut sword, 0, &mut random).is_empty());
        assert!(
            Enchanter::new(&table)
                .with_max_enchantments(0)
                .enchant(&mut sword, 30, &mut random)
                .is_empty()
        );
    }

    #[test]
    fn level_zero_rows_do_not_end_the_roll() {
        let table = RuleTable {
            sword: std::borrow::Cow::Owned(vec![EnchantmentRule {
                enchantment: EnchantmentId::SHARPNESS,
                tiers: std::borrow::Cow::Owned(vec![Tier::new(0, 10, 1, 50)]),
            }]),
            ..RuleTable::VANILLA
        };
        let mut random = Sequence::of(&[0]);
        let mut sword = item::DIAMOND_SWORD;
        let result = Enchanter::new(&table).enchant(&mut sword, 30, &mut random);
        assert_eq!(result, Enchantments::parse("Unbreaking=3"));
    }

    #[test]
    fn rolls_never_contain_conflicts() {
        let table = RuleTable::VANILLA;
        let enchanter = Enchanter::new(&table).with_max_enchantments(8);
        let mut random = RandomSource::new(2024, false);
        for power in 1..=60 {
            for base in [item::DIAMOND_SWORD, item::DIAMOND_PICKAXE, item::IRON_HELMET, item::BOOK] {
                let mut target = base;
                let result = enchanter.enchant(&mut target, power, &mut random);
                let ids: Vec<EnchantmentId> = result.ids().collect();
                for a in &ids {
                    for b in &ids {
                        assert!(!conflicts(*a, *b), "{a} and {b} rolled together");
                    }
                }
                assert!(result.len() <= 8);
            }
        }
    }

    #[test]
    fn same_seed_same_roll() {
        let table = RuleTable::VANILLA;
        let enchanter = Enchanter::new(&table);
        let roll = |seed| {
            let mut random = RandomSource::new(seed, true);
            let mut book = item::BOOK;
            let result = enchanter.enchant(&mut book, 40, &mut random);
            assert_eq!(book, item::ENCHANTED_BOOK);
            result
        };
        assert_eq!(roll(77), roll(77));
        assert!(!roll(77).is_empty());
    }
}
