use crate::conflict::ExclusivityGroup;
use crate::enchantment::EnchantmentId;
use crate::enchantments::Enchantments;
use crate::weight::{Weighted, WeightedList};
use mcrs_random::RandomInteger;

/// Candidate pool: each entry holds a single enchantment at one level.
pub type WeightedEnchantments = WeightedList<Enchantments>;

pub type WeightedEnchantment = Weighted<Enchantments>;

impl WeightedList<Enchantments> {
    /// Removes the first candidate carrying `id`.
    pub fn remove_enchantment(&mut self, id: EnchantmentId) {
        self.remove_first(|candidate| candidate.has_enchantment(id));
    }

    /// Removes the first candidate equal to `enchantments`.
    pub fn remove_enchantments(&mut self, enchantments: &Enchantments) {
        self.remove_first(|candidate| candidate == enchantments);
    }

    /// Drops every candidate that may not coexist with `chosen`.
    pub fn apply_conflicts(&mut self, chosen: EnchantmentId) {
        for sibling in ExclusivityGroup::siblings(chosen) {
            self.retain(|candidate| !candidate.has_enchantment(sibling));
        }
    }

    pub fn apply_conflicts_with(&mut self, chosen: &Enchantments) {
        for id in chosen.ids() {
            self.apply_conflicts(id);
        }
    }

    /// Weighted draw; an empty or weightless pool yields an empty set.
    pub fn draw<R>(&self, random: &mut R) -> Enchantments
    where
        R: RandomInteger + ?Sized,
    {
        self.pick(random).cloned().unwrap_or_default()
    }

    pub fn contains_enchantment(&self, id: EnchantmentId) -> bool {
        self.iter().any(|candidate| candidate.data().has_enchantment(id))
    }
}
