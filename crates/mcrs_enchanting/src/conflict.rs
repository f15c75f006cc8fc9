use crate::enchantment::EnchantmentId;

/// Families of enchantments that may not share an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExclusivityGroup {
    Protection,
    Damage,
    MiningDrops,
}

impl ExclusivityGroup {
    pub const ALL: [ExclusivityGroup; 3] = [
        ExclusivityGroup::Protection,
        ExclusivityGroup::Damage,
        ExclusivityGroup::MiningDrops,
    ];

    pub const fn members(self) -> &'static [EnchantmentId] {
        match self {
            ExclusivityGroup::Protection => &[
                EnchantmentId::PROTECTION,
                EnchantmentId::FIRE_PROTECTION,
                EnchantmentId::BLAST_PROTECTION,
                EnchantmentId::PROJECTILE_PROTECTION,
            ],
            ExclusivityGroup::Damage => &[
                EnchantmentId::SHARPNESS,
                EnchantmentId::SMITE,
                EnchantmentId::BANE_OF_ARTHROPODS,
            ],
            ExclusivityGroup::MiningDrops => &[EnchantmentId::SILK_TOUCH, EnchantmentId::FORTUNE],
        }
    }

    pub fn of(id: EnchantmentId) -> Option<ExclusivityGroup> {
        Self::ALL
            .into_iter()
            .find(|group| group.members().contains(&id))
    }

    /// Every other member of `id`'s group; empty when `id` is in no group.
    pub fn siblings(id: EnchantmentId) -> impl Iterator<Item = EnchantmentId> {
        Self::of(id)
            .map(ExclusivityGroup::members)
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(move |other| *other != id)
    }
}

pub fn conflicts(a: EnchantmentId, b: EnchantmentId) -> bool {
    a != b && ExclusivityGroup::of(a).is_some_and(|group| group.members().contains(&b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn groups_are_symmetric() {
        for group in ExclusivityGroup::ALL {
            for &a in group.members() {
                assert_eq!(ExclusivityGroup::of(a), Some(group));
                for &b in group.members() {
                    assert_eq!(conflicts(a, b), a != b);
                    assert_eq!(conflicts(a, b), conflicts(b, a));
                }
            }
        }
    }

    #[test]
    fn siblings_exclude_self() {
        let siblings: Vec<_> = ExclusivityGroup::siblings(EnchantmentId::SMITE).collect();
        assert_eq!(
            siblings,
            [EnchantmentId::SHARPNESS, EnchantmentId::BANE_OF_ARTHROPODS]
        );
        assert_eq!(
            ExclusivityGroup::siblings(EnchantmentId::FORTUNE).collect::<Vec<_>>(),
            [EnchantmentId::SILK_TOUCH]
        );
    }

    #[test]
    fn ungrouped_enchantments_conflict_with_nothing() {
        assert_eq!(ExclusivityGroup::of(EnchantmentId::UNBREAKING), None);
        assert_eq!(ExclusivityGroup::siblings(EnchantmentId::THORNS).count(), 0);
        assert!(!conflicts(EnchantmentId::FLAME, EnchantmentId::INFINITY));
        assert!(!conflicts(EnchantmentId::FEATHER_FALLING, EnchantmentId::PROTECTION));
    }
}
