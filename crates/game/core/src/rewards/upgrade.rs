use crate::env::RngOracle;
use crate::state::{InventoryItem, Rarity};

/// Gold cost of upgrading an item of the given rarity. `None` for legendary.
pub const fn upgrade_cost(rarity: Rarity) -> Option<u64> {
    match rarity {
        Rarity::Common => Some(1_000),
        Rarity::Uncommon => Some(2_500),
        Rarity::Rare => Some(5_000),
        Rarity::Epic => Some(10_000),
        Rarity::Legendary => None,
    }
}

/// Upgrade success chance in percent. `None` for legendary.
pub const fn upgrade_success_pct(rarity: Rarity) -> Option<u32> {
    match rarity {
        Rarity::Common => Some(95),
        Rarity::Uncommon => Some(85),
        Rarity::Rare => Some(70),
        Rarity::Epic => Some(50),
        Rarity::Legendary => None,
    }
}

/// Single Bernoulli trial against the rarity's success rate.
pub fn roll_upgrade<R>(rng: &R, seed: u64, rarity: Rarity) -> bool
where
    R: RngOracle + ?Sized,
{
    upgrade_success_pct(rarity).is_some_and(|chance| rng.chance(seed, chance))
}

/// The item a successful upgrade produces: next rarity, stats x1.5 (floored),
/// upgrade level +1. `None` for legendary or non-equipment items.
pub fn upgraded_item(item: &InventoryItem) -> Option<InventoryItem> {
    if !item.is_equipment() {
        return None;
    }
    let rarity = item.rarity.next()?;
    let mut upgraded = item.clone().with_quantity(1);
    upgraded.rarity = rarity;
    upgraded.upgrade_level = item.upgrade_level.saturating_add(1);
    for modifier in &mut upgraded.stats {
        modifier.value = modifier.value * 3 / 2;
    }
    Some(upgraded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{EquipmentSlot, ItemCategory, ItemId, StatKind, StatModifier};

    fn blade(rarity: Rarity) -> InventoryItem {
        InventoryItem {
            id: ItemId::from("shadow-blade"),
            name: "Shadow Blade".into(),
            rarity,
            quantity: 2,
            category: ItemCategory::Equipment(EquipmentSlot::Weapon),
            stats: vec![
                StatModifier::new(StatKind::AttackSpeed, 25),
                StatModifier::new(StatKind::CritChance, 15),
            ],
            upgrade_level: 0,
        }
    }

    #[test]
    fn upgrade_boosts_stats_and_rarity() {
        let upgraded = upgraded_item(&blade(Rarity::Epic)).unwrap();
        assert_eq!(upgraded.rarity, Rarity::Legendary);
        assert_eq!(upgraded.quantity, 1);
        assert_eq!(upgraded.upgrade_level, 1);
        assert_eq!(upgraded.stat(StatKind::AttackSpeed), 37);
        assert_eq!(upgraded.stat(StatKind::CritChance), 22);
    }

    #[test]
    fn legendary_and_materials_cannot_upgrade() {
        assert!(upgraded_item(&blade(Rarity::Legendary)).is_none());
        let mut material = blade(Rarity::Common);
        material.category = ItemCategory::Material;
        assert!(upgraded_item(&material).is_none());
        assert_eq!(upgrade_cost(Rarity::Legendary), None);
        assert!(!roll_upgrade(&PcgRng, 1, Rarity::Legendary));
    }

    #[test]
    fn success_rate_roughly_matches_table() {
        let rng = PcgRng;
        let successes = (0..1_000u64)
            .filter(|seed| roll_upgrade(&rng, crate::env::compute_seed(1, *seed, 3, 0), Rarity::Epic))
            .count();
        assert!((400..=600).contains(&successes));
    }
}
