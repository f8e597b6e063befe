use crate::state::{Equipment, StatKind};

/// Stat totals of the equipped gear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipmentBonus {
    pub hunt_speed: u32,
    pub attack_speed: u32,
    pub crit_chance: u32,
    pub defense: u32,
    pub stamina_regen: u32,
    pub drop_rate: u32,
    pub multi_kill: u32,
}

impl EquipmentBonus {
    /// Gear contribution to the hunt speed bonus, in percent.
    pub fn speed_pct(&self) -> u32 {
        self.hunt_speed + self.attack_speed
    }
}

/// Sums the modifiers of every equipped item. Items sitting in the inventory
/// do not count.
pub fn equipment_bonus(equipment: &Equipment) -> EquipmentBonus {
    let mut bonus = EquipmentBonus::default();
    for item in equipment.iter() {
        for modifier in &item.stats {
            let slot = match modifier.stat {
                StatKind::HuntSpeed => &mut bonus.hunt_speed,
                StatKind::AttackSpeed => &mut bonus.attack_speed,
                StatKind::CritChance => &mut bonus.crit_chance,
                StatKind::Defense => &mut bonus.defense,
                StatKind::StaminaRegen => &mut bonus.stamina_regen,
                StatKind::DropRate => &mut bonus.drop_rate,
                StatKind::MultiKill => &mut bonus.multi_kill,
            };
            *slot += modifier.value;
        }
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EquipmentSlot, InventoryItem, ItemCategory, ItemId, Rarity, StatModifier};

    fn gear(slot: EquipmentSlot, stats: Vec<StatModifier>) -> InventoryItem {
        InventoryItem {
            id: ItemId::from("gear"),
            name: "Gear".into(),
            rarity: Rarity::Rare,
            quantity: 1,
            category: ItemCategory::Equipment(slot),
            stats,
            upgrade_level: 0,
        }
    }

    #[test]
    fn sums_stats_across_slots() {
        let mut equipment = Equipment::default();
        equipment.replace(
            EquipmentSlot::Weapon,
            gear(
                EquipmentSlot::Weapon,
                vec![
                    StatModifier::new(StatKind::AttackSpeed, 25),
                    StatModifier::new(StatKind::CritChance, 15),
                ],
            ),
        );
        equipment.replace(
            EquipmentSlot::Accessory,
            gear(
                EquipmentSlot::Accessory,
                vec![StatModifier::new(StatKind::HuntSpeed, 10)],
            ),
        );

        let bonus = equipment_bonus(&equipment);
        assert_eq!(bonus.speed_pct(), 35);
        assert_eq!(bonus.crit_chance, 15);
        assert_eq!(bonus.drop_rate, 0);
    }

    #[test]
    fn empty_equipment_has_no_bonus() {
        assert_eq!(equipment_bonus(&Equipment::default()), EquipmentBonus::default());
    }
}
