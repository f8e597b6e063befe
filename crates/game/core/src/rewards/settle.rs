use crate::env::MonsterTemplate;
use crate::state::{ActiveHunt, HuntRecord, InventoryItem};

/// Skill progress earned by a hunt, in skill points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillGain {
    pub attack_speed: u32,
    pub resource_gathering: u32,
}

impl SkillGain {
    pub const ATTACK_SPEED_PER_KILL: u32 = 10;
    pub const RESOURCE_GATHERING_PER_KILL: u32 = 5;

    pub fn for_kills(kills: u32) -> Self {
        Self {
            attack_speed: kills * Self::ATTACK_SPEED_PER_KILL,
            resource_gathering: kills * Self::RESOURCE_GATHERING_PER_KILL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntSettlement {
    pub gold: u64,
    pub xp: u64,
    pub skills: SkillGain,
    pub record: HuntRecord,
}

/// Totals the rewards of a finished hunt.
///
/// Gold and xp are computed per kill (scaled by the difficulty reward
/// multiplier) and summed.
pub fn settle_rewards(
    monster: &MonsterTemplate,
    hunt: &ActiveHunt,
    kills: u32,
    loot: Vec<InventoryItem>,
    completed_at_ms: u64,
) -> HuntSettlement {
    let reward_pct = u64::from(hunt.difficulty.reward_pct());
    let gold_per_kill = monster.gold_reward * reward_pct / 100;
    let xp_per_kill = monster.xp_reward * reward_pct / 100;
    let gold = (0..kills).map(|_| gold_per_kill).sum();
    let xp = (0..kills).map(|_| xp_per_kill).sum();

    let record = HuntRecord {
        id: hunt.id,
        monster: monster.id.clone(),
        monster_name: monster.name.clone(),
        difficulty: hunt.difficulty,
        kills,
        gold,
        xp,
        loot,
        duration_ms: hunt.duration_ms,
        completed_at_ms,
    };

    HuntSettlement {
        gold,
        xp,
        skills: SkillGain::for_kills(kills),
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BiomeId, Difficulty, HuntId, MonsterId};

    fn wolf() -> MonsterTemplate {
        MonsterTemplate {
            id: MonsterId::from("shadow-wolf"),
            name: "Shadow Wolf".into(),
            biome: BiomeId::from("forest"),
            level: 15,
            hunt_time_secs: 30,
            drops: Vec::new(),
            gold_reward: 150,
            xp_reward: 45,
            evolution: None,
        }
    }

    fn hunt(difficulty: Difficulty) -> ActiveHunt {
        ActiveHunt {
            id: HuntId(4),
            monster: MonsterId::from("shadow-wolf"),
            biome: BiomeId::from("forest"),
            difficulty,
            started_at_ms: 1_000,
            duration_ms: 30_000,
            stamina_spent: 10,
        }
    }

    #[test]
    fn sums_per_kill_rewards() {
        let settlement = settle_rewards(&wolf(), &hunt(Difficulty::Normal), 2, Vec::new(), 31_000);
        assert_eq!(settlement.gold, 300);
        assert_eq!(settlement.xp, 90);
        assert_eq!(settlement.skills, SkillGain::for_kills(2));
        assert_eq!(settlement.record.kills, 2);
        assert_eq!(settlement.record.completed_at_ms, 31_000);
    }

    #[test]
    fn difficulty_scales_each_kill() {
        let settlement = settle_rewards(&wolf(), &hunt(Difficulty::Easy), 1, Vec::new(), 0);
        assert_eq!(settlement.gold, 112);
        assert_eq!(settlement.xp, 33);

        let settlement = settle_rewards(&wolf(), &hunt(Difficulty::Nightmare), 3, Vec::new(), 0);
        assert_eq!(settlement.gold, 900);
    }
}
