//! Player-facing notifications for runtime events.
use game_core::{
    ActionOutcome, CatalogOracle, ExecutionOutcome, MonsterId, ProgressionOracle,
};
use runtime::{ActionFailed, ActionSource, Event};

use crate::config::MessageConfig;
use crate::format;
use crate::message::{MessageEntry, MessageLevel};

/// Turns events into log entries, resolving ids to display names.
#[derive(Clone, Copy)]
pub struct Notifier<'a> {
    catalog: &'a dyn CatalogOracle,
    progression: &'a dyn ProgressionOracle,
    config: &'a MessageConfig,
}

impl<'a> Notifier<'a> {
    pub fn new(
        catalog: &'a dyn CatalogOracle,
        progression: &'a dyn ProgressionOracle,
        config: &'a MessageConfig,
    ) -> Self {
        Self {
            catalog,
            progression,
            config,
        }
    }

    pub fn event(&self, event: &Event) -> Vec<MessageEntry> {
        match event {
            Event::ActionExecuted(executed) => {
                self.execution(&executed.outcome, executed.source, executed.clock_ms)
            }
            Event::ActionFailed(failed) => self.failure(failed).into_iter().collect(),
        }
    }

    /// Entries for a successful action; quiet outcomes yield none.
    pub fn execution(
        &self,
        execution: &ExecutionOutcome,
        source: ActionSource,
        clock_ms: u64,
    ) -> Vec<MessageEntry> {
        let at = Some(clock_ms);
        let mut entries: Vec<MessageEntry> = self
            .outcome(&execution.outcome, source)
            .into_iter()
            .map(|(text, level)| MessageEntry::new(text, at, level))
            .collect();

        if execution.level_ups > 0 {
            entries.push(MessageEntry::new(
                format!("Level up! (+{})", execution.level_ups),
                at,
                MessageLevel::Success,
            ));
        }
        for monster in &execution.unlocked_monsters {
            entries.push(MessageEntry::new(
                format!("{} can now be hunted", self.monster_name(monster)),
                at,
                MessageLevel::Success,
            ));
        }
        for id in &execution.achievements {
            let name = self
                .progression
                .achievements()
                .iter()
                .find(|achievement| &achievement.id == id)
                .map_or_else(|| id.to_string(), |achievement| achievement.name.clone());
            entries.push(MessageEntry::new(
                format!("Achievement unlocked: {name}"),
                at,
                MessageLevel::Success,
            ));
        }
        entries
    }

    /// Warning for a blocked action. Failed stamina and weather ticks are
    /// not the player's doing and stay out of the log.
    pub fn failure(&self, failed: &ActionFailed) -> Option<MessageEntry> {
        if failed.source == ActionSource::Timer && failed.kind.is_system() {
            return None;
        }
        let prefix = match failed.source {
            ActionSource::AutoHunt => "Auto-hunt paused: ",
            _ => "",
        };
        Some(MessageEntry::new(
            format!("{prefix}{}", failed.message),
            Some(failed.clock_ms),
            MessageLevel::Warning,
        ))
    }

    fn outcome(
        &self,
        outcome: &ActionOutcome,
        source: ActionSource,
    ) -> Option<(String, MessageLevel)> {
        let success = |text: String| Some((text, MessageLevel::Success));
        let info = |text: String| Some((text, MessageLevel::Info));

        match outcome {
            ActionOutcome::HuntStarted(hunt) => {
                let name = self.monster_name(&hunt.monster);
                match source {
                    ActionSource::AutoHunt => info(format!("Auto-hunting {name} again")),
                    _ => info(format!("Started hunting {name} ({})", hunt.difficulty)),
                }
            }
            ActionOutcome::HuntCompleted(completion) => {
                let record = &completion.record;
                let loot = completion
                    .loot
                    .consolidated
                    .iter()
                    .map(|drop| format!("{} x{}", self.item_name(&drop.item), drop.quantity))
                    .collect::<Vec<_>>();
                let loot = if loot.is_empty() {
                    String::new()
                } else {
                    format!(", loot: {}", loot.join(", "))
                };
                success(format!(
                    "Defeated {} {} (+{} gold, +{} xp{loot})",
                    record.kills,
                    record.monster_name,
                    format::gold(record.gold),
                    record.xp,
                ))
            }
            ActionOutcome::AutoHuntSet { monster, enabled } => {
                let state = if *enabled { "enabled" } else { "disabled" };
                info(format!("Auto-hunt {state} for {}", self.monster_name(monster)))
            }
            ActionOutcome::Crafted(crafted) => success(format!(
                "Crafted {} x{}",
                crafted.item.name, crafted.item.quantity
            )),
            ActionOutcome::Upgraded(upgrade) => match &upgrade.upgraded {
                Some(item) => success(format!("Upgraded {} to {}", item.name, item.rarity)),
                None => Some((
                    format!(
                        "Upgrade of {} failed ({} gold lost)",
                        self.item_name(&upgrade.item.id),
                        format::gold(upgrade.cost)
                    ),
                    MessageLevel::Error,
                )),
            },
            ActionOutcome::Purchased(purchase) => success(format!(
                "Bought {} x{} for {} gold",
                purchase.item.name,
                purchase.item.quantity,
                format::gold(purchase.price)
            )),
            ActionOutcome::SkillUpgraded(upgrade) => success(format!(
                "{} reached level {}",
                upgrade.skill.label(),
                upgrade.level
            )),
            ActionOutcome::EquipmentChanged(change) => match &change.equipped {
                Some(item) => info(format!("Equipped {}", item.name)),
                None => info(format!("Unequipped {}", change.slot)),
            },
            ActionOutcome::QuestAccepted(quest) => {
                info(format!("Accepted quest: {}", self.quest_title(quest)))
            }
            ActionOutcome::QuestCompleted(grant) => success(format!(
                "Completed quest: {} (+{} gold, +{} xp)",
                self.quest_title(&grant.quest),
                format::gold(grant.gold),
                grant.xp
            )),
            ActionOutcome::QuestAbandoned(quest) => {
                info(format!("Abandoned quest: {}", self.quest_title(quest)))
            }
            ActionOutcome::Explored(explored) => {
                let biome = self
                    .catalog
                    .biome(&explored.biome)
                    .map_or_else(|| explored.biome.to_string(), |biome| biome.name.clone());
                let mut text = format!("Explored {biome}: {}%", explored.progress);
                for discovery in &explored.discoveries {
                    text.push(' ');
                    text.push_str(discovery.message());
                }
                if explored.fully_explored {
                    success(text)
                } else {
                    info(text)
                }
            }
            ActionOutcome::StaminaRegenerated { current } => self
                .config
                .show_stamina
                .then(|| (format!("Stamina {current}"), MessageLevel::Info)),
            ActionOutcome::WeatherAdvanced(changes) => {
                if !self.config.show_weather || changes.is_empty() {
                    return None;
                }
                let text = changes
                    .iter()
                    .map(|change| {
                        let biome = self
                            .catalog
                            .biome(&change.biome)
                            .map_or_else(|| change.biome.to_string(), |biome| biome.name.clone());
                        format!("{biome}: {}", change.kind)
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                info(format!("Weather changed ({text})"))
            }
        }
    }

    fn monster_name(&self, id: &MonsterId) -> String {
        self.catalog
            .monster(id)
            .map_or_else(|| id.to_string(), |monster| monster.name.clone())
    }

    fn item_name(&self, id: &game_core::ItemId) -> String {
        self.catalog
            .item(id)
            .map_or_else(|| id.to_string(), |item| item.name.clone())
    }

    fn quest_title(&self, id: &game_core::QuestId) -> String {
        self.progression
            .quest(id)
            .map_or_else(|| id.to_string(), |quest| quest.title.clone())
    }
}
