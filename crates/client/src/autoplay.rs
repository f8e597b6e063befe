//! Headless frontend that plays a session on its own.
//!
//! Every decision tick it renders the dashboard and acts on what the panels
//! offer: start the most rewarding hunt, enable auto-hunt once unlocked,
//! turn in and accept quests, craft, buy skill levels and explore.
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;

use client_frontend_core::{
    Dashboard, Frontend, FrontendConfig, LayoutCommand, MessageLevel, PanelIntent, PanelView,
    RenderedPanel, UpdateScope, format,
};
use game_core::{Difficulty, PanelId, PanelKind, SplitDirection};
use runtime::{OracleBundle, RuntimeHandle, Topic};

pub struct AutoplayFrontend {
    oracles: OracleBundle,
    config: FrontendConfig,
    session: Duration,
    decision_period: Duration,
}

impl AutoplayFrontend {
    pub const DEFAULT_DECISION_PERIOD: Duration = Duration::from_secs(1);

    pub fn new(oracles: OracleBundle, config: FrontendConfig, session: Duration) -> Self {
        Self {
            oracles,
            config,
            session,
            decision_period: Self::DEFAULT_DECISION_PERIOD,
        }
    }

    pub fn decision_period(mut self, period: Duration) -> Self {
        self.decision_period = period.max(Duration::from_millis(1));
        self
    }

    async fn tick(&self, dashboard: &mut Dashboard) -> Result<()> {
        dashboard.invalidate(UpdateScope::HUNTS | UpdateScope::QUESTS);
        let panels = dashboard.render().await?;
        for intent in plan(&panels) {
            tracing::debug!(?intent, "autoplay intent");
            dashboard.submit(intent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Frontend for AutoplayFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut dashboard =
            Dashboard::new(handle.clone(), self.oracles.clone(), self.config.clone());
        for command in autoplay_layout() {
            dashboard.apply_layout(&command)?;
        }

        let mut system = handle.subscribe(Topic::System);
        let deadline = tokio::time::sleep(self.session);
        tokio::pin!(deadline);
        let mut ticker = tokio::time::interval(self.decision_period);

        tracing::info!(session = ?self.session, "autoplay started");
        loop {
            tokio::select! {
                _ = &mut deadline => break,
                event = system.recv() => match event {
                    Ok(event) => {
                        dashboard.on_event(&event);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "autoplay fell behind the event bus");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = ticker.tick() => self.tick(&mut dashboard).await?,
            }
        }

        report(&dashboard).await
    }
}

/// Panels the autoplayer reads, carved out of the default two-panel layout.
pub fn autoplay_layout() -> Vec<LayoutCommand> {
    let hunts = PanelId::from("panel-1");
    let side = PanelId::from("panel-2");
    vec![
        LayoutCommand::Split {
            panel: hunts.clone(),
            direction: SplitDirection::Vertical,
        },
        LayoutCommand::SetKind {
            panel: hunts.child(2),
            kind: PanelKind::SkillTree,
        },
        LayoutCommand::Split {
            panel: side.clone(),
            direction: SplitDirection::Vertical,
        },
        LayoutCommand::SetKind {
            panel: side.child(1),
            kind: PanelKind::Quests,
        },
        LayoutCommand::SetKind {
            panel: side.child(2),
            kind: PanelKind::Crafting,
        },
        LayoutCommand::Split {
            panel: side.child(2),
            direction: SplitDirection::Horizontal,
        },
        LayoutCommand::SetKind {
            panel: side.child(2).child(2),
            kind: PanelKind::Biomes,
        },
    ]
}

/// Picks the intents worth trying for the rendered panels.
pub fn plan(panels: &[RenderedPanel]) -> Vec<PanelIntent> {
    let mut intents = Vec::new();
    for panel in panels {
        match &panel.view {
            PanelView::MonsterHunts(view) => {
                intents.extend(
                    view.monsters
                        .iter()
                        .filter(|row| row.unlocked && row.auto_hunt_available && !row.auto_hunt)
                        .map(|row| PanelIntent::ToggleAutoHunt {
                            monster: row.id.clone(),
                            enabled: true,
                        }),
                );
                let best = view
                    .monsters
                    .iter()
                    .filter(|row| row.can_start && !row.auto_hunt)
                    .max_by_key(|row| row.xp_reward);
                if let Some(row) = best {
                    intents.push(PanelIntent::StartHunt {
                        monster: row.id.clone(),
                        difficulty: Difficulty::Normal,
                    });
                }
            }
            PanelView::SkillTree(view) => {
                let cheapest = view
                    .skills
                    .iter()
                    .filter(|row| row.affordable)
                    .min_by_key(|row| row.next_cost);
                if let Some(row) = cheapest {
                    intents.push(PanelIntent::UpgradeSkill(row.skill));
                }
            }
            PanelView::Quests(view) => {
                intents.extend(
                    view.active
                        .iter()
                        .filter(|quest| quest.ready)
                        .map(|quest| PanelIntent::TurnInQuest(quest.id.clone())),
                );
                if let Some(quest) = view.available.iter().find(|quest| quest.can_accept) {
                    intents.push(PanelIntent::AcceptQuest(quest.id.clone()));
                }
            }
            PanelView::Crafting(view) => {
                if let Some(recipe) = view.recipes.iter().find(|recipe| recipe.craftable) {
                    intents.push(PanelIntent::Craft(recipe.id.clone()));
                }
            }
            PanelView::Biomes(view) => {
                if let Some(biome) = view.biomes.iter().find(|biome| !biome.fully_explored) {
                    intents.push(PanelIntent::Explore(biome.id.clone()));
                }
            }
            _ => {}
        }
    }
    intents
}

async fn report(dashboard: &Dashboard) -> Result<()> {
    let state = dashboard.handle().query_state().await?;
    let profile = &state.profile;

    tracing::info!(
        level = profile.level,
        gold = state.gold,
        hunts = profile.counters.hunts_completed,
        "autoplay finished"
    );

    println!(
        "Level {} | {} gold | {} hunts | {} monsters defeated",
        profile.level,
        format::gold(state.gold),
        profile.counters.hunts_completed,
        profile.counters.total_defeated,
    );
    let warnings = dashboard
        .messages()
        .iter()
        .filter(|entry| entry.level == MessageLevel::Warning)
        .count();
    println!("Recent activity ({warnings} blocked actions):");
    let recent: Vec<_> = dashboard.messages().recent(10).collect();
    for entry in recent.into_iter().rev() {
        println!("  {}", entry.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use game_core::LayoutTree;

    use super::*;

    #[test]
    fn layout_covers_every_panel_the_planner_reads() {
        let mut tree = LayoutTree::default();
        for command in autoplay_layout() {
            command.apply(&mut tree).unwrap();
        }
        tree.validate().unwrap();

        let kinds: Vec<_> = tree.leaves().iter().map(|leaf| leaf.kind).collect();
        assert_eq!(
            kinds,
            [
                PanelKind::MonsterHunts,
                PanelKind::SkillTree,
                PanelKind::Quests,
                PanelKind::Crafting,
                PanelKind::Biomes,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn opening_plan_starts_a_hunt() {
        let setup = RuntimeBuilder::new(ClientConfig::default())
            .build()
            .await
            .unwrap();
        let mut dashboard = Dashboard::new(
            setup.runtime.handle(),
            setup.oracles.clone(),
            FrontendConfig::default(),
        );
        for command in autoplay_layout() {
            dashboard.apply_layout(&command).unwrap();
        }

        let panels = dashboard.render().await.unwrap();
        let intents = plan(&panels);
        assert!(intents.iter().any(|intent| matches!(
            intent,
            PanelIntent::StartHunt { difficulty: Difficulty::Normal, .. }
        )));
        assert!(
            intents
                .iter()
                .all(|intent| !matches!(intent, PanelIntent::ToggleAutoHunt { .. }))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn session_runs_to_its_deadline() {
        let setup = RuntimeBuilder::new(ClientConfig::default())
            .build()
            .await
            .unwrap();
        let mut frontend = AutoplayFrontend::new(
            setup.oracles.clone(),
            FrontendConfig::default(),
            Duration::from_secs(600),
        )
        .decision_period(Duration::from_secs(5));

        frontend.run(setup.runtime.handle()).await.unwrap();

        let state = setup.runtime.handle().query_state().await.unwrap();
        assert!(state.profile.counters.hunts_completed > 0);
        assert!(!state.world.exploration.is_empty());
    }
}
