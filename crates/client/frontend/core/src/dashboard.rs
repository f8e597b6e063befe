//! Panel host: layout, notifications and intent forwarding.
//!
//! [`Dashboard`] is the shared state every front-end builds on. It owns the
//! panel tree and the message log, forwards panel intents to the runtime and
//! rebuilds only the panels an event touched.
use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use game_core::{ExecutionOutcome, LayoutError, LayoutTree, PanelId, PanelKind};
use runtime::{ActionSource, Event, OracleBundle, RuntimeHandle, StateSnapshot};

use crate::config::FrontendConfig;
use crate::event::Notifier;
use crate::intent::{LayoutCommand, PanelIntent};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::scope::UpdateScope;
use crate::view_model::{PanelContext, PanelView};

/// One leaf of the layout with its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPanel {
    pub id: PanelId,
    /// Share of the parent container in percent; `None` for the root.
    pub size: Option<u8>,
    pub view: PanelView,
}

impl RenderedPanel {
    pub fn kind(&self) -> PanelKind {
        self.view.kind()
    }
}

pub struct Dashboard {
    layout: LayoutTree,
    messages: MessageLog,
    config: FrontendConfig,
    handle: RuntimeHandle,
    oracles: OracleBundle,
    dirty: UpdateScope,
    cache: HashMap<PanelId, PanelView>,
}

impl Dashboard {
    pub fn new(handle: RuntimeHandle, oracles: OracleBundle, config: FrontendConfig) -> Self {
        Self {
            layout: LayoutTree::default(),
            messages: MessageLog::new(config.messages.capacity),
            config,
            handle,
            oracles,
            dirty: UpdateScope::ALL,
            cache: HashMap::new(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutTree) -> Self {
        self.layout = layout;
        self.dirty |= UpdateScope::LAYOUT;
        self
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn handle(&self) -> &RuntimeHandle {
        &self.handle
    }

    /// Applies a split, close, retag or resize.
    ///
    /// Splitting an already split panel is a no-op. Other rejected commands
    /// leave the tree unchanged and return the error.
    pub fn apply_layout(&mut self, command: &LayoutCommand) -> Result<(), LayoutError> {
        match command.apply(&mut self.layout) {
            Ok(()) => {
                self.dirty |= UpdateScope::LAYOUT;
                Ok(())
            }
            Err(LayoutError::AlreadySplit(panel)) => {
                debug!(%panel, "ignoring split of a container");
                Ok(())
            }
            Err(err) => {
                debug!(?command, error = %err, "layout command rejected");
                Err(err)
            }
        }
    }

    /// Forwards a panel intent to the runtime.
    ///
    /// Returns `Ok(None)` when the game blocked the action; the reason is
    /// logged as a warning notification and the state is unchanged.
    pub async fn submit(&mut self, intent: PanelIntent) -> Result<Option<ExecutionOutcome>> {
        let action = intent.into_action();
        let kind = action.kind();

        match self.handle.execute(action).await {
            Ok(outcome) => {
                let clock_ms = self.handle.query_snapshot().await?.state.clock_ms;
                let entries =
                    self.notifier()
                        .execution(&outcome, ActionSource::Player, clock_ms);
                self.push_all(entries);
                self.dirty |= UpdateScope::of_execution(&outcome);
                Ok(Some(outcome))
            }
            Err(err) if err.is_blocked_action() => {
                warn!(action = %kind, error = %err, "action blocked");
                self.messages
                    .push(MessageEntry::new(err.to_string(), None, MessageLevel::Warning));
                Ok(None)
            }
            Err(err) => Err(err).with_context(|| format!("failed to execute {kind}")),
        }
    }

    /// Records an event from the bus and returns the state it touched.
    ///
    /// Results of the player's own actions are announced by [`Self::submit`],
    /// so only timer and auto-hunt events add notifications here.
    pub fn on_event(&mut self, event: &Event) -> UpdateScope {
        if event.source() != ActionSource::Player {
            let entries = self.notifier().event(event);
            self.push_all(entries);
        }

        let scope = match event {
            Event::ActionExecuted(executed) => UpdateScope::of_execution(&executed.outcome),
            Event::ActionFailed(_) => UpdateScope::empty(),
        };
        self.dirty |= scope;
        scope
    }

    /// Marks state as changed without an event, e.g. hunt progress on a
    /// frame tick.
    pub fn invalidate(&mut self, scope: UpdateScope) {
        self.dirty |= scope;
    }

    /// Returns and clears the accumulated change scope.
    pub fn take_dirty(&mut self) -> UpdateScope {
        std::mem::take(&mut self.dirty)
    }

    /// Fetches a fresh snapshot and renders every panel.
    pub async fn render(&mut self) -> Result<Vec<RenderedPanel>> {
        let snapshot = self
            .handle
            .query_snapshot()
            .await
            .context("failed to query game state")?;
        self.render_snapshot(&snapshot)
    }

    /// Renders the layout leaves in order, reusing cached views of panels
    /// the pending changes did not touch.
    pub fn render_snapshot(&mut self, snapshot: &StateSnapshot) -> Result<Vec<RenderedPanel>> {
        let env = self.oracles.as_game_env();
        let ctx = PanelContext::new(&snapshot.state, snapshot.now_ms, &env)?
            .with_history_limit(self.config.panels.history_limit);
        let dirty = std::mem::take(&mut self.dirty);

        let mut cache = HashMap::with_capacity(self.cache.len());
        let mut panels = Vec::new();
        for leaf in self.layout.leaves() {
            let view = match self.cache.remove(&leaf.id) {
                Some(view) if view.kind() == leaf.kind && !dirty.affects(leaf.kind) => view,
                _ => PanelView::build(leaf.kind, &ctx),
            };
            cache.insert(leaf.id.clone(), view.clone());
            panels.push(RenderedPanel {
                id: leaf.id.clone(),
                size: leaf.size,
                view,
            });
        }
        self.cache = cache;

        Ok(panels)
    }

    fn notifier(&self) -> Notifier<'_> {
        let content = self.oracles.content();
        Notifier::new(content, content, &self.config.messages)
    }

    fn push_all(&mut self, entries: Vec<MessageEntry>) {
        for entry in entries {
            self.messages.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use game_content::builtin_catalog;
    use game_core::{ActionKind, Difficulty, MonsterId, RecipeId, SplitDirection};
    use runtime::{Runtime, RuntimeConfig, Topic};

    use super::*;

    async fn dashboard() -> (Runtime, Dashboard) {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let config = RuntimeConfig::default();
        let oracles = OracleBundle::new(catalog.clone(), Arc::new(config.game_config.clone()));
        let runtime = Runtime::builder()
            .config(config)
            .content(catalog)
            .seed(11)
            .build()
            .await
            .unwrap();
        let dashboard = Dashboard::new(runtime.handle(), oracles, FrontendConfig::default());
        (runtime, dashboard)
    }

    #[tokio::test(start_paused = true)]
    async fn renders_the_default_layout() {
        let (_runtime, mut dashboard) = dashboard().await;

        let panels = dashboard.render().await.unwrap();
        let kinds: Vec<_> = panels.iter().map(RenderedPanel::kind).collect();
        assert_eq!(kinds, [PanelKind::MonsterHunts, PanelKind::Inventory]);
        assert!(panels.iter().all(|panel| panel.size == Some(50)));
        assert!(dashboard.take_dirty().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn blocked_intent_becomes_a_warning() {
        let (_runtime, mut dashboard) = dashboard().await;

        let result = dashboard
            .submit(PanelIntent::Craft(RecipeId::from("crystal-armor")))
            .await
            .unwrap();
        assert!(result.is_none());

        let entry = dashboard.messages().recent(1).next().unwrap();
        assert_eq!(entry.level, MessageLevel::Warning);
    }

    #[tokio::test(start_paused = true)]
    async fn started_hunt_marks_the_hunts_panel_dirty() {
        let (_runtime, mut dashboard) = dashboard().await;
        dashboard.render().await.unwrap();

        let outcome = dashboard
            .submit(PanelIntent::StartHunt {
                monster: MonsterId::from("shadow-wolf"),
                difficulty: Difficulty::Normal,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.kind, ActionKind::StartHunt);

        let dirty = dashboard.take_dirty();
        assert!(dirty.affects(PanelKind::MonsterHunts));
        assert!(!dirty.affects(PanelKind::Marketplace));
        assert_eq!(
            dashboard.messages().recent(1).next().unwrap().level,
            MessageLevel::Info
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timer_events_add_notifications() {
        let (_runtime, mut dashboard) = dashboard().await;
        let mut system = dashboard.handle().subscribe(Topic::System);

        dashboard
            .submit(PanelIntent::StartHunt {
                monster: MonsterId::from("shadow-wolf"),
                difficulty: Difficulty::Normal,
            })
            .await
            .unwrap()
            .unwrap();

        let completed = tokio::time::timeout(Duration::from_secs(3_600), async {
            loop {
                let event = system.recv().await.unwrap();
                if let Event::ActionExecuted(executed) = &event {
                    if executed.outcome.kind == ActionKind::CompleteHunt {
                        return event;
                    }
                }
            }
        })
        .await
        .unwrap();

        let scope = dashboard.on_event(&completed);
        assert!(scope.affects(PanelKind::HuntHistory));
        let latest = dashboard.messages().recent(1).next().unwrap();
        assert!(latest.text.contains("Shadow Wolf"), "{}", latest.text);
    }

    #[tokio::test(start_paused = true)]
    async fn split_of_a_container_is_ignored() {
        let (_runtime, mut dashboard) = dashboard().await;
        let before = dashboard.layout().clone();

        dashboard
            .apply_layout(&LayoutCommand::Split {
                panel: PanelId::root(),
                direction: SplitDirection::Vertical,
            })
            .unwrap();
        assert_eq!(dashboard.layout(), &before);

        let err = dashboard
            .apply_layout(&LayoutCommand::Remove(PanelId::from("missing")))
            .unwrap_err();
        assert!(matches!(err, LayoutError::NotFound(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn retagged_panel_is_rebuilt() {
        let (_runtime, mut dashboard) = dashboard().await;
        dashboard.render().await.unwrap();

        dashboard
            .apply_layout(&LayoutCommand::SetKind {
                panel: PanelId::from("panel-2"),
                kind: PanelKind::Biomes,
            })
            .unwrap();
        let panels = dashboard.render().await.unwrap();
        assert_eq!(panels[1].kind(), PanelKind::Biomes);
    }
}
