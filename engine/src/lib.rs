//! Application state machine and async dispatch for Lookout.
//!
//! # Architecture
//!
//! [`App`] owns one [`Panel`] per registered operation. A trigger transitions
//! the panel to Loading synchronously, then spawns one independent fetch
//! task; the task reports back over a bounded mpsc channel that the frame
//! loop drains once per tick via [`App::process_events`]. Panels share no
//! state and never block each other; in-flight requests are never cancelled.
//!
//! # Staleness
//!
//! Each trigger is stamped with a per-panel sequence number, and a
//! completion whose sequence is older than the panel's last committed render
//! is discarded. When the user re-triggers a panel while a slow request is
//! still in flight, the newer trigger always wins the final render.

pub mod config;

pub use config::{ConfigError, LookoutConfig};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use lookout_providers::{ProviderConfig, fetch_operation};
use lookout_types::ui::UiOptions;
use lookout_types::{
    ApiError, OPERATIONS, OperationDescriptor, OperationKind, PanelState, PanelView,
};

const PANEL_EVENT_CHANNEL_CAPACITY: usize = 64;

/// Completion report from one spawned fetch task.
#[derive(Debug)]
struct PanelEvent {
    kind: OperationKind,
    seq: u64,
    outcome: Result<PanelView, ApiError>,
}

/// One dashboard panel: its static descriptor plus its current display state.
#[derive(Debug)]
pub struct Panel {
    descriptor: &'static OperationDescriptor,
    state: PanelState,
    /// Sequence stamped on the most recent trigger.
    trigger_seq: u64,
    /// Sequence of the last committed render.
    committed_seq: u64,
}

impl Panel {
    fn new(descriptor: &'static OperationDescriptor) -> Self {
        Self {
            descriptor,
            state: PanelState::Idle,
            trigger_seq: 0,
            committed_seq: 0,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }
}

/// The dashboard application state.
pub struct App {
    panels: Vec<Panel>,
    /// kind -> panel index, populated once at startup, read-only after.
    index: HashMap<OperationKind, usize>,
    /// hotkey -> kind, populated once at startup, read-only after.
    hotkeys: HashMap<char, OperationKind>,
    providers: Arc<ProviderConfig>,
    ui: UiOptions,
    tx: mpsc::Sender<PanelEvent>,
    rx: mpsc::Receiver<PanelEvent>,
    tick_count: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &LookoutConfig) -> Self {
        let providers = Arc::new(ProviderConfig {
            location: config.resolved_location(),
            ..ProviderConfig::default()
        });
        Self::with_providers(providers, config.ui_options())
    }

    #[must_use]
    pub fn with_providers(providers: Arc<ProviderConfig>, ui: UiOptions) -> Self {
        let (tx, rx) = mpsc::channel(PANEL_EVENT_CHANNEL_CAPACITY);
        let panels: Vec<Panel> = OPERATIONS.iter().map(Panel::new).collect();
        let index = panels
            .iter()
            .enumerate()
            .map(|(i, panel)| (panel.descriptor.kind, i))
            .collect();
        let hotkeys = OPERATIONS.iter().map(|op| (op.hotkey, op.kind)).collect();

        Self {
            panels,
            index,
            hotkeys,
            providers,
            ui,
            tx,
            rx,
            tick_count: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[must_use]
    pub fn panel(&self, kind: OperationKind) -> &Panel {
        &self.panels[self.index[&kind]]
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Advance the animation clock. Called once per frame.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a pressed key. Returns true when the key triggered an
    /// operation.
    pub fn on_key(&mut self, key: char) -> bool {
        match self.hotkeys.get(&key).copied() {
            Some(kind) => {
                self.trigger(kind);
                true
            }
            None => false,
        }
    }

    /// Start one fetch for `kind`. The Loading render is committed before
    /// the task is spawned, so the panel is visibly loading before any
    /// network completion can be observed.
    pub fn trigger(&mut self, kind: OperationKind) {
        let idx = self.index[&kind];
        let panel = &mut self.panels[idx];
        panel.trigger_seq += 1;
        let seq = panel.trigger_seq;
        panel.committed_seq = seq;
        panel.state = PanelState::Loading;

        tracing::debug!(operation = kind.name(), seq, "Operation triggered");

        let providers = Arc::clone(&self.providers);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = fetch_operation(kind, &providers).await;
            // The receiver only disappears on shutdown; a failed send is fine.
            let _ = tx.send(PanelEvent { kind, seq, outcome }).await;
        });
    }

    /// Drain completed fetches and apply them to their panels. Called once
    /// per frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: PanelEvent) {
        let panel = &mut self.panels[self.index[&event.kind]];
        if event.seq < panel.committed_seq {
            tracing::debug!(
                operation = event.kind.name(),
                seq = event.seq,
                committed = panel.committed_seq,
                "Discarding stale completion"
            );
            return;
        }
        panel.committed_seq = event.seq;
        panel.state = match event.outcome {
            Ok(view) => PanelState::Ready(view),
            Err(err) => PanelState::Failed(format!("{} {err}", panel.descriptor.failure)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{App, PanelEvent, ProviderConfig};
    use lookout_types::ui::UiOptions;
    use lookout_types::{ApiError, DogView, OperationKind, PanelState, PanelView};
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_providers(Arc::new(ProviderConfig::default()), UiOptions::default())
    }

    fn dog_view(url: &str) -> PanelView {
        PanelView::Dog(DogView {
            image_url: url.to_string(),
        })
    }

    #[tokio::test]
    async fn trigger_sets_loading_before_any_completion() {
        let mut app = test_app();
        for kind in OperationKind::ALL {
            app.trigger(kind);
            assert!(app.panel(kind).state().is_loading(), "{kind:?}");
        }
    }

    #[tokio::test]
    async fn panels_start_idle_with_placeholder() {
        let app = test_app();
        for panel in app.panels() {
            assert_eq!(*panel.state(), PanelState::Idle);
            assert!(!panel.descriptor().placeholder.is_empty());
        }
    }

    #[tokio::test]
    async fn completion_applies_to_the_triggering_panel() {
        let mut app = test_app();
        app.trigger(OperationKind::Dog);
        app.apply_event(PanelEvent {
            kind: OperationKind::Dog,
            seq: 1,
            outcome: Ok(dog_view("https://example.test/a.jpg")),
        });
        assert_eq!(
            *app.panel(OperationKind::Dog).state(),
            PanelState::Ready(dog_view("https://example.test/a.jpg"))
        );
        // Other panels are untouched.
        assert_eq!(*app.panel(OperationKind::Cat).state(), PanelState::Idle);
    }

    #[tokio::test]
    async fn failure_message_embeds_prefix_and_error() {
        let mut app = test_app();
        app.trigger(OperationKind::Dog);
        app.apply_event(PanelEvent {
            kind: OperationKind::Dog,
            seq: 1,
            outcome: Err(ApiError::RequestFailed(500)),
        });
        match app.panel(OperationKind::Dog).state() {
            PanelState::Failed(message) => {
                assert_eq!(message, "Could not load dog image. request failed (500)");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let mut app = test_app();
        // Two triggers in quick succession.
        app.trigger(OperationKind::Dog);
        app.trigger(OperationKind::Dog);

        // The first (older) request resolves after the second trigger.
        app.apply_event(PanelEvent {
            kind: OperationKind::Dog,
            seq: 1,
            outcome: Ok(dog_view("https://example.test/old.jpg")),
        });
        assert!(
            app.panel(OperationKind::Dog).state().is_loading(),
            "stale result must not overwrite the newer loading state"
        );

        // The newer request resolves last and wins.
        app.apply_event(PanelEvent {
            kind: OperationKind::Dog,
            seq: 2,
            outcome: Ok(dog_view("https://example.test/new.jpg")),
        });
        assert_eq!(
            *app.panel(OperationKind::Dog).state(),
            PanelState::Ready(dog_view("https://example.test/new.jpg"))
        );
    }

    #[tokio::test]
    async fn retrigger_after_failure_restarts_at_loading() {
        let mut app = test_app();
        app.trigger(OperationKind::Rates);
        app.apply_event(PanelEvent {
            kind: OperationKind::Rates,
            seq: 1,
            outcome: Err(ApiError::MissingRate),
        });
        assert!(matches!(
            app.panel(OperationKind::Rates).state(),
            PanelState::Failed(_)
        ));

        app.trigger(OperationKind::Rates);
        assert!(app.panel(OperationKind::Rates).state().is_loading());
    }

    #[tokio::test]
    async fn state_transitions_fully_overwrite() {
        let mut app = test_app();
        for message in ["first", "second"] {
            app.trigger(OperationKind::Dog);
            let seq = app.panel(OperationKind::Dog).committed_seq;
            app.apply_event(PanelEvent {
                kind: OperationKind::Dog,
                seq,
                outcome: Err(ApiError::Network(message.to_string())),
            });
        }
        match app.panel(OperationKind::Dog).state() {
            PanelState::Failed(text) => {
                assert!(text.contains("second"));
                assert!(!text.contains("first"));
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn hotkeys_map_to_operations() {
        let mut app = test_app();
        assert!(app.on_key('d'));
        assert!(app.panel(OperationKind::Dog).state().is_loading());
        assert!(app.on_key('r'));
        assert!(app.panel(OperationKind::Rates).state().is_loading());
        assert!(!app.on_key('x'));
    }

    #[tokio::test]
    async fn process_events_drains_the_channel() {
        let mut app = test_app();
        app.trigger(OperationKind::Cat);
        let seq = app.panel(OperationKind::Cat).committed_seq;
        app.tx
            .send(PanelEvent {
                kind: OperationKind::Cat,
                seq,
                outcome: Err(ApiError::RequestFailed(429)),
            })
            .await
            .unwrap();

        app.process_events();
        assert!(matches!(
            app.panel(OperationKind::Cat).state(),
            PanelState::Failed(_)
        ));
    }
}
