use crate::config::PanelConfig;
use crate::icon;
use crate::invocation::InvocationMethod;
use crate::prefs::{self, FetchMessage, WidgetPreferences};
use crate::shake::{GestureSignal, PointerShakeDetector};
use crate::state::PanelEvent;
use crate::user::User;
use crate::widget::TriggerWidget;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Host-owned surface that renders the embedded support content.
///
/// Implementations start hidden; the panel drives the content URL and the
/// visibility transitions.
pub trait PanelView {
    fn load_url(&mut self, url: &str);
    fn set_visible(&mut self, visible: bool);
}

/// The embedded support panel.
///
/// Owns the invocation state machine (which trigger mechanism is live and
/// whether the panel is showing), wires the tap and shake triggers, and
/// consumes the one-shot preferences fetch that styles the floating trigger.
/// All methods are meant for the host's UI thread; collaborator threads only
/// ever talk to the panel through its channels, drained by
/// [`process_events`](Self::process_events).
pub struct SupportPanel {
    config: PanelConfig,
    api_key: String,
    method: InvocationMethod,
    visible: bool,
    trigger: Option<Box<dyn TriggerWidget>>,
    signal: Box<dyn GestureSignal>,
    view: Option<Box<dyn PanelView>>,
    user: Option<User>,
    content_url: Option<String>,
    event_tx: Sender<PanelEvent>,
    event_rx: Receiver<PanelEvent>,
    fetch_tx: Sender<FetchMessage>,
    fetch_rx: Receiver<FetchMessage>,
    /// Subscription generation. Bumped by `destroy` and by re-`initialize`;
    /// worker messages and shake events stamped with an older value are
    /// dropped at the drain point.
    generation: Arc<AtomicU64>,
    initialized: bool,
}

impl SupportPanel {
    /// Builds a panel with the default pointer-shake gesture signal.
    pub fn new(config: PanelConfig) -> Self {
        Self::with_signal(config, Box::new(PointerShakeDetector::new()))
    }

    /// Builds a panel with a caller-supplied gesture signal.
    pub fn with_signal(config: PanelConfig, signal: Box<dyn GestureSignal>) -> Self {
        let (event_tx, event_rx) = mpsc::channel::<PanelEvent>();
        let (fetch_tx, fetch_rx) = mpsc::channel::<FetchMessage>();
        Self {
            config,
            api_key: String::new(),
            method: InvocationMethod::default(),
            visible: false,
            trigger: None,
            signal,
            view: None,
            user: None,
            content_url: None,
            event_tx,
            event_rx,
            fetch_tx,
            fetch_rx,
            generation: Arc::new(AtomicU64::new(0)),
            initialized: false,
        }
    }

    /// Attaches the host's embedded content surface. The view is brought in
    /// line with the panel's current state: hidden unless `invoke` already
    /// ran, and pointed at the content URL if `initialize` already ran.
    pub fn attach_view(&mut self, mut view: Box<dyn PanelView>) {
        view.set_visible(self.visible);
        if let Some(url) = self.content_url.as_deref() {
            view.load_url(url);
        }
        self.view = Some(view);
    }

    /// Wires the trigger widget and the gesture signal, loads the panel
    /// content, and issues the one-shot preferences fetch.
    ///
    /// Calling this again replaces the previous wiring: the subscription
    /// generation is bumped so in-flight results and queued gesture events
    /// from the earlier call are dropped, then everything is re-registered
    /// and the preferences are fetched again.
    pub fn initialize(&mut self, api_key: &str, mut trigger: Box<dyn TriggerWidget>) {
        if self.initialized {
            log::warn!("initialize called again; replacing trigger wiring and refetching");
            self.generation.fetch_add(1, Ordering::SeqCst);
        }

        self.api_key = api_key.to_string();
        trigger.connect(self.event_tx.clone());
        self.trigger = Some(trigger);
        self.signal.connect(self.event_tx.clone(), self.generation.clone());

        let url = format!("{}{}", self.config.base_url, self.api_key);
        if let Some(view) = self.view.as_mut() {
            view.load_url(&url);
        }
        self.content_url = Some(url);

        let generation = self.generation.load(Ordering::SeqCst);
        prefs::spawn_fetch(&self.config, &self.api_key, generation, self.fetch_tx.clone());

        self.initialized = true;
        // Bring the fresh trigger in line with whatever method is current.
        self.render_invocation();
    }

    /// Selects which trigger mechanism is live and renders its UI reaction.
    pub fn set_invocation_method(&mut self, method: InvocationMethod) {
        self.method = method;
        self.render_invocation();
    }

    fn render_invocation(&mut self) {
        match self.method {
            InvocationMethod::Fab => {
                if let Some(trigger) = self.trigger.as_mut() {
                    trigger.set_visible(true);
                }
                self.signal.stop();
            }
            InvocationMethod::ShakeGesture => {
                if let Some(trigger) = self.trigger.as_mut() {
                    trigger.set_visible(false);
                }
                self.signal.start();
            }
            InvocationMethod::Manual => {
                if let Some(trigger) = self.trigger.as_mut() {
                    trigger.set_visible(false);
                }
                self.signal.stop();
            }
        }
    }

    /// Reveals the embedded panel. Idempotent, and not gated on the current
    /// invocation method: hosts may call it directly in any mode.
    pub fn invoke(&mut self) {
        self.visible = true;
        if let Some(view) = self.view.as_mut() {
            view.set_visible(true);
        }
    }

    /// Resumes the gesture signal after the host comes back to the
    /// foreground.
    pub fn resume(&mut self) {
        self.signal.start();
    }

    /// Pauses the gesture signal.
    pub fn stop(&mut self) {
        self.signal.stop();
    }

    /// Releases the gesture signal and invalidates every outstanding
    /// subscription; queued shake events and late fetch results are dropped.
    pub fn destroy(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.signal.destroy();
    }

    /// Records the host-app identity. Exposed through
    /// [`current_user`](Self::current_user) for the host view to forward.
    pub fn authenticate_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drains collaborator events and worker results. Call once per frame
    /// from the host's UI thread.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                PanelEvent::TriggerTapped => self.invoke(),
                PanelEvent::ShakeDetected { generation } => {
                    if generation == self.generation.load(Ordering::SeqCst) {
                        self.invoke();
                    } else {
                        log::debug!("dropping shake event from stale generation {generation}");
                    }
                }
            }
        }

        while let Ok(message) = self.fetch_rx.try_recv() {
            match message {
                FetchMessage::PrefsFetched { generation, result } => {
                    if generation != self.generation.load(Ordering::SeqCst) {
                        continue;
                    }
                    match result {
                        Ok(prefs) => self.apply_preferences(&prefs),
                        // Cosmetic styling only: the error is observed and
                        // discarded, the trigger keeps its defaults.
                        Err(e) => log::debug!("widget preferences fetch failed: {e}"),
                    }
                }
                FetchMessage::IconLoaded { generation, icon } => {
                    if generation != self.generation.load(Ordering::SeqCst) {
                        continue;
                    }
                    if let Some(trigger) = self.trigger.as_mut() {
                        trigger.set_icon(icon);
                    }
                }
            }
        }
    }

    /// Applies the three independent styling effects. Each one that cannot
    /// apply (missing field, no trigger attached) is skipped on its own.
    fn apply_preferences(&mut self, prefs: &WidgetPreferences) {
        if let Some((r, g, b)) = prefs.primary_rgb() {
            if let Some(trigger) = self.trigger.as_mut() {
                trigger.set_tint(r, g, b);
            }
        }

        if let Some(icon_url) = prefs.widget_icon.as_deref() {
            let generation = self.generation.load(Ordering::SeqCst);
            icon::spawn_fetch(
                icon_url.to_string(),
                &self.config,
                generation,
                self.fetch_tx.clone(),
            );
        }

        let placement = if prefs.positions_right() {
            self.config.right_placement
        } else {
            self.config.left_placement
        };
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.set_placement(placement);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn invocation_method(&self) -> InvocationMethod {
        self.method
    }

    /// URL the embedded content was pointed at, once `initialize` ran.
    pub fn content_url(&self) -> Option<&str> {
        self.content_url.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True while the gesture signal is actively detecting.
    pub fn signal_running(&self) -> bool {
        self.signal.is_running()
    }
}
