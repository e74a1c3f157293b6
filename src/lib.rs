//! Embeddable support-panel widget for desktop hosts.
//!
//! The host builds a [`SupportPanel`], attaches its embedded content surface,
//! and calls [`SupportPanel::initialize`] once with its API key and a trigger
//! widget. After that, [`SupportPanel::set_invocation_method`] picks how the
//! panel opens: a floating button, a shake gesture, or programmatically via
//! [`SupportPanel::invoke`]. A one-shot background fetch styles the trigger
//! from remote widget preferences; styling failures degrade silently.

pub mod config;
pub mod icon;
pub mod invocation;
pub mod panel;
pub mod prefs;
pub mod shake;
pub mod state;
pub mod ui;
pub mod user;
pub mod widget;

pub use config::PanelConfig;
pub use invocation::InvocationMethod;
pub use panel::{PanelView, SupportPanel};
pub use prefs::WidgetPreferences;
pub use shake::{GestureSignal, PointerShakeDetector};
pub use state::PanelEvent;
pub use user::User;
pub use widget::{Corner, TriggerIcon, TriggerPlacement, TriggerWidget};
