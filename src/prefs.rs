use crate::config::PanelConfig;
use crate::widget::TriggerIcon;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Remote styling for the floating trigger, fetched once per initialize
/// call. Every field is optional on the wire; each one that is missing just
/// skips its own styling effect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPreferences {
    /// Primary color channels keyed "r"/"g"/"b", each expected 0..=255.
    #[serde(default)]
    pub widget_primary_color: Option<HashMap<String, i64>>,
    /// URL of an icon for the trigger face.
    #[serde(default)]
    pub widget_icon: Option<String>,
    /// "left" or "right", matched case-insensitively.
    #[serde(default)]
    pub widget_position: Option<String>,
}

impl WidgetPreferences {
    /// The (r, g, b) triple, present only when all three channels are.
    /// Out-of-range channel values are clamped to 0..=255.
    pub fn primary_rgb(&self) -> Option<(u8, u8, u8)> {
        let channels = self.widget_primary_color.as_ref()?;
        let channel = |key: &str| channels.get(key).map(|v| (*v).clamp(0, 255) as u8);
        Some((channel("r")?, channel("g")?, channel("b")?))
    }

    /// True when the remote position puts the trigger bottom-right.
    /// Anything else, including an absent field, means bottom-left.
    pub fn positions_right(&self) -> bool {
        self.widget_position
            .as_deref()
            .map(|p| p.eq_ignore_ascii_case("right"))
            .unwrap_or(false)
    }
}

/// Messages from the styling workers back to the UI thread.
#[derive(Clone)]
pub enum FetchMessage {
    /// The preferences fetch finished under the given generation.
    PrefsFetched {
        generation: u64,
        result: Result<WidgetPreferences, String>,
    },
    /// An icon was downloaded and decoded under the given generation.
    IconLoaded { generation: u64, icon: TriggerIcon },
}

/// Issues the one-shot preferences fetch on a worker thread. The result is
/// reported over `tx` stamped with `generation`; the panel drops it on drain
/// if the subscription has been replaced since.
pub fn spawn_fetch(config: &PanelConfig, api_key: &str, generation: u64, tx: Sender<FetchMessage>) {
    let url = format!("{}{}", config.preferences_url, api_key);
    let timeout = config.fetch_timeout;
    let user_agent = config.user_agent.clone();
    std::thread::spawn(move || {
        let result = fetch_preferences(&url, timeout, &user_agent);
        let _ = tx.send(FetchMessage::PrefsFetched { generation, result });
    });
}

fn fetch_preferences(
    url: &str,
    timeout: Duration,
    user_agent: &str,
) -> Result<WidgetPreferences, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("http client error: {e}"))?;

    client
        .get(url)
        .header("User-Agent", user_agent)
        .send()
        .map_err(|e| format!("request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("preferences api error: {e}"))?
        .json::<WidgetPreferences>()
        .map_err(|e| format!("invalid response json: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let prefs: WidgetPreferences = serde_json::from_str(
            r#"{
                "widgetPrimaryColor": {"r": 10, "g": 20, "b": 30},
                "widgetIcon": "https://cdn.example/icon.png",
                "widgetPosition": "right"
            }"#,
        )
        .unwrap();
        assert_eq!(prefs.primary_rgb(), Some((10, 20, 30)));
        assert_eq!(prefs.widget_icon.as_deref(), Some("https://cdn.example/icon.png"));
        assert!(prefs.positions_right());
    }

    #[test]
    fn empty_payload_parses_with_everything_absent() {
        let prefs: WidgetPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.primary_rgb(), None);
        assert!(prefs.widget_icon.is_none());
        assert!(!prefs.positions_right());
    }

    #[test]
    fn missing_channel_skips_the_whole_tint() {
        let prefs: WidgetPreferences =
            serde_json::from_str(r#"{"widgetPrimaryColor": {"r": 10, "g": 20}}"#).unwrap();
        assert_eq!(prefs.primary_rgb(), None);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let prefs: WidgetPreferences = serde_json::from_str(
            r#"{"widgetPrimaryColor": {"r": 300, "g": -5, "b": 128}}"#,
        )
        .unwrap();
        assert_eq!(prefs.primary_rgb(), Some((255, 0, 128)));
    }

    #[test]
    fn position_matching_is_case_insensitive() {
        for raw in ["right", "RIGHT", "Right"] {
            let prefs: WidgetPreferences =
                serde_json::from_str(&format!(r#"{{"widgetPosition": "{raw}"}}"#)).unwrap();
            assert!(prefs.positions_right(), "{raw} should read as right");
        }
        for raw in ["left", "LEFT", "center", ""] {
            let prefs: WidgetPreferences =
                serde_json::from_str(&format!(r#"{{"widgetPosition": "{raw}"}}"#)).unwrap();
            assert!(!prefs.positions_right(), "{raw} should read as left");
        }
    }
}
