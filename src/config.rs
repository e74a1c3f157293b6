use crate::widget::{Corner, TriggerPlacement};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://staging-widget.30kg-rice.cooking/home?appGuid=";
const DEFAULT_PREFERENCES_URL: &str =
    "https://staging-widget.30kg-rice.cooking/api/preferences?appGuid=";
const APP_USER_AGENT: &str = "helpdock-widget";

/// Construction-time configuration for a `SupportPanel`.
///
/// One value handed to the panel when the host builds it; nothing here is
/// persisted or re-read later.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL for the embedded panel content. The API key is appended
    /// verbatim, so this ends with the `appGuid` query parameter.
    pub base_url: String,
    /// Endpoint for the one-shot widget-preferences fetch. The API key is
    /// appended verbatim, like `base_url`.
    pub preferences_url: String,
    /// Timeout applied to the preferences and icon fetches.
    pub fetch_timeout: Duration,
    /// User-Agent header sent with both fetches.
    pub user_agent: String,
    /// Trigger placement when the remote preferences say "right".
    pub right_placement: TriggerPlacement,
    /// Trigger placement for "left" and for anything unrecognized.
    pub left_placement: TriggerPlacement,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            preferences_url: DEFAULT_PREFERENCES_URL.into(),
            fetch_timeout: Duration::from_secs(15),
            user_agent: APP_USER_AGENT.into(),
            right_placement: TriggerPlacement {
                corner: Corner::BottomRight,
                margin_x: 10.0,
                margin_y: 10.0,
            },
            left_placement: TriggerPlacement::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Corner;

    #[test]
    fn default_placements_use_distinct_corners_and_margins() {
        let config = PanelConfig::default();
        assert_eq!(config.right_placement.corner, Corner::BottomRight);
        assert_eq!(config.left_placement.corner, Corner::BottomLeft);
        assert!(config.right_placement.margin_x < config.left_placement.margin_x);
    }

    #[test]
    fn base_url_ends_with_app_guid_parameter() {
        assert!(PanelConfig::default().base_url.ends_with("?appGuid="));
    }
}
