use crate::config::PanelConfig;
use crate::prefs::FetchMessage;
use crate::widget::TriggerIcon;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Downloads and decodes the trigger icon on a worker thread. On success the
/// decoded image is reported over `tx`; on failure nothing is sent and the
/// trigger keeps its default face.
pub fn spawn_fetch(url: String, config: &PanelConfig, generation: u64, tx: Sender<FetchMessage>) {
    let timeout = config.fetch_timeout;
    let user_agent = config.user_agent.clone();
    std::thread::spawn(move || match fetch_icon(&url, timeout, &user_agent) {
        Ok(icon) => {
            let _ = tx.send(FetchMessage::IconLoaded { generation, icon });
        }
        Err(e) => log::debug!("trigger icon fetch failed: {e}"),
    });
}

fn fetch_icon(url: &str, timeout: Duration, user_agent: &str) -> Result<TriggerIcon, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("http client error: {e}"))?;

    let bytes = client
        .get(url)
        .header("User-Agent", user_agent)
        .send()
        .map_err(|e| format!("icon request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("icon fetch error: {e}"))?
        .bytes()
        .map_err(|e| format!("failed reading icon bytes: {e}"))?;

    let image = image::load_from_memory(&bytes).map_err(|e| format!("cannot decode icon: {e}"))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TriggerIcon {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}
