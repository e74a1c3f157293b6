/// Events sent from collaborator threads to the UI thread.
///
/// The panel drains these once per frame in `SupportPanel::process_events`.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// The floating trigger was tapped.
    TriggerTapped,
    /// The gesture signal fired. Stamped with the subscription generation it
    /// was issued under so events queued before `destroy` can be dropped.
    ShakeDetected { generation: u64 },
}
