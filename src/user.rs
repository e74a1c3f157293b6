use serde::{Deserialize, Serialize};

/// Host-app identity handed to `SupportPanel::authenticate_user`.
///
/// Stored on the panel and exposed through `current_user`; forwarding it
/// into the embedded page is the host view's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Opaque host-side identifier.
    #[serde(default)]
    pub external_id: String,
}
