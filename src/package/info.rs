//! App identity read from the manifest root.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::json::try_string;

/// Name, version, publisher and id of the app a manifest describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl AppInfo {
    pub fn from_manifest(raw: &Value) -> Self {
        Self {
            name: try_string(raw, &["Name", "name"]),
            version: try_string(raw, &["Version", "version"]),
            publisher: try_string(raw, &["Publisher", "publisher"]),
            app_id: try_string(raw, &["AppId", "appId", "AppID"]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.version.is_none()
            && self.publisher.is_none()
            && self.app_id.is_none()
    }

    /// `Publisher_Name_Version`, skipping missing parts.
    pub fn display_name(&self) -> String {
        [&self.publisher, &self.name, &self.version]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("_")
    }
}
