/// Host-supplied settings shared by every tab
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContext {
    pub api_url: String,
    #[serde(default)]
    pub home_directory: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub is_self_serve: bool,
}

impl DeviceContext {
    pub fn new(api_url: String) -> DeviceContext {
        DeviceContext {
            api_url,
            home_directory: String::new(),
            os: String::new(),
            release: String::new(),
            is_self_serve: false,
        }
    }
}
