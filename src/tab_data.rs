/// Data structures for open workspace tabs
use serde::{Deserialize, Serialize};

/// Key of the default tab every session starts with
pub const INITIAL_TAB_KEY: &str = "initial";

/// Where the repository behind a tab lives
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RepoSource {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "github", alias = "remote_hosted")]
    RemoteHosted,
}

impl RepoSource {
    pub fn label(&self) -> &'static str {
        match self {
            RepoSource::Local => "Local",
            RepoSource::RemoteHosted => "GitHub",
        }
    }
}

/// One open workspace view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub key: String,
    pub name: String,
    pub repo_name: String,
    pub source: RepoSource,
}

impl Tab {
    pub fn new(key: String, name: String, repo_name: String, source: RepoSource) -> Tab {
        Tab {
            key,
            name,
            repo_name,
            source,
        }
    }

    /// The "Home" tab backed by the local filesystem
    pub fn initial() -> Tab {
        Tab::new(
            INITIAL_TAB_KEY.to_string(),
            "Home".to_string(),
            String::new(),
            RepoSource::Local,
        )
    }

    pub fn is_initial(&self) -> bool {
        self.key == INITIAL_TAB_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab() {
        let tab = Tab::initial();

        assert_eq!(tab.key, "initial");
        assert_eq!(tab.name, "Home");
        assert_eq!(tab.repo_name, "");
        assert_eq!(tab.source, RepoSource::Local);
        assert!(tab.is_initial());
    }

    #[test]
    fn test_serialized_field_names() {
        let tab = Tab::new(
            "github.com/org/repo".to_string(),
            "Repo".to_string(),
            "repo".to_string(),
            RepoSource::RemoteHosted,
        );

        let value = serde_json::to_value(&tab).unwrap();

        assert_eq!(value["key"], "github.com/org/repo");
        assert_eq!(value["repoName"], "repo");
        assert_eq!(value["source"], "github");
    }

    #[test]
    fn test_source_label() {
        assert_eq!(RepoSource::Local.label(), "Local");
        assert_eq!(RepoSource::RemoteHosted.label(), "GitHub");
    }

    #[test]
    fn test_deserialize_remote_hosted_alias() {
        let json = r#"{"key":"a","name":"A","repoName":"a","source":"remote_hosted"}"#;

        let tab: Tab = serde_json::from_str(json).unwrap();

        assert_eq!(tab.source, RepoSource::RemoteHosted);
    }

    #[test]
    fn test_deserialize_unknown_source_fails() {
        let json = r#"{"key":"a","name":"A","repoName":"a","source":"gitlab"}"#;

        assert!(serde_json::from_str::<Tab>(json).is_err());
    }
}
