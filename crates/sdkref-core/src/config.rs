use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level project configuration loaded from `.sdkref.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SdkrefConfig {
    /// Path to the OpenAPI document, relative to the invocation directory.
    pub spec: String,
    /// Path to the README to patch.
    pub readme: String,
    /// Static tables controlling grouping, naming, and section order.
    pub reference: ReferenceTables,
}

impl Default for SdkrefConfig {
    fn default() -> Self {
        Self {
            spec: "openapi.yaml".to_string(),
            readme: "README.md".to_string(),
            reference: ReferenceTables::default(),
        }
    }
}

/// Static tables applied during extraction. New tags in the spec are
/// auto-discovered; only special cases need entries here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Tags whose methods are folded into another resource's section.
    pub merge_tags: IndexMap<String, String>,
    /// Tags that produce no SDK methods at all.
    pub skip_tags: BTreeSet<String>,
    /// Display-name overrides (tag -> heading text). Unmatched tags render as-is.
    pub display_names: IndexMap<String, String>,
    /// Resources rendered first, in this order, when present.
    pub preferred_order: Vec<String>,
    /// Resources rendered after everything else, in this order.
    pub last_resources: Vec<String>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            merge_tags: [("GMB Reviews", "Accounts"), ("LinkedIn Mentions", "Accounts")]
                .into_iter()
                .map(|(tag, parent)| (tag.to_string(), parent.to_string()))
                .collect(),
            skip_tags: ["Inbox Access"].into_iter().map(String::from).collect(),
            display_names: [
                ("Connect", "Connect (OAuth)"),
                ("Reddit Search", "Reddit"),
                ("Messages", "Messages (Inbox)"),
                ("Comments", "Comments (Inbox)"),
                ("Reviews", "Reviews (Inbox)"),
            ]
            .into_iter()
            .map(|(tag, name)| (tag.to_string(), name.to_string()))
            .collect(),
            preferred_order: [
                "Posts",
                "Accounts",
                "Profiles",
                "Analytics",
                "Account Groups",
                "Queue",
                "Webhooks",
                "API Keys",
                "Media",
                "Tools",
                "Users",
                "Usage",
                "Logs",
                "Connect",
                "Reddit Search",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            last_resources: ["Invites"].into_iter().map(String::from).collect(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".sdkref.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SdkrefConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SdkrefConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# sdkref configuration
spec: openapi.yaml      # OpenAPI document to read
readme: README.md       # document receiving the SDK Reference section

reference:
  merge_tags:           # tag -> parent resource (no section of their own)
    GMB Reviews: Accounts
    LinkedIn Mentions: Accounts
  skip_tags:            # tags with no SDK methods
    - Inbox Access
  display_names:        # tag -> section heading (unlisted tags render as-is)
    Connect: Connect (OAuth)
    Reddit Search: Reddit
    Messages: Messages (Inbox)
    Comments: Comments (Inbox)
    Reviews: Reviews (Inbox)
  preferred_order:      # sections rendered first; new tags follow alphabetically
    - Posts
    - Accounts
    - Profiles
    - Analytics
    - Account Groups
    - Queue
    - Webhooks
    - API Keys
    - Media
    - Tools
    - Users
    - Usage
    - Logs
    - Connect
    - Reddit Search
  last_resources:       # sections always rendered last
    - Invites
"#
}
