use std::collections::BTreeMap;

use serde::Serialize;

/// Schema version VS Code expects at the top of launch.json.
pub const LAUNCH_SCHEMA_VERSION: &str = "0.2.0";

/// Debugger type tag for Go programs.
pub const GO_DEBUGGER_TYPE: &str = "go";

/// The only request mode GoLand run configurations map to.
pub const LAUNCH_REQUEST: &str = "launch";

/// Project-root placeholder GoLand uses in file paths.
pub const PROJECT_DIR_PLACEHOLDER: &str = "$PROJECT_DIR$/";

/// A single entry in the `configurations` list of launch.json.
///
/// `args` and `env` are omitted from the serialized document entirely when
/// the source configuration carried no parameters/envs element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub debugger: String,
    pub request: String,
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

/// The launch.json document written into `.vscode/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDocument {
    pub version: String,
    pub configurations: Vec<LaunchConfiguration>,
}

impl LaunchDocument {
    pub fn new(configurations: Vec<LaunchConfiguration>) -> Self {
        Self {
            version: LAUNCH_SCHEMA_VERSION.to_owned(),
            configurations,
        }
    }
}
