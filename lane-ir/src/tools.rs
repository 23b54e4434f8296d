//! Catalog of toolfile-style configuration tools.
//!
//! A tool is an action whose options can also be supplied from a user-authored
//! configuration file (`Gymfile`, `Scanfile`, ...). Such actions get an
//! interface with default implementations instead of a plain function.

use lanebridge_core::capitalize;

/// Configuration files recognised out of the box.
pub const DEFAULT_TOOL_CONFIG_FILES: &[&str] = &[
    "Appfile",
    "Deliverfile",
    "Gymfile",
    "Matchfile",
    "Precheckfile",
    "Scanfile",
    "Screengrabfile",
    "Snapshotfile",
];

/// One configuration tool, e.g. `Gymfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    identifier: String,
}

impl ToolConfig {
    /// Build from a configuration file name (`Gymfile` → tool `gym`).
    pub fn from_config_file(config_file: &str) -> Self {
        let lower = config_file.to_ascii_lowercase();
        let identifier = lower.strip_suffix("file").unwrap_or(lower.as_str()).to_string();
        Self { identifier }
    }

    /// Action name this tool corresponds to (`gym`).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Concrete adapter class name (`Gymfile`).
    pub fn class_name(&self) -> String {
        format!("{}file", capitalize(&self.identifier))
    }

    /// Interface name (`GymfileProtocol`).
    pub fn protocol_name(&self) -> String {
        format!("{}Protocol", self.class_name())
    }

    /// Name of the registry object lane scripts use (`gymfile`).
    pub fn object_name(&self) -> String {
        self.class_name().to_ascii_lowercase()
    }
}

/// The set of tool actions, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: Vec<ToolConfig>,
}

impl ToolCatalog {
    /// The built-in catalog.
    pub fn defaults() -> Self {
        Self::from_config_files(DEFAULT_TOOL_CONFIG_FILES.iter().copied())
    }

    /// An empty catalog: every action becomes a plain binding.
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn from_config_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tools: Vec<ToolConfig> = Vec::new();
        for file in files {
            let tool = ToolConfig::from_config_file(file.as_ref());
            if !tools.contains(&tool) {
                tools.push(tool);
            }
        }
        Self { tools }
    }

    /// Look up the tool matching an action name, ignoring case.
    pub fn tool_for(&self, action_name: &str) -> Option<&ToolConfig> {
        self.tools
            .iter()
            .find(|tool| tool.identifier.eq_ignore_ascii_case(action_name))
    }

    pub fn is_tool(&self, action_name: &str) -> bool {
        self.tool_for(action_name).is_some()
    }

    /// Drop the entry for an action, if present.
    pub fn remove(&mut self, action_name: &str) -> bool {
        let before = self.tools.len();
        self.tools
            .retain(|tool| !tool.identifier.eq_ignore_ascii_case(action_name));
        self.tools.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolConfig> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::defaults()
    }
}
