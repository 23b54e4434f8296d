//! Swift binding generator.

use std::path::{Path, PathBuf};

use eyre::Result;
use lanebridge_codegen::{BindingSpec, GenerateResult, LanguageCodegen, PreviewFile};
use lanebridge_core::{GeneratedFile, GenerationStamp, WriteResult};
use lanebridge_ir::{ActionDescriptor, ActionRegistry, IgnoreRules, ToolCatalog};

use crate::{
    emitter::{BindingEmitter, EmittedBinding},
    files::{ActionsSwift, AdapterSwift, ProtocolSwift},
};

/// Assembles Swift bindings for a set of registry actions.
pub struct Generator {
    actions: Vec<ActionDescriptor>,
    ignore: IgnoreRules,
    catalog: ToolCatalog,
    stamp: GenerationStamp,
    override_dir: Option<PathBuf>,
}

/// Every file of one generation pass, plus what was left out.
struct Plan {
    actions: ActionsSwift,
    protocols: Vec<ProtocolSwift>,
    adapters: Vec<AdapterSwift>,
    skipped_actions: Vec<String>,
    warnings: Vec<String>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    /// Generator with the default ignore rules and tool catalog.
    ///
    /// Stamps adapters with the local clock; regeneration is byte-identical
    /// only for a fixed stamp set through [`Generator::with_stamp`].
    pub fn new(actions: Vec<ActionDescriptor>) -> Self {
        Self {
            actions,
            ignore: IgnoreRules::defaults(),
            catalog: ToolCatalog::defaults(),
            stamp: GenerationStamp::now(),
            override_dir: None,
        }
    }

    pub fn from_registry(registry: &impl ActionRegistry) -> Self {
        Self::new(registry.actions())
    }

    pub fn with_ignore_rules(mut self, ignore: IgnoreRules) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_catalog(mut self, catalog: ToolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Stamp written into adapter banners. Other files never read it.
    pub fn with_stamp(mut self, stamp: GenerationStamp) -> Self {
        self.stamp = stamp;
        self
    }

    /// Folder where users place replacement adapter files.
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    fn plan(&self) -> Plan {
        let emitter = BindingEmitter::new();
        let mut emitted: Vec<EmittedBinding> = Vec::new();
        let mut skipped_actions = Vec::new();

        for action in &self.actions {
            match BindingSpec::from_action(action, &self.ignore, &self.catalog) {
                Some(spec) => emitted.push(emitter.emit(&spec)),
                None => skipped_actions.push(action.name.clone()),
            }
        }

        let warnings = emitted
            .iter()
            .flat_map(|binding| binding.warnings.iter().cloned())
            .collect();

        let mut actions = ActionsSwift::new(
            emitted
                .iter()
                .map(|binding| binding.function.clone())
                .collect(),
        );
        let mut protocols = Vec::new();
        let mut adapters = Vec::new();

        for tool in emitted.iter().filter_map(|binding| binding.tool.as_ref()) {
            actions = actions.tool(&tool.object_name, &tool.class_name);
            protocols.push(ProtocolSwift::new(tool.protocol.clone()));

            let mut adapter = AdapterSwift::new(
                &tool.class_name,
                tool.protocol.name(),
                self.stamp.clone(),
            );
            if let Some(dir) = &self.override_dir {
                adapter = adapter.override_dir(dir);
            }
            adapters.push(adapter);
        }

        Plan {
            actions,
            protocols,
            adapters,
            skipped_actions,
            warnings,
        }
    }

    /// Render every file in memory.
    fn preview_files(&self) -> Vec<PreviewFile> {
        let plan = self.plan();
        let mut files = vec![PreviewFile {
            path: ActionsSwift::FILE_NAME.to_string(),
            content: plan.actions.render(),
        }];

        for protocol in &plan.protocols {
            files.push(PreviewFile {
                path: protocol.file_name(),
                content: protocol.render(),
            });
        }

        for adapter in &plan.adapters {
            files.push(PreviewFile {
                path: adapter.file_name(),
                content: adapter.render(),
            });
        }

        files
    }

    /// Write every file into `output_dir`.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let plan = self.plan();
        let mut result = GenerateResult {
            skipped_actions: plan.skipped_actions,
            warnings: plan.warnings,
            ..GenerateResult::default()
        };

        for action in &result.skipped_actions {
            tracing::debug!(action = %action, "skipping action without options");
        }
        for warning in &result.warnings {
            tracing::warn!("{}", warning);
        }

        let mut writes = vec![plan.actions.write(output_dir)?];
        for protocol in &plan.protocols {
            writes.push(protocol.write(output_dir)?);
        }
        for adapter in &plan.adapters {
            writes.push(adapter.write(output_dir)?);
        }

        for write in writes {
            match write {
                WriteResult::Written(path) => {
                    tracing::info!(path = %path.display(), "generated");
                    result.written.push(path);
                }
                WriteResult::Overridden(path) => {
                    tracing::info!(path = %path.display(), "using user-provided file");
                    result.overridden.push(path);
                }
            }
        }

        Ok(result)
    }
}
