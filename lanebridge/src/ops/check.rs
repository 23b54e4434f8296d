//! Check operation - manifest and registry validation.

use std::path::Path;

use eyre::{Context, Result};
use lanebridge_codegen::BindingSpec;
use lanebridge_ir::{ActionRegistry, JsonRegistry};
use lanebridge_manifest::Manifest;

use crate::reports::CheckReport;

/// Plan every binding without rendering, collecting what generation would warn about.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let actions_path = manifest.actions_path();
    let registry = JsonRegistry::open(&actions_path)
        .wrap_err_with(|| format!("Failed to load actions from {}", actions_path.display()))?;

    let ignore = manifest.ignore_rules();
    let catalog = manifest.tool_catalog();

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        actions_path,
        ..CheckReport::default()
    };

    for action in registry.actions() {
        let Some(spec) = BindingSpec::from_action(&action, &ignore, &catalog) else {
            report.skipped.push(action.name);
            continue;
        };

        let function = spec.function();
        for (key, tag) in function.unrecognized_types() {
            report.warnings.push(format!(
                "{}: unrecognized type '{}' for '{}', using String",
                function.action, tag, key
            ));
        }
        if let Some(tag) = &function.unrecognized_return {
            report.warnings.push(format!(
                "{}: unrecognized return type '{}', using String",
                function.action, tag
            ));
        }

        if spec.is_tool() {
            report.tools += 1;
        } else {
            report.functions += 1;
        }
    }

    Ok(report)
}
