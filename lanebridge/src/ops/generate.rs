//! Generate operation - Swift bindings from the exported registry.

use eyre::{Context, Result};
use lanebridge_codegen::LanguageCodegen;
use lanebridge_codegen_swift::Generator;
use lanebridge_ir::JsonRegistry;
use lanebridge_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult};

/// Load the actions export and run the generator configured by the manifest.
pub fn generate(manifest: &Manifest, dry_run: bool) -> Result<GenerateReport> {
    let actions_path = manifest.actions_path();
    let registry = JsonRegistry::open(&actions_path)
        .wrap_err_with(|| format!("Failed to load actions from {}", actions_path.display()))?;

    let generator = Generator::from_registry(&registry)
        .with_ignore_rules(manifest.ignore_rules())
        .with_catalog(manifest.tool_catalog())
        .with_override_dir(manifest.config_dir());

    let output_dir = manifest.output_dir();
    let result = if dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        GenerationResult::Written(
            generator
                .generate(&output_dir)
                .wrap_err("Failed to generate bindings")?,
        )
    };

    Ok(GenerateReport {
        action_count: registry.len(),
        output_dir,
        result,
    })
}
