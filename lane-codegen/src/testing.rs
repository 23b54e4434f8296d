//! Descriptor fixtures shared by generator tests.

use lanebridge_ir::{ActionDescriptor, OptionDescriptor, SemanticType};
use serde_json::json;

/// `upload(path: String, verbose: Bool = false)`.
pub fn upload_action() -> ActionDescriptor {
    ActionDescriptor::new("upload")
        .description("Upload a build artifact")
        .option(
            OptionDescriptor::new("path")
                .description("Path to the artifact")
                .typed(SemanticType::String),
        )
        .option(
            OptionDescriptor::new("verbose")
                .description("Print every request")
                .typed(SemanticType::Bool)
                .default_value(false),
        )
}

/// A trimmed-down `gym` tool action.
pub fn gym_action() -> ActionDescriptor {
    ActionDescriptor::new("gym")
        .description("Build and package your app")
        .option(
            OptionDescriptor::new("workspace")
                .description("Path to the workspace file")
                .optional(),
        )
        .option(
            OptionDescriptor::new("clean")
                .description("Should the project be cleaned before building it?")
                .optional()
                .default_value(false),
        )
        .option(
            OptionDescriptor::new("output_directory")
                .description("The directory in which the ipa file should be stored in")
                .optional()
                .default_value("."),
        )
        .returns(SemanticType::String)
}

/// `precheck`, a tool with options the default ignore rules exclude.
pub fn precheck_action() -> ActionDescriptor {
    ActionDescriptor::new("precheck")
        .option(
            OptionDescriptor::new("app_identifier")
                .description("The bundle identifier of your app")
                .optional(),
        )
        .option(
            OptionDescriptor::new("curse_words")
                .description("Rule: no curse words")
                .optional(),
        )
        .option(
            OptionDescriptor::new("include_in_app_purchases")
                .description("Should check in-app purchases?")
                .typed(SemanticType::Bool)
                .default_value(true),
        )
}

/// An action returning a list, with rich defaults.
pub fn devices_action() -> ActionDescriptor {
    ActionDescriptor::new("list_devices")
        .option(
            OptionDescriptor::new("platforms")
                .description("Platforms to include")
                .default_value(json!(["ios", "tvos"])),
        )
        .option(
            OptionDescriptor::new("filters")
                .description("Attribute filters")
                .default_value(json!({ "state": "Booted" })),
        )
        .option(
            OptionDescriptor::new("limit")
                .description("Maximum number of devices")
                .typed(SemanticType::Int)
                .default_value(10),
        )
        .returns(SemanticType::Array)
}

/// A registry export in enumeration order, including one action without options.
pub fn sample_actions() -> Vec<ActionDescriptor> {
    vec![
        upload_action(),
        gym_action(),
        ActionDescriptor::without_options("puts"),
        precheck_action(),
        devices_action(),
    ]
}
