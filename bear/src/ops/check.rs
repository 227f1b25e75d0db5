//! Check operation - validation without writing.

use std::path::Path;

use bear_codegen::Registry;
use bear_config::Config;

use super::generate::render_target;
use crate::reports::{CheckReport, PropertySummary, TargetCheck};

/// Execute the check operation.
///
/// Every target listed in the config is rendered in memory so that name,
/// type and file name problems surface without touching the output
/// directory.
pub fn check(config_path: &Path, config: &Config, registry: &Registry) -> CheckReport {
    let properties = config
        .properties()
        .iter()
        .map(|property| PropertySummary {
            name: property.name().to_string(),
            ty: property.ty(),
            value: property.value().to_string(),
            comment: property.comment().map(str::to_string),
        })
        .collect();

    let targets = config
        .targets()
        .iter()
        .map(|target| match render_target(config, registry, target) {
            Ok(rendered) => TargetCheck {
                language: target.language,
                result: Ok(rendered.file_name),
            },
            Err(error) => TargetCheck {
                language: target.language,
                result: Err(error.into()),
            },
        })
        .collect();

    CheckReport {
        config_path: config_path.display().to_string(),
        type_name: config.type_name().to_string(),
        properties,
        hidden_count: config.hidden_count(),
        targets,
    }
}
