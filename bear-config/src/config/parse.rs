//! Config parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use bear_core::{
    LanguageType, NamingConventionType, Property, PropertyType, convert, validate_identifier,
};

use super::{
    Config, Target,
    raw::{RawConfig, RawProperty, RawTarget},
    substitute::substitute,
    validate::{find_name_span, find_name_spans},
};
use crate::{Error, Format, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, Format::Toml, "bear.toml")
    }
}

impl Config {
    /// Load a config file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        parse_config(&content, format, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error
    /// reporting. The filename's stem is the default type name.
    pub fn from_str_with_format(content: &str, format: Format, filename: &str) -> Result<Self> {
        parse_config(content, format, filename)
    }
}

/// Parse and validate a config.
fn parse_config(content: &str, format: Format, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawConfig = format.deserialize(&ctx)?;

    let type_name = match raw.type_name {
        Some(name) => name,
        None => default_type_name(&ctx)?,
    };
    check_type_name(&type_name, &ctx)?;

    let targets = build_targets(raw.languages, &ctx)?;

    let mut seen = HashSet::new();
    let mut properties = Vec::with_capacity(raw.properties.len());
    let mut hidden = Vec::with_capacity(raw.properties.len());
    for raw_property in raw.properties {
        if !seen.insert(raw_property.name.clone()) {
            let spans = find_name_spans(content, &raw_property.name);
            return Err(Box::new(Error::DuplicateProperty {
                src: ctx.named_source(),
                first_span: spans.first().copied(),
                second_span: spans.get(1).copied(),
                name: raw_property.name,
            }));
        }
        hidden.push(raw_property.hidden);
        properties.push(build_property(raw_property, &ctx)?);
    }

    let properties = substitute(properties, &ctx)?;
    let hidden_count = hidden.iter().filter(|h| **h).count();
    let properties: Vec<Property> = properties
        .into_iter()
        .zip(hidden)
        .filter_map(|(property, hidden)| (!hidden).then_some(property))
        .collect();

    tracing::debug!(
        file = filename,
        %format,
        type_name = %type_name,
        properties = properties.len(),
        hidden = hidden_count,
        targets = targets.len(),
        "loaded config"
    );

    Ok(Config {
        type_name,
        properties,
        targets,
        hidden: hidden_count,
    })
}

/// The filename's stem in PascalCase.
fn default_type_name(ctx: &SourceContext) -> Result<String> {
    let stem = Path::new(ctx.filename())
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    convert(&stem, None, NamingConventionType::PascalCase).map_err(|e| {
        ctx.validation_error(
            format!(
                "cannot derive a type name from '{}' ({}); set 'type_name'",
                stem,
                core_reason(e)
            ),
            None,
        )
    })
}

/// A type name must convert to an identifier that does not start with a digit.
fn check_type_name(type_name: &str, ctx: &SourceContext) -> Result<()> {
    let span = find_name_span(ctx.src(), type_name);
    let converted = convert(type_name, None, NamingConventionType::PascalCase).map_err(|e| {
        ctx.validation_error(
            format!("invalid type name '{}': {}", type_name, core_reason(e)),
            span,
        )
    })?;

    match validate_identifier(&converted) {
        None => Ok(()),
        Some(reason) => Err(ctx.validation_error(
            format!(
                "invalid type name '{}': converts to '{}'; {}",
                type_name, converted, reason
            ),
            span,
        )),
    }
}

fn build_targets(raw: Vec<RawTarget>, ctx: &SourceContext) -> Result<Vec<Target>> {
    let mut targets: Vec<Target> = Vec::with_capacity(raw.len());

    for raw_target in raw {
        let (language, file_name, type_name, property_naming) = match raw_target {
            RawTarget::Name(language) => (language, None, None, None),
            RawTarget::Detailed {
                language,
                file_name,
                type_name,
                property_naming,
            } => (language, file_name, type_name, property_naming),
        };

        let span = find_name_span(ctx.src(), &language);
        let parsed: LanguageType = language
            .parse()
            .map_err(|e: String| ctx.validation_error(e, span))?;
        if targets.iter().any(|t| t.language == parsed) {
            return Err(ctx.validation_error(
                format!("language '{}' is listed more than once", parsed),
                span,
            ));
        }

        if let Some(type_name) = &type_name {
            check_type_name(type_name, ctx)?;
        }

        let property_naming = property_naming
            .map(|naming| {
                naming.parse::<NamingConventionType>().map_err(|e| {
                    ctx.validation_error(e, find_name_span(ctx.src(), &naming))
                })
            })
            .transpose()?;

        targets.push(Target {
            language: parsed,
            file_name,
            type_name,
            property_naming,
        });
    }

    Ok(targets)
}

fn build_property(raw: RawProperty, ctx: &SourceContext) -> Result<Property> {
    let span = find_name_span(ctx.src(), &raw.name);
    let invalid = |reason: String| ctx.invalid_property_error(&raw.name, reason, span);

    let ty: PropertyType = raw.ty.parse().map_err(invalid)?;
    let naming = raw
        .naming_convention
        .as_deref()
        .map(str::parse::<NamingConventionType>)
        .transpose()
        .map_err(invalid)?;

    let mut property = Property::new(raw.name.as_str(), ty, raw.value.into())
        .map_err(|e| invalid(core_reason(e)))?;
    if let Some(comment) = raw.comment {
        property = property.with_comment(comment);
    }
    if let Some(naming) = naming {
        property = property.with_naming(naming);
    }
    Ok(property)
}

fn core_reason(error: bear_core::Error) -> String {
    match error {
        bear_core::Error::InvalidName { reason, .. } => reason,
        bear_core::Error::InvalidValue { reason, .. } => reason,
    }
}
