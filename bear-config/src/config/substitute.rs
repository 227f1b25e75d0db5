//! `${name}` substitution in string and regex values.

use std::collections::HashMap;

use bear_core::{Property, PropertyType, PropertyValue};

use super::validate::{REFERENCE, find_name_span, find_reference_span};
use crate::{Error, Result, error::SourceContext};

/// Resolve every reference in `properties`, returning them in the same order.
///
/// A referenced property contributes its own resolved value; booleans and
/// numbers contribute their literal text.
pub(super) fn substitute(properties: Vec<Property>, ctx: &SourceContext) -> Result<Vec<Property>> {
    let rendered = {
        let mut resolver = Resolver::new(&properties, ctx);
        (0..properties.len())
            .map(|i| resolver.render(i, &mut Vec::new()))
            .collect::<Result<Vec<_>>>()?
    };

    properties
        .into_iter()
        .zip(rendered)
        .map(|(property, value)| rebuild(property, value, ctx))
        .collect()
}

fn takes_references(property: &Property) -> bool {
    matches!(property.ty(), PropertyType::String | PropertyType::Regex)
}

/// Replace a string property's value with its resolved text.
fn rebuild(property: Property, value: String, ctx: &SourceContext) -> Result<Property> {
    if !takes_references(&property) || property.value().as_str() == Some(value.as_str()) {
        return Ok(property);
    }

    let mut rebuilt = Property::new(property.name(), property.ty(), PropertyValue::String(value))
        .map_err(|e| {
            ctx.invalid_property_error(
                property.name(),
                e.to_string(),
                find_name_span(ctx.src(), property.name()),
            )
        })?;
    if let Some(comment) = property.comment() {
        rebuilt = rebuilt.with_comment(comment);
    }
    if let Some(naming) = property.naming_override() {
        rebuilt = rebuilt.with_naming(naming);
    }
    Ok(rebuilt)
}

struct Resolver<'a> {
    ctx: &'a SourceContext,
    properties: &'a [Property],
    index: HashMap<&'a str, usize>,
    resolved: Vec<Option<String>>,
}

impl<'a> Resolver<'a> {
    fn new(properties: &'a [Property], ctx: &'a SourceContext) -> Self {
        let index = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name(), i))
            .collect();
        Self {
            ctx,
            properties,
            index,
            resolved: vec![None; properties.len()],
        }
    }

    fn render(&mut self, i: usize, stack: &mut Vec<usize>) -> Result<String> {
        if let Some(done) = &self.resolved[i] {
            return Ok(done.clone());
        }

        if let Some(pos) = stack.iter().position(|&j| j == i) {
            let mut cycle: Vec<&str> = stack[pos..]
                .iter()
                .map(|&j| self.properties[j].name())
                .collect();
            cycle.push(self.properties[i].name());
            let start = self.properties[i].name();
            return Err(Box::new(Error::CyclicReference {
                src: self.ctx.named_source(),
                span: find_reference_span(self.ctx.src(), start),
                cycle: cycle.join(" -> "),
            }));
        }

        let properties = self.properties;
        let property = &properties[i];
        let value = match property.value() {
            PropertyValue::String(text) if takes_references(property) => {
                stack.push(i);
                let expanded = self.expand(i, text, stack);
                stack.pop();
                expanded?
            }
            other => other.to_string(),
        };

        self.resolved[i] = Some(value.clone());
        Ok(value)
    }

    fn expand(&mut self, i: usize, text: &str, stack: &mut Vec<usize>) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in REFERENCE.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let Some(&j) = self.index.get(name) else {
                return Err(Box::new(Error::UnknownReference {
                    src: self.ctx.named_source(),
                    span: find_reference_span(self.ctx.src(), name),
                    property: self.properties[i].name().to_string(),
                    reference: name.to_string(),
                }));
            };

            tracing::trace!(property = self.properties[i].name(), reference = name, "substituting");
            out.push_str(&text[last..whole.start()]);
            out.push_str(&self.render(j, stack)?);
            last = whole.end();
        }

        out.push_str(&text[last..]);
        Ok(out)
    }
}
