//! The emission driver.
//!
//! An [`Emission`] binds one generator to one type name and one ordered
//! property list. [`Emission::run`] resolves every identifier and type token
//! up front, then calls the generator hooks in their fixed order.

use std::collections::HashMap;

use bear_core::{LanguageType, NamingConventionType, Property, PropertyType, PropertyValue};

use crate::{Error, Generator, Result};

/// A property resolved for one target language.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    property: &'a Property,
    name: String,
    type_token: &'static str,
}

impl<'a> Field<'a> {
    /// The source property
    pub fn property(&self) -> &'a Property {
        self.property
    }

    /// Identifier converted to the target convention
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Native type token from the language's type mapper
    pub fn type_token(&self) -> &'static str {
        self.type_token
    }

    pub fn ty(&self) -> PropertyType {
        self.property.ty()
    }

    pub fn value(&self) -> &'a PropertyValue {
        self.property.value()
    }

    /// Comment, if present and not blank
    pub fn comment(&self) -> Option<&'a str> {
        self.property.comment().filter(|c| !c.trim().is_empty())
    }
}

/// Everything the file-level hooks may inspect.
#[derive(Debug, Clone)]
pub struct TypeContext<'a> {
    type_name: String,
    fields: Vec<Field<'a>>,
}

impl<'a> TypeContext<'a> {
    /// Container name converted to the language's type convention
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Resolved properties in declared order
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any property has the given type
    pub fn has_type(&self, ty: PropertyType) -> bool {
        self.fields.iter().any(|f| f.ty() == ty)
    }
}

/// One generator run over one property list.
pub struct Emission<'a> {
    language: LanguageType,
    generator: Box<dyn Generator>,
    type_name: &'a str,
    properties: &'a [Property],
    property_naming: Option<NamingConventionType>,
}

impl<'a> Emission<'a> {
    pub fn new(
        language: LanguageType,
        generator: Box<dyn Generator>,
        type_name: &'a str,
        properties: &'a [Property],
    ) -> Self {
        Self {
            language,
            generator,
            type_name,
            properties,
            property_naming: None,
        }
    }

    /// Replace the generator's default property convention.
    ///
    /// A property's own override still takes precedence.
    pub fn with_property_naming(mut self, naming: Option<NamingConventionType>) -> Self {
        self.property_naming = naming;
        self
    }

    /// Run the hooks and return the complete file content.
    ///
    /// Consumes the emission; generators are never reused across files.
    pub fn run(self) -> Result<String> {
        tracing::debug!(
            language = %self.language,
            type_name = self.type_name,
            properties = self.properties.len(),
            "starting emission"
        );

        let ctx = self.resolve()?;
        let generator = self.generator.as_ref();

        let mut out = String::new();
        out.push_str(&generator.before_type(&ctx));
        out.push_str(&generator.start_type(ctx.type_name()));

        for field in ctx.fields() {
            out.push_str(&generator.property_before_type(field));
            if let Some(comment) = field.comment() {
                out.push_str(&generator.property_comment(comment));
            }
            out.push_str(&generator.property_in_type(field));
            out.push_str(&generator.property_after_type(field));
        }

        out.push_str(&generator.end_type(&ctx));
        out.push_str(&generator.after_type(&ctx));

        tracing::debug!(language = %self.language, bytes = out.len(), "emission finished");
        Ok(out)
    }

    /// Convert names, map types and detect collisions.
    fn resolve(&self) -> Result<TypeContext<'a>> {
        let naming = self.generator.naming();
        let mapper = self.generator.type_mapper();

        let type_name = naming
            .type_name(self.type_name)
            .map_err(|e| Error::invalid_name(self.language, self.type_name, e))?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(self.properties.len());

        for property in self.properties {
            let type_token =
                mapper
                    .map_property_type(property.ty())
                    .ok_or_else(|| Error::UnsupportedType {
                        language: self.language,
                        property: property.name().to_string(),
                        ty: property.ty(),
                    })?;

            let case = property
                .naming_override()
                .or(self.property_naming)
                .unwrap_or(naming.property_case);
            let name = naming
                .property_name(property.name(), case)
                .map_err(|e| Error::invalid_name(self.language, property.name(), e))?;

            if let Some(first) = seen.insert(name.clone(), property.name()) {
                return Err(Error::NameCollision {
                    language: self.language,
                    first: first.to_string(),
                    second: property.name().to_string(),
                    converted: name,
                });
            }

            tracing::trace!(property = property.name(), converted = %name, type_token, "resolved");
            fields.push(Field {
                property,
                name,
                type_token,
            });
        }

        Ok(TypeContext { type_name, fields })
    }
}
