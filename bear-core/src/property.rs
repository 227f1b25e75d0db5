//! Typed properties, the unit of generated output.

use std::fmt;

use crate::{Error, NamingConventionType, PropertyType, Result};

/// A literal value attached to a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl PropertyValue {
    /// Kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::Int(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => f.write_str(&crate::float_literal(*v)),
            PropertyValue::String(s) => f.write_str(s),
        }
    }
}

/// A named, typed, optionally commented value.
///
/// Construct with [`Property::new`], which checks the identifier grammar and
/// that the value is representable by the declared type. Properties are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    ty: PropertyType,
    value: PropertyValue,
    comment: Option<String>,
    naming_override: Option<NamingConventionType>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: PropertyType, value: PropertyValue) -> Result<Self> {
        let name = name.into();

        if let Some(reason) = crate::validate_identifier(&name) {
            return Err(Error::invalid_name(name, reason));
        }

        let value = coerce_value(&name, ty, value)?;

        Ok(Self {
            name,
            ty,
            value,
            comment: None,
            naming_override: None,
        })
    }

    /// Attach a comment. Empty comments are dropped.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = if comment.trim().is_empty() {
            None
        } else {
            Some(comment)
        };
        self
    }

    /// Override the target language's naming convention for this property.
    pub fn with_naming(mut self, naming: NamingConventionType) -> Self {
        self.naming_override = Some(naming);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> PropertyType {
        self.ty
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn naming_override(&self) -> Option<NamingConventionType> {
        self.naming_override
    }
}

/// Check `value` against `ty`, widening integers for float types.
fn coerce_value(name: &str, ty: PropertyType, value: PropertyValue) -> Result<PropertyValue> {
    let mismatch = |value: &PropertyValue| {
        Error::invalid_value(
            name,
            ty,
            format!("expected a {} literal, found {}", ty, value.kind()),
        )
    };

    match (ty, value) {
        (PropertyType::Bool, v @ PropertyValue::Bool(_)) => Ok(v),
        (PropertyType::Int, v @ PropertyValue::Int(_)) => Ok(v),
        (PropertyType::Float | PropertyType::Double, PropertyValue::Int(i)) => {
            Ok(PropertyValue::Float(i as f64))
        }
        (PropertyType::Float | PropertyType::Double, PropertyValue::Float(f)) => {
            if !f.is_finite() {
                Err(Error::invalid_value(
                    name,
                    ty,
                    "value must be a finite number",
                ))
            } else if ty == PropertyType::Float && f.abs() > f64::from(f32::MAX) {
                // `float` is single precision in every target language
                Err(Error::invalid_value(
                    name,
                    ty,
                    "value is out of range for a single precision float; use double",
                ))
            } else {
                Ok(PropertyValue::Float(f))
            }
        }
        (PropertyType::String | PropertyType::Regex, v @ PropertyValue::String(_)) => Ok(v),
        (_, v) => Err(mismatch(&v)),
    }
}
