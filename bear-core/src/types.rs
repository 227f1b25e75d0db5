//! Closed enumerations shared by every crate in the workspace.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Value types a property can declare.
///
/// This is a language-agnostic representation. Each generator maps every
/// member to a native type token through a `TypeMapper`, or rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    Double,
    String,
    Regex,
}

impl PropertyType {
    /// Every member, in declaration order.
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Bool,
        PropertyType::Int,
        PropertyType::Float,
        PropertyType::Double,
        PropertyType::String,
        PropertyType::Regex,
    ];

    /// Get the type name used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "string",
            PropertyType::Regex => "regex",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(PropertyType::Bool),
            "int" | "integer" => Ok(PropertyType::Int),
            "float" => Ok(PropertyType::Float),
            "double" => Ok(PropertyType::Double),
            "string" | "str" => Ok(PropertyType::String),
            "regex" => Ok(PropertyType::Regex),
            _ => Err(format!(
                "unknown property type '{}', expected one of: bool, int, float, double, string, regex",
                s
            )),
        }
    }
}

/// Identifier formatting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConventionType {
    /// `max_retries`
    #[serde(alias = "snake")]
    SnakeCase,
    /// `MAX_RETRIES`
    #[serde(alias = "screaming_snake")]
    ScreamingSnakeCase,
    /// `maxRetries`
    #[serde(alias = "camel")]
    CamelCase,
    /// `MaxRetries`
    #[serde(alias = "pascal")]
    PascalCase,
    /// `max-retries`
    #[serde(alias = "kebab")]
    KebabCase,
}

impl NamingConventionType {
    /// Every member, in declaration order.
    pub const ALL: [NamingConventionType; 5] = [
        NamingConventionType::SnakeCase,
        NamingConventionType::ScreamingSnakeCase,
        NamingConventionType::CamelCase,
        NamingConventionType::PascalCase,
        NamingConventionType::KebabCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConventionType::SnakeCase => "snake_case",
            NamingConventionType::ScreamingSnakeCase => "screaming_snake_case",
            NamingConventionType::CamelCase => "camel_case",
            NamingConventionType::PascalCase => "pascal_case",
            NamingConventionType::KebabCase => "kebab_case",
        }
    }

    /// Whether words are told apart by letter case rather than a delimiter.
    pub fn is_case_delimited(&self) -> bool {
        matches!(
            self,
            NamingConventionType::CamelCase | NamingConventionType::PascalCase
        )
    }
}

impl fmt::Display for NamingConventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConventionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "snake" | "snake_case" => Ok(NamingConventionType::SnakeCase),
            "screaming_snake" | "screaming_snake_case" => {
                Ok(NamingConventionType::ScreamingSnakeCase)
            }
            "camel" | "camel_case" => Ok(NamingConventionType::CamelCase),
            "pascal" | "pascal_case" => Ok(NamingConventionType::PascalCase),
            "kebab" | "kebab_case" => Ok(NamingConventionType::KebabCase),
            _ => Err(format!("unknown naming convention '{}'", s)),
        }
    }
}

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    /// C header
    #[serde(alias = "h")]
    C,
    #[serde(alias = "rs")]
    Rust,
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "py")]
    Python,
    #[serde(alias = "golang")]
    Go,
}

impl LanguageType {
    /// Every member, in declaration order.
    pub const ALL: [LanguageType; 5] = [
        LanguageType::C,
        LanguageType::Rust,
        LanguageType::TypeScript,
        LanguageType::Python,
        LanguageType::Go,
    ];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageType::C => "c",
            LanguageType::Rust => "rust",
            LanguageType::TypeScript => "typescript",
            LanguageType::Python => "python",
            LanguageType::Go => "go",
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "h" => Ok(LanguageType::C),
            "rust" | "rs" => Ok(LanguageType::Rust),
            "typescript" | "ts" => Ok(LanguageType::TypeScript),
            "python" | "py" => Ok(LanguageType::Python),
            "go" | "golang" => Ok(LanguageType::Go),
            _ => Err(format!(
                "unknown language '{}', expected one of: c, rust, typescript, python, go",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_from_str() {
        assert_eq!("bool".parse::<PropertyType>().unwrap(), PropertyType::Bool);
        assert_eq!("INT".parse::<PropertyType>().unwrap(), PropertyType::Int);
        assert_eq!(
            "regex".parse::<PropertyType>().unwrap(),
            PropertyType::Regex
        );
        assert!("list".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_property_type_round_trips_through_as_str() {
        for ty in PropertyType::ALL {
            assert_eq!(ty.as_str().parse::<PropertyType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_naming_convention_aliases() {
        let long: NamingConventionType = serde_json::from_str(r#""snake_case""#).unwrap();
        let short: NamingConventionType = serde_json::from_str(r#""snake""#).unwrap();
        assert_eq!(long, NamingConventionType::SnakeCase);
        assert_eq!(short, NamingConventionType::SnakeCase);

        assert_eq!(
            "Pascal-Case".parse::<NamingConventionType>().unwrap(),
            NamingConventionType::PascalCase
        );
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("c".parse::<LanguageType>().unwrap(), LanguageType::C);
        assert_eq!("rs".parse::<LanguageType>().unwrap(), LanguageType::Rust);
        assert_eq!(
            "TypeScript".parse::<LanguageType>().unwrap(),
            LanguageType::TypeScript
        );
        assert_eq!("py".parse::<LanguageType>().unwrap(), LanguageType::Python);
        assert_eq!("golang".parse::<LanguageType>().unwrap(), LanguageType::Go);
        assert!("cobol".parse::<LanguageType>().is_err());
    }

    #[test]
    fn test_language_display() {
        assert_eq!(LanguageType::C.to_string(), "c");
        assert_eq!(LanguageType::TypeScript.to_string(), "typescript");
    }

    #[test]
    fn test_language_deserialize() {
        #[derive(Deserialize)]
        struct Target {
            language: LanguageType,
        }
        let target: Target = toml::from_str(r#"language = "ts""#).unwrap();
        assert_eq!(target.language, LanguageType::TypeScript);

        let go: LanguageType = serde_json::from_str(r#""go""#).unwrap();
        assert_eq!(go, LanguageType::Go);
    }
}
