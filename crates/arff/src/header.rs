//! Header model: attribute types, attributes, and the relation header.
//!
//! A [`Header`] carries the free-form comment block, the relation name, and
//! the ordered attribute list. Attribute order is authoritative: every data
//! row's positional values correspond one-to-one, in order, to
//! [`Header::attributes`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of an attribute.
///
/// `Numeric` and `Real` both decode to `f64`, `Integer` to `i64`. `Nominal`
/// values are constrained to the attribute's declared value set; `String`
/// is unconstrained text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Numeric,
    Real,
    Integer,
    String,
    Nominal,
}

impl AttributeType {
    /// Classify a type token from an attribute directive.
    ///
    /// Matching is case-insensitive; a brace-delimited value list implies
    /// `Nominal`. Returns `None` for unrecognized tokens.
    pub fn classify(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "numeric" => Some(Self::Numeric),
            "real" => Some(Self::Real),
            "integer" => Some(Self::Integer),
            "string" => Some(Self::String),
            "nominal" => Some(Self::Nominal),
            _ => {
                if token.starts_with('{') && token.ends_with('}') {
                    Some(Self::Nominal)
                } else {
                    None
                }
            }
        }
    }

    /// The canonical declaration keyword.
    ///
    /// Nominal attributes are declared by their brace-enclosed value list
    /// rather than this keyword; see [`Attribute::type_spec`].
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Real => "real",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Nominal => "nominal",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named, typed column declared in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name as declared.
    pub name: String,
    /// Declared type.
    pub attr_type: AttributeType,
    /// Legal value tokens, in declaration order. Populated only for
    /// `Nominal`; empty otherwise.
    pub values: Vec<String>,
}

impl Attribute {
    /// Create an attribute with an explicit type and value set.
    pub fn new(
        name: impl Into<String>,
        attr_type: AttributeType,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attr_type,
            values,
        }
    }

    /// Create a numeric attribute.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Numeric, Vec::new())
    }

    /// Create a real attribute.
    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Real, Vec::new())
    }

    /// Create an integer attribute.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Integer, Vec::new())
    }

    /// Create a string attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String, Vec::new())
    }

    /// Create a nominal attribute with its closed value set.
    pub fn nominal<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            AttributeType::Nominal,
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Whether `value` is a member of the declared nominal value set.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn accepts(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// The type-spec as it appears in an attribute directive: the keyword
    /// for simple types, the brace-enclosed comma-joined value list for
    /// nominal.
    pub fn type_spec(&self) -> String {
        match self.attr_type {
            AttributeType::Nominal => format!("{{{}}}", self.values.join(",")),
            other => other.keyword().to_string(),
        }
    }
}

/// Relation header: comment block, relation name, ordered attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Free-form comment block, one source line per `\n`-separated line,
    /// comment markers stripped.
    pub comment: String,
    /// The dataset's declared name.
    pub relation: String,
    /// Declared attributes, in declaration order.
    pub attributes: Vec<Attribute>,
}

impl Header {
    /// Create a header with the given relation name and no attributes.
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            comment: String::new(),
            relation: relation.into(),
            attributes: Vec::new(),
        }
    }

    /// Set the comment block.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Append an attribute.
    ///
    /// Duplicate names are not rejected; the format itself permits them,
    /// and name-keyed binding then resolves to the last declaration.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        attr_type: AttributeType,
        values: Vec<String>,
    ) {
        self.attributes.push(Attribute::new(name, attr_type, values));
    }

    /// Append an already-built attribute.
    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attributes are declared.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
