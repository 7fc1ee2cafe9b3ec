//! Record binding: mapping attribute names onto host record shapes.
//!
//! Two shapes are supported. A name-keyed map (`BTreeMap<String, Value>` or
//! `HashMap<String, Value>`) binds dynamically: decode inserts every
//! attribute, encode requires every attribute name to be present as a key.
//! A named-field record declares its fields, with optional attribute
//! aliases, through the [`arff_record!`](crate::arff_record) macro; name
//! resolution is three-tier — exact field name, then ASCII-case-insensitive
//! name, then explicit alias.

use std::collections::{BTreeMap, HashMap};

use crate::error::BindError;
use crate::value::Value;

/// Decode target: receives one named value per attribute, in header order.
pub trait RecordSink {
    /// Store `value` under attribute `name`.
    fn put(&mut self, name: &str, value: Value) -> Result<(), BindError>;
}

/// Encode source: yields one value per attribute, looked up by name.
pub trait RecordSource {
    /// Produce the value bound to attribute `name`.
    fn get(&self, name: &str) -> Result<Value, BindError>;
}

impl RecordSink for BTreeMap<String, Value> {
    fn put(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

impl RecordSource for BTreeMap<String, Value> {
    fn get(&self, name: &str) -> Result<Value, BindError> {
        match BTreeMap::get(self, name) {
            Some(value) => Ok(value.clone()),
            None => Err(BindError::missing_key(name)),
        }
    }
}

impl RecordSink for HashMap<String, Value> {
    fn put(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

impl RecordSource for HashMap<String, Value> {
    fn get(&self, name: &str) -> Result<Value, BindError> {
        match HashMap::get(self, name) {
            Some(value) => Ok(value.clone()),
            None => Err(BindError::missing_key(name)),
        }
    }
}

/// Second- and third-tier field resolution: case-insensitive field name or
/// explicit alias. Exact matches are handled by the first macro pass.
pub fn loose_match(field: &str, alias: Option<&str>, attribute: &str) -> bool {
    field.eq_ignore_ascii_case(attribute) || alias == Some(attribute)
}

/// Conversion from a decoded [`Value`] into a field type.
///
/// `Missing` converts to `f64::NAN` for `f64` fields and to `None` for
/// `Option` fields; for `i64` and `String` fields it is a binding error.
pub trait FromValue: Sized {
    fn from_value(value: Value, field: &str) -> Result<Self, BindError>;
}

/// Conversion from a field type into a [`Value`] for encoding.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl FromValue for f64 {
    fn from_value(value: Value, field: &str) -> Result<Self, BindError> {
        match value {
            Value::Numeric(n) => Ok(n),
            Value::Integer(i) => Ok(i as f64),
            Value::Missing => Ok(f64::NAN),
            other => Err(BindError::type_mismatch(field, "numeric", other.kind())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value, field: &str) -> Result<Self, BindError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(BindError::type_mismatch(field, "integer", other.kind())),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value, field: &str) -> Result<Self, BindError> {
        match value {
            Value::Text(s) | Value::Nominal(s) => Ok(s),
            other => Err(BindError::type_mismatch(field, "string", other.kind())),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value, field: &str) -> Result<Self, BindError> {
        match value {
            Value::Missing => Ok(None),
            other => T::from_value(other, field).map(Some),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Numeric(*self)
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Missing,
        }
    }
}

/// Implement [`RecordSink`] and [`RecordSource`] for a struct with named
/// fields, declaring its attribute bindings.
///
/// Each listed field binds to the attribute of the same name; an optional
/// `=> "alias"` binds it to a differently-named attribute as well.
/// Resolution order per attribute: exact field name, case-insensitive
/// field name, alias.
///
/// ```
/// use arff::{Value, RecordSink, arff_record};
///
/// #[derive(Default)]
/// struct Iris {
///     sepal_length: f64,
///     class: String,
/// }
///
/// arff_record!(Iris {
///     sepal_length => "sepallength",
///     class,
/// });
///
/// let mut iris = Iris::default();
/// iris.put("sepallength", Value::Numeric(5.1)).unwrap();
/// iris.put("class", Value::Nominal("Iris-setosa".into())).unwrap();
/// assert_eq!(iris.sepal_length, 5.1);
/// ```
#[macro_export]
macro_rules! arff_record {
    ($ty:ty { $( $field:ident $( => $alias:literal )? ),+ $(,)? }) => {
        impl $crate::RecordSink for $ty {
            fn put(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::BindError> {
                $(
                    if stringify!($field) == name {
                        self.$field =
                            $crate::record::FromValue::from_value(value, stringify!($field))?;
                        return Ok(());
                    }
                )+
                $(
                    if $crate::record::loose_match(
                        stringify!($field),
                        $crate::arff_record!(@alias $( $alias )?),
                        name,
                    ) {
                        self.$field =
                            $crate::record::FromValue::from_value(value, stringify!($field))?;
                        return Ok(());
                    }
                )+
                Err($crate::BindError::unbound(
                    name,
                    ::std::any::type_name::<Self>(),
                ))
            }
        }

        impl $crate::RecordSource for $ty {
            fn get(
                &self,
                name: &str,
            ) -> ::std::result::Result<$crate::Value, $crate::BindError> {
                $(
                    if stringify!($field) == name {
                        return Ok($crate::record::ToValue::to_value(&self.$field));
                    }
                )+
                $(
                    if $crate::record::loose_match(
                        stringify!($field),
                        $crate::arff_record!(@alias $( $alias )?),
                        name,
                    ) {
                        return Ok($crate::record::ToValue::to_value(&self.$field));
                    }
                )+
                Err($crate::BindError::unbound(
                    name,
                    ::std::any::type_name::<Self>(),
                ))
            }
        }
    };
    (@alias $alias:literal) => {
        ::std::option::Option::Some($alias)
    };
    (@alias) => {
        ::std::option::Option::None
    };
}
