use rust_decimal::Decimal;
use std::any;
use time::{Date, PrimitiveDateTime};

/// Numeric payload of [`Value::Number`].
///
/// Numbers are always typed, never raw text: they are written unquoted, so
/// the set of characters they can produce is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    UInt(u128),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
}

/// Dynamically typed value bound to a placeholder.
///
/// The set of variants is closed: a caller binding a native type maps it into
/// one of these through [`AsValue`](crate::AsValue), types with no mapping end
/// up as [`Value::Unsupported`] and make the assembly fail.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Number(Number),
    Text(String),
    Date(Date),
    DateTime(PrimitiveDateTime),
    /// Array literal `[a,b,...]`.
    Sequence(Vec<Value>),
    /// Tuple literal `(a,b,...)`.
    Composite(Vec<Value>),
    /// Name of the Rust type that has no literal representation.
    Unsupported(&'static str),
}

impl Value {
    /// Marks a value of type `T` as not representable.
    pub fn unsupported<T: ?Sized>() -> Self {
        Value::Unsupported(any::type_name::<T>())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Variant name, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Number(..) => "Number",
            Value::Text(..) => "Text",
            Value::Date(..) => "Date",
            Value::DateTime(..) => "DateTime",
            Value::Sequence(..) => "Sequence",
            Value::Composite(..) => "Composite",
            Value::Unsupported(..) => "Unsupported",
        }
    }

    /// First unsupported type name found, searching nested values depth first.
    pub fn find_unsupported(&self) -> Option<&'static str> {
        match self {
            Value::Unsupported(name) => Some(*name),
            Value::Sequence(values) | Value::Composite(values) => {
                values.iter().find_map(Value::find_unsupported)
            }
            _ => None,
        }
    }
}
