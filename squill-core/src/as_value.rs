use crate::{Number, Value};
use rust_decimal::Decimal;
use std::{borrow::Cow, time::Duration};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Conversion from native Rust types into the closed [`Value`] set.
///
/// This is the boundary where binding happens: every typed setter of a
/// prepared statement funnels through it. Implementations must pick the
/// variant that renders the right literal, types without a literal form map
/// to [`Value::Unsupported`] so that the error surfaces at assembly instead
/// of being stringified.
///
/// # Examples
/// ```rust
/// use squill_core::{AsValue, Number, Value};
/// assert_eq!(42i32.as_value(), Value::Number(Number::Int(42)));
/// assert_eq!(None::<i32>.as_value(), Value::Null);
/// assert_eq!(
///     (1u8, "a").as_value(),
///     Value::Composite(vec![Value::Number(Number::UInt(1)), Value::Text("a".into())]),
/// );
/// ```
pub trait AsValue {
    fn as_value(self) -> Value;
}

impl AsValue for Value {
    fn as_value(self) -> Value {
        self
    }
}

impl AsValue for &Value {
    fn as_value(self) -> Value {
        self.clone()
    }
}

macro_rules! impl_as_value_number {
    ($variant:ident as $target:ty => $($source:ty),+ $(,)?) => {
        $(
            impl AsValue for $source {
                fn as_value(self) -> Value {
                    Value::Number(Number::$variant(self as $target))
                }
            }
        )+
    };
}
impl_as_value_number!(Int as i128 => i8, i16, i32, i64, i128, isize);
impl_as_value_number!(UInt as u128 => u8, u16, u32, u64, u128, usize);

impl AsValue for f32 {
    fn as_value(self) -> Value {
        Value::Number(Number::Float32(self))
    }
}

impl AsValue for f64 {
    fn as_value(self) -> Value {
        Value::Number(Number::Float64(self))
    }
}

impl AsValue for Decimal {
    fn as_value(self) -> Value {
        Value::Number(Number::Decimal(self))
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::Text(self)
    }
}

impl AsValue for &str {
    fn as_value(self) -> Value {
        Value::Text(self.into())
    }
}

impl AsValue for Cow<'_, str> {
    fn as_value(self) -> Value {
        Value::Text(self.into_owned())
    }
}

impl AsValue for Date {
    fn as_value(self) -> Value {
        Value::Date(self)
    }
}

impl AsValue for PrimitiveDateTime {
    fn as_value(self) -> Value {
        Value::DateTime(self)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(self) -> Value {
        Value::Sequence(self.into_iter().map(AsValue::as_value).collect())
    }
}

impl<T: AsValue, const N: usize> AsValue for [T; N] {
    fn as_value(self) -> Value {
        Value::Sequence(self.into_iter().map(AsValue::as_value).collect())
    }
}

impl<T: AsValue + Clone> AsValue for &[T] {
    fn as_value(self) -> Value {
        Value::Sequence(self.iter().cloned().map(AsValue::as_value).collect())
    }
}

macro_rules! impl_as_value_tuple {
    ($($name:ident),+) => {
        impl<$($name: AsValue),+> AsValue for ($($name,)+) {
            #[allow(non_snake_case)]
            fn as_value(self) -> Value {
                let ($($name,)+) = self;
                Value::Composite(vec![$($name.as_value()),+])
            }
        }
    };
}
impl_as_value_tuple!(A);
impl_as_value_tuple!(A, B);
impl_as_value_tuple!(A, B, C);
impl_as_value_tuple!(A, B, C, D);
impl_as_value_tuple!(A, B, C, D, E);
impl_as_value_tuple!(A, B, C, D, E, F);
impl_as_value_tuple!(A, B, C, D, E, F, G);
impl_as_value_tuple!(A, B, C, D, E, F, G, H);

// No literal form in the target dialect.
macro_rules! impl_as_value_unsupported {
    ($($source:ty),+ $(,)?) => {
        $(
            impl AsValue for $source {
                fn as_value(self) -> Value {
                    Value::unsupported::<$source>()
                }
            }
        )+
    };
}
impl_as_value_unsupported!(bool, Time, OffsetDateTime, Duration, Box<[u8]>);
