use crate::{BindError, Error, Number, Result, Value, separated_by};
use std::fmt::Write;
use time::{Date, PrimitiveDateTime};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        let value = $value;
        if value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format_finite(value));
        } else if value.is_nan() {
            $this.write_value_nan($out);
        } else {
            $this.write_value_infinity($out, value.is_sign_negative());
        }
    }};
}

/// Renders bound values as SQL literals.
///
/// Every method has a default implementing the dialect rules below, a driver
/// overrides only what differs:
///
/// | Value | Literal |
/// |---|---|
/// | `Null` | `Null` |
/// | `Number` | canonical text, unquoted |
/// | `Text` | single quoted, `'`, `\` and line breaks escaped with a backslash |
/// | `Date` | `'yyyy-MM-dd'` |
/// | `DateTime` | `'yyyy-MM-dd HH:mm:ss'` |
/// | `Sequence` | `[a,b,...]` |
/// | `Composite` | `(a,b,...)` |
/// | `Unsupported` | error |
pub trait SqlWriter {
    /// Replacement for `c` inside a quoted string literal, `None` keeps it.
    fn string_escape(&self, c: char) -> Option<&'static str> {
        match c {
            '\'' => Some(r"\'"),
            '\\' => Some(r"\\"),
            '\n' => Some(r"\n"),
            '\r' => Some(r"\r"),
            _ => None,
        }
    }

    fn write_escaped(&self, out: &mut String, value: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if let Some(replace) = self.string_escape(c) {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Append the literal for `value`.
    ///
    /// On error `out` may hold a partial literal, the caller owns the rollback.
    fn write_value(&self, out: &mut String, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_value_none(out),
            Value::Number(v) => self.write_value_number(out, v),
            Value::Text(v) => self.write_value_string(out, v),
            Value::Date(v) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::DateTime(v) => {
                out.push('\'');
                self.write_value_datetime(out, v);
                out.push('\'');
            }
            Value::Sequence(v) => self.write_value_sequence(out, v)?,
            Value::Composite(v) => self.write_value_composite(out, v)?,
            Value::Unsupported(type_name) => {
                return Err(Error::new(BindError::UnsupportedType {
                    type_name: *type_name,
                }));
            }
        };
        Ok(())
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("Null");
    }

    fn write_value_number(&self, out: &mut String, value: &Number) {
        match *value {
            Number::Int(v) => write_integer!(out, v),
            Number::UInt(v) => write_integer!(out, v),
            Number::Float32(v) => write_float!(self, out, v),
            Number::Float64(v) => write_float!(self, out, v),
            Number::Decimal(v) => {
                let _ = write!(out, "{}", v);
            }
        }
    }

    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        out.push_str(if negative { "-inf" } else { "inf" });
    }

    fn write_value_nan(&self, out: &mut String) {
        out.push_str("nan");
    }

    /// Quote and escape in one step, no text reaches a literal unescaped.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value);
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_datetime(&self, out: &mut String, value: &PrimitiveDateTime) {
        self.write_value_date(out, &value.date());
        let _ = write!(
            out,
            " {:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second()
        );
    }

    fn write_value_sequence(&self, out: &mut String, value: &[Value]) -> Result<()> {
        out.push('[');
        separated_by(out, value, |out, v| self.write_value(out, v), ",")?;
        out.push(']');
        Ok(())
    }

    fn write_value_composite(&self, out: &mut String, value: &[Value]) -> Result<()> {
        out.push('(');
        separated_by(out, value, |out, v| self.write_value(out, v), ",")?;
        out.push(')');
        Ok(())
    }
}

/// Writer for the ClickHouse dialect, it uses the default rules unchanged.
#[derive(Default, Debug, Clone, Copy)]
pub struct ClickHouseSqlWriter {}

impl ClickHouseSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for ClickHouseSqlWriter {}
