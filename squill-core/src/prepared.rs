use crate::{
    Assembler, AsValue, ClickHouseSqlWriter, ParameterStore, Result, SqlWriter, Template, Value,
};
use rust_decimal::Decimal;
use std::fmt::{self, Display, Formatter};
use time::{Date, PrimitiveDateTime};

/// A parameterized statement that accepts positional bindings.
///
/// # Binding Semantics
/// * `bind` sets the next position, starting from 1 and continuing after the
///   last explicit `bind_index`.
/// * `bind_index` sets the parameter at `index` (from 1).
/// * `clear_bindings` unsets every parameter and rewinds `bind`.
///
/// Methods return `&mut Self` for fluent chaining:
/// ```rust
/// use squill_core::{Prepared, PreparedStatement};
/// let mut statement = PreparedStatement::parse("SELECT ? + ?");
/// statement.bind(1)?.bind(2)?;
/// assert_eq!(statement.sql()?, "SELECT 1 + 2");
/// # Ok::<(), squill_core::Error>(())
/// ```
pub trait Prepared: Display {
    /// Unset all the parameters.
    fn clear_bindings(&mut self) -> Result<&mut Self>;
    /// Bind the next parameter.
    fn bind(&mut self, value: impl AsValue) -> Result<&mut Self>;
    /// Bind the parameter at `index`.
    fn bind_index(&mut self, value: impl AsValue, index: u64) -> Result<&mut Self>;
}

/// Template plus the bindings of one execution.
///
/// The template is shared, the bindings are owned: re-executing the same
/// statement means clearing or overwriting the parameters and assembling again.
#[derive(Debug, Clone)]
pub struct PreparedStatement<W: SqlWriter = ClickHouseSqlWriter> {
    template: Template,
    parameters: ParameterStore,
    assembler: Assembler<W>,
    index: u64,
}

impl PreparedStatement {
    pub fn new(template: Template) -> Self {
        Self::with_assembler(template, Assembler::new())
    }

    pub fn parse(sql: &str) -> Self {
        Self::new(Template::parse(sql))
    }
}

impl<W: SqlWriter> PreparedStatement<W> {
    pub fn with_assembler(template: Template, assembler: Assembler<W>) -> Self {
        let parameters = ParameterStore::new(template.placeholders());
        Self {
            template,
            parameters,
            assembler,
            index: 1,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    pub fn set_null(&mut self, index: u64) -> Result<()> {
        self.set_object(index, Value::Null)
    }

    pub fn set_i8(&mut self, index: u64, value: i8) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_i16(&mut self, index: u64, value: i16) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_i32(&mut self, index: u64, value: i32) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_i64(&mut self, index: u64, value: i64) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_f32(&mut self, index: u64, value: f32) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_f64(&mut self, index: u64, value: f64) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_decimal(&mut self, index: u64, value: Decimal) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_string(&mut self, index: u64, value: impl Into<String>) -> Result<()> {
        self.set_object(index, value.into())
    }

    pub fn set_date(&mut self, index: u64, value: Date) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_timestamp(&mut self, index: u64, value: PrimitiveDateTime) -> Result<()> {
        self.set_object(index, value)
    }

    pub fn set_array<T: AsValue>(&mut self, index: u64, values: Vec<T>) -> Result<()> {
        self.set_object(index, values)
    }

    pub fn set_struct<T: AsValue>(
        &mut self,
        index: u64,
        attributes: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let attributes = attributes.into_iter().map(AsValue::as_value).collect();
        self.set_object(index, Value::Composite(attributes))
    }

    /// Every typed setter ends up here.
    pub fn set_object(&mut self, index: u64, value: impl AsValue) -> Result<()> {
        self.parameters.set(index, value)
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear_all();
        self.index = 1;
    }

    /// Statement text with the current bindings.
    pub fn sql(&self) -> Result<String> {
        self.assembler.assemble(&self.template, &self.parameters)
    }
}

impl<W: SqlWriter> Prepared for PreparedStatement<W> {
    fn clear_bindings(&mut self) -> Result<&mut Self> {
        self.clear_parameters();
        Ok(self)
    }

    fn bind(&mut self, value: impl AsValue) -> Result<&mut Self> {
        self.bind_index(value, self.index)
    }

    fn bind_index(&mut self, value: impl AsValue, index: u64) -> Result<&mut Self> {
        self.set_object(index, value)?;
        self.index = index + 1;
        Ok(self)
    }
}

impl<W: SqlWriter> Display for PreparedStatement<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.template, f)
    }
}
