use crate::{
    BindError, ClickHouseSqlWriter, Context, Error, ParameterStore, Result, SqlWriter, Template,
    Value, truncate_long,
};

static NULL: Value = Value::Null;

/// What to do with a placeholder that was never bound.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbound {
    /// Fail with [`BindError::MissingBinding`].
    #[default]
    Reject,
    /// Render it like an explicit null binding.
    Null,
}

/// Interleaves template fragments with the literals of the bound values.
///
/// Stateless apart from its configuration, the same assembler can serve any
/// number of statements, from any thread.
#[derive(Default, Debug, Clone, Copy)]
pub struct Assembler<W: SqlWriter = ClickHouseSqlWriter> {
    writer: W,
    unbound: Unbound,
}

impl Assembler {
    pub const fn new() -> Self {
        Self {
            writer: ClickHouseSqlWriter::new(),
            unbound: Unbound::Reject,
        }
    }
}

impl<W: SqlWriter> Assembler<W> {
    pub const fn with_writer(writer: W) -> Self {
        Self {
            writer,
            unbound: Unbound::Reject,
        }
    }

    pub fn with_unbound(mut self, unbound: Unbound) -> Self {
        self.unbound = unbound;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn unbound(&self) -> Unbound {
        self.unbound
    }

    /// Produce the statement text, or nothing at all if any parameter fails.
    pub fn assemble(&self, template: &Template, parameters: &ParameterStore) -> Result<String> {
        let mut out = String::with_capacity(
            template.fragments().iter().map(String::len).sum::<usize>()
                + parameters.slot_count() * 8,
        );
        self.assemble_into(&mut out, template, parameters)?;
        Ok(out)
    }

    /// Append the statement to `out`.
    ///
    /// On failure `out` is truncated back to the length it had on entry.
    pub fn assemble_into(
        &self,
        out: &mut String,
        template: &Template,
        parameters: &ParameterStore,
    ) -> Result<()> {
        let len = out.len();
        let result = self.write_statement(out, template, parameters);
        match &result {
            Ok(()) => {
                let query = &out[len..];
                log::debug!("Assembled query: {}", truncate_long!(query));
            }
            Err(error) => {
                out.truncate(len);
                log::error!("{:#}", error);
            }
        }
        result
    }

    fn write_statement(
        &self,
        out: &mut String,
        template: &Template,
        parameters: &ParameterStore,
    ) -> Result<()> {
        if template.placeholders() != parameters.slot_count() {
            return Err(Error::new(BindError::SlotCountMismatch {
                placeholders: template.placeholders(),
                slots: parameters.slot_count(),
            }));
        }
        let mut slots = parameters.iter().enumerate();
        for fragment in template.fragments() {
            out.push_str(fragment);
            let Some((i, slot)) = slots.next() else {
                break;
            };
            let index = i + 1;
            let value = match (slot, self.unbound) {
                (Some(v), _) => v,
                (None, Unbound::Null) => &NULL,
                (None, Unbound::Reject) => {
                    return Err(Error::new(BindError::MissingBinding { index }));
                }
            };
            let start = out.len();
            self.writer
                .write_value(out, value)
                .with_context(|| format!("Cannot write parameter {}", index))?;
            // A leading minus right after a fragment ending in `-` would open a line comment
            if out[..start].ends_with('-') && out[start..].starts_with('-') {
                out.insert(start, ' ');
            }
        }
        Ok(())
    }
}

/// Assemble with the default dialect, rejecting unbound placeholders.
pub fn assemble(template: &Template, parameters: &ParameterStore) -> Result<String> {
    Assembler::new().assemble(template, parameters)
}
