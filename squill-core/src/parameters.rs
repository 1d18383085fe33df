use crate::{AsValue, BindError, Error, Result, Value};

/// Positional values bound to one statement, addressed from 1.
///
/// The number of slots is fixed at construction. A slot is either unset
/// (`None`) or holds a [`Value`], an explicit null binding is `Some(Value::Null)`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ParameterStore {
    slots: Box<[Option<Value>]>,
}

impl ParameterStore {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count].into(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` at `index`, replacing any previous binding.
    pub fn set(&mut self, index: u64, value: impl AsValue) -> Result<()> {
        let position = self.position(index)?;
        let value = value.as_value();
        if let Some(type_name) = value.find_unsupported() {
            log::warn!(
                "Parameter {} ({}) holds the unsupported type `{}`, the statement cannot be assembled",
                index,
                value.kind(),
                type_name
            );
        }
        self.slots[position] = Some(value);
        Ok(())
    }

    /// Value at `index`, `None` when it was never bound since the last clear.
    pub fn get(&self, index: u64) -> Result<Option<&Value>> {
        let position = self.position(index)?;
        Ok(self.slots[position].as_ref())
    }

    pub fn is_bound(&self, index: u64) -> Result<bool> {
        Ok(self.get(index)?.is_some())
    }

    /// Reset every slot to unset.
    pub fn clear_all(&mut self) {
        self.slots.iter_mut().for_each(|v| *v = None);
    }

    /// Slots in positional order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Value>> {
        self.slots.iter().map(Option::as_ref)
    }

    fn position(&self, index: u64) -> Result<usize> {
        match usize::try_from(index) {
            Ok(i) if i >= 1 && i <= self.slots.len() => Ok(i - 1),
            _ => {
                let error = Error::new(BindError::IndexOutOfRange {
                    index,
                    slots: self.slots.len(),
                });
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }
}
