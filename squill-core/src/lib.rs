mod as_value;
mod assembler;
mod error;
mod parameters;
mod prepared;
mod sql_writer;
mod template;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use assembler::*;
pub use error::*;
pub use parameters::*;
pub use prepared::*;
pub use sql_writer::*;
pub use template::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
