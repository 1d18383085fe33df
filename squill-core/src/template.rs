use crate::{BindError, Error, Result};
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// SQL text split around its positional placeholders.
///
/// Fragment `i` precedes parameter `i + 1`, the last fragment follows the last
/// parameter, hence `fragments().len() == placeholders() + 1`. Fragments are
/// immutable and shared, cloning a template does not copy the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fragments: Arc<[String]>,
}

impl Template {
    /// Build a template from fragments already split by an external parser.
    pub fn new<I, S>(fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Arc<[String]> = fragments.into_iter().map(Into::into).collect();
        if fragments.is_empty() {
            return Err(Error::new(BindError::EmptyTemplate));
        }
        Ok(Self { fragments })
    }

    /// Split `sql` at each `?` that appears in code position.
    ///
    /// Question marks inside string literals, quoted identifiers and comments
    /// are kept verbatim.
    pub fn parse(sql: &str) -> Self {
        let mut fragments = Vec::new();
        let mut start = 0;
        let mut chars = sql.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '?' => {
                    fragments.push(sql[start..i].to_string());
                    start = i + 1;
                }
                '\'' | '"' | '`' => {
                    // Backslash escapes the next char, a doubled delimiter is literal
                    while let Some((_, v)) = chars.next() {
                        if v == '\\' {
                            chars.next();
                        } else if v == c && chars.next_if(|&(_, n)| n == c).is_none() {
                            break;
                        }
                    }
                }
                '-' if chars.next_if(|&(_, n)| n == '-').is_some() => {
                    while chars.next_if(|&(_, n)| n != '\n').is_some() {}
                }
                '#' => {
                    while chars.next_if(|&(_, n)| n != '\n').is_some() {}
                }
                '/' if chars.next_if(|&(_, n)| n == '*').is_some() => {
                    while let Some((_, v)) = chars.next() {
                        if v == '*' && chars.next_if(|&(_, n)| n == '/').is_some() {
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
        fragments.push(sql[start..].to_string());
        Self {
            fragments: fragments.into(),
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn placeholders(&self) -> usize {
        self.fragments.len() - 1
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str("?")?;
            }
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
