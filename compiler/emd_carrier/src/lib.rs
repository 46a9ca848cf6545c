//! Program carrier for GP tree evaluation.
//!
//! A [`ProgramText`] accumulates the NetLogo fragment generated while a tree
//! is evaluated. Every node receives one by `&mut` and edits it in place.
//!
//! # Aliasing
//!
//! Sibling subtrees that must not see each other's output each get their own
//! carrier via [`ProgramText::duplicate`]. A duplicate owns its buffer; there
//! is no shared storage, no `Rc`, and no copy-on-write. The parent merges the
//! fragments afterwards with plain [`ProgramText::append`] calls.
//!
//! The carrier enforces no syntax. Keeping brackets balanced is the job of
//! the nodes that emit them.

use std::fmt;

/// Growable text buffer holding the program generated so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProgramText {
    text: String,
}

impl ProgramText {
    /// Create an empty carrier.
    pub fn new() -> Self {
        ProgramText {
            text: String::new(),
        }
    }

    /// Deep-copy this carrier.
    ///
    /// The returned value shares no storage with `self`; later edits to
    /// either one are invisible to the other.
    #[must_use]
    pub fn duplicate(&self) -> ProgramText {
        ProgramText {
            text: self.text.clone(),
        }
    }

    /// Insert `fragment` before the current contents.
    pub fn prepend(&mut self, fragment: &str) {
        self.text.insert_str(0, fragment);
    }

    /// Insert `fragment` after the current contents.
    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Current contents.
    #[inline]
    pub fn contents(&self) -> &str {
        &self.text
    }

    /// Consume the carrier and return its buffer.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length of the contents in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for ProgramText {
    fn from(text: &str) -> Self {
        ProgramText {
            text: text.to_owned(),
        }
    }
}

impl From<String> for ProgramText {
    fn from(text: String) -> Self {
        ProgramText { text }
    }
}

impl fmt::Display for ProgramText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests;
