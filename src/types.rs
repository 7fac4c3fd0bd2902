//! Common type definitions shared between the shell and its prompts.

use std::fmt::{Display, Formatter, Result};

/// The two directions the pipeline can run in.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// All modes, in menu order.
    pub const ALL: &'static [Self] = &[Self::Encrypt, Self::Decrypt];

    /// Human-readable label for menus and messages.
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }

    /// Past-tense form for success messages.
    #[inline]
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypted",
            Self::Decrypt => "decrypted",
        }
    }
}

impl Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}
