//! Generate random passwords that are guaranteed to contain a character from every requested
//! character class.

mod character_class;
pub mod password_generation;

pub use character_class::{CharacterClass, ClassSelection};
pub use password_generation::{generate, generate_password};

/// A generated password.
///
/// The contents are deliberately left out of the `Debug` output, so a stray `{:?}` in a log line
/// can't leak it.
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The length of the password, in characters.
    ///
    /// Every character we generate is ASCII, so this is also the length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

/// Ways in which a request for a password can be invalid.
///
/// Both are caught before any randomness is consumed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("At least one character type must be selected.")]
    NoCharacterClassSelected,
    /// The password can't fit one character from each selected class. Zero and negative lengths
    /// land here too.
    #[error(
        "Password length must be at least {minimum} characters to include all selected character \
         types."
    )]
    LengthTooShort { minimum: usize },
}
