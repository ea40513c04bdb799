//! Utilities for generating passwords.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{ClassSelection, GenerationError, Password};

/// Generate a password of `length` characters, drawn from the OS's secure random number
/// generator.
///
/// See [`generate_password`] for how the password is built.
pub fn generate(length: i64, selection: &ClassSelection) -> Result<Password, GenerationError> {
    generate_password(&mut OsRng, length, selection)
}

/// Check that a password of `length` characters can be built from `selection`, returning the
/// length as a `usize` if so.
///
/// An empty selection is reported ahead of any problem with the length.
pub fn validate(length: i64, selection: &ClassSelection) -> Result<usize, GenerationError> {
    let minimum = selection.len();
    if minimum == 0 {
        return Err(GenerationError::NoCharacterClassSelected);
    }
    match usize::try_from(length) {
        Ok(length) if length >= minimum => Ok(length),
        _ => Err(GenerationError::LengthTooShort { minimum }),
    }
}

/// Generate a password containing at least one character from every selected class.
///
/// One character is first picked from each selected class, so every class is represented no
/// matter how short the password is. The rest is filled from the combined alphabet of the
/// selected classes, so larger classes show up proportionally more often. Finally the whole
/// thing is shuffled; otherwise the first few characters would always be, say, an uppercase
/// letter followed by a lowercase letter.
///
/// `rand`'s uniform sampler re-samples rather than reducing modulo the range, so neither the
/// picks nor the shuffle are biased.
pub fn generate_password<R>(
    rng: &mut R,
    length: i64,
    selection: &ClassSelection,
) -> Result<Password, GenerationError>
where
    R: Rng + CryptoRng,
{
    let length = validate(length, selection)?;
    tracing::debug!(length, classes = %selection, "generating password");

    let alphabet = selection.alphabet();
    let mut chars = Vec::with_capacity(length);
    for class in selection.classes() {
        chars.push(pick(rng, class.characters()));
    }
    let filler = length - chars.len();
    tracing::trace!(
        mandatory = chars.len(),
        filler,
        alphabet_len = alphabet.len(),
        "picked one character per class"
    );
    for _ in 0..filler {
        chars.push(pick(rng, &alphabet));
    }
    chars.shuffle(rng);

    Ok(Password::from(
        chars.into_iter().map(char::from).collect::<String>(),
    ))
}

fn pick<R>(rng: &mut R, from: &[u8]) -> u8
where
    R: Rng + CryptoRng,
{
    // Every class is non-empty, and so is any alphabet built from at least one of them.
    *from
        .choose(rng)
        .expect("character classes are never empty")
}
