use std::fmt;

static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
static DIGITS: &[u8] = b"0123456789";
static PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the categories of characters a password can be built from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharacterClass {
    /// Every class, in the order that alphabets and mandatory characters are built in.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The characters in this class. All of them are ASCII.
    pub fn characters(self) -> &'static [u8] {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => PUNCTUATION,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        u8::try_from(ch)
            .map(|b| self.characters().contains(&b))
            .unwrap_or(false)
    }

    /// The class a character belongs to, if any. The classes don't overlap.
    pub fn of(ch: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(ch))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "uppercase",
            CharacterClass::Lower => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which character classes a password should be drawn from.
///
/// Defaults to every class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClassSelection {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
}

impl ClassSelection {
    pub fn all() -> ClassSelection {
        ClassSelection {
            upper: true,
            lower: true,
            digits: true,
            special: true,
        }
    }

    pub fn none() -> ClassSelection {
        ClassSelection {
            upper: false,
            lower: false,
            digits: false,
            special: false,
        }
    }

    /// Include or exclude a single class.
    pub fn with(mut self, class: CharacterClass, enabled: bool) -> ClassSelection {
        *self.flag_mut(class) = enabled;
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.upper,
            CharacterClass::Lower => self.lower,
            CharacterClass::Digit => self.digits,
            CharacterClass::Special => self.special,
        }
    }

    /// The selected classes, in [`CharacterClass::ALL`] order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    pub fn len(&self) -> usize {
        self.classes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every character of every selected class, concatenated.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut abc = Vec::new();
        for class in self.classes() {
            abc.extend_from_slice(class.characters());
        }
        abc
    }

    fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Upper => &mut self.upper,
            CharacterClass::Lower => &mut self.lower,
            CharacterClass::Digit => &mut self.digits,
            CharacterClass::Special => &mut self.special,
        }
    }
}

impl Default for ClassSelection {
    fn default() -> ClassSelection {
        ClassSelection::all()
    }
}

impl fmt::Display for ClassSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for class in self.classes() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{class}")?;
        }
        if first {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}
