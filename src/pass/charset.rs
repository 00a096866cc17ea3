//! Character classes and union alphabet construction.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+[]{}|;:,.<>?";

/// A named category of characters with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    /// Canonical order. The union alphabet concatenates in this order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase Letters",
            CharClass::Lowercase => "Lowercase Letters",
            CharClass::Digit => "Numbers",
            CharClass::Special => "Special Characters",
        }
    }
}

/// Which character classes feed the union alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl ClassSet {
    #[cfg(test)]
    pub const fn all() -> Self {
        ClassSet {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
        }
    }

    #[cfg(test)]
    pub const fn none() -> Self {
        ClassSet {
            uppercase: false,
            lowercase: false,
            digits: false,
            special: false,
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Special => self.special,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        match class {
            CharClass::Uppercase => self.uppercase = !self.uppercase,
            CharClass::Lowercase => self.lowercase = !self.lowercase,
            CharClass::Digit => self.digits = !self.digits,
            CharClass::Special => self.special = !self.special,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.special)
    }

    /// Build the union alphabet in canonical class order.
    pub fn union_alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.size());
        for class in CharClass::ALL {
            if self.contains(class) {
                chars.extend_from_slice(class.alphabet());
            }
        }
        chars
    }

    /// Effective charset size (for entropy calculation).
    pub fn size(&self) -> usize {
        CharClass::ALL
            .iter()
            .filter(|&&c| self.contains(c))
            .map(|c| c.alphabet().len())
            .sum()
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        ClassSet {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_follows_canonical_order() {
        let union = ClassSet::all().union_alphabet();
        let expected: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();
        assert_eq!(union, expected);
        assert_eq!(union.len(), 86);
    }

    #[test]
    fn size_matches_union_length() {
        let sets = [
            ClassSet::all(),
            ClassSet::none(),
            ClassSet::default(),
            ClassSet {
                uppercase: false,
                lowercase: true,
                digits: false,
                special: true,
            },
        ];
        for set in sets {
            assert_eq!(set.size(), set.union_alphabet().len());
        }
    }

    #[test]
    fn default_excludes_special() {
        let set = ClassSet::default();
        assert!(set.uppercase && set.lowercase && set.digits);
        assert!(!set.special);
        assert_eq!(set.size(), 62);
    }

    #[test]
    fn toggle_flips_one_class() {
        let mut set = ClassSet::none();
        set.toggle(CharClass::Digit);
        assert!(set.digits);
        assert_eq!(set.union_alphabet(), DIGITS);
        set.toggle(CharClass::Digit);
        assert!(set.is_empty());
    }
}
