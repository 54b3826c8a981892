//! A single named character reference and its well-formedness rules.
//!
//! The checks here are `const fn` so the built-in table can be validated at
//! compile time with exactly the rules applied to tables built at runtime.

use std::cmp::Ordering;

use serde::Serialize;

/// Largest Unicode scalar value.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One `name -> &#N;` mapping.
///
/// `name` carries no `&` or `;` delimiters. `reference` is the canonical
/// decimal numeric character reference, e.g. `"&#160;"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityEntry<'a> {
    pub name: &'a str,
    pub reference: &'a str,
}

/// Reason an entry failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFault {
    /// The name is empty.
    EmptyName,
    /// The name contains something other than ASCII letters and digits.
    NameCharacter,
    /// The reference is not `&#<digits>;` with a non-zero leading digit.
    Reference,
    /// The reference names a surrogate or a value above U+10FFFF.
    CodePoint,
}

impl<'a> EntityEntry<'a> {
    /// Pair a name with its reference. No validation is done here; see
    /// [`EntityEntry::check`].
    pub const fn new(name: &'a str, reference: &'a str) -> Self {
        Self { name, reference }
    }

    /// Validate the name and the reference.
    pub const fn check(&self) -> Result<(), EntryFault> {
        if let Err(fault) = check_name(self.name.as_bytes()) {
            return Err(fault);
        }
        match parse_reference(self.reference.as_bytes()) {
            Ok(_) => Ok(()),
            Err(fault) => Err(fault),
        }
    }

    /// The decimal code point named by `reference`, if it is canonical.
    pub fn code_point(&self) -> Option<u32> {
        parse_reference(self.reference.as_bytes()).ok()
    }

    /// The character named by `reference`, if it is canonical.
    pub fn as_char(&self) -> Option<char> {
        self.code_point().and_then(char::from_u32)
    }
}

/// Entity names are non-empty runs of ASCII alphanumerics.
pub(crate) const fn check_name(name: &[u8]) -> Result<(), EntryFault> {
    if name.is_empty() {
        return Err(EntryFault::EmptyName);
    }
    let mut i = 0;
    while i < name.len() {
        if !name[i].is_ascii_alphanumeric() {
            return Err(EntryFault::NameCharacter);
        }
        i += 1;
    }
    Ok(())
}

/// Parse `&#<decimal>;` into a code point.
pub(crate) const fn parse_reference(reference: &[u8]) -> Result<u32, EntryFault> {
    let len = reference.len();
    if len < 4 || reference[0] != b'&' || reference[1] != b'#' || reference[len - 1] != b';' {
        return Err(EntryFault::Reference);
    }
    // Rules out both `&#0;` and zero-padded forms like `&#0160;`.
    if reference[2] == b'0' {
        return Err(EntryFault::Reference);
    }

    let mut value: u32 = 0;
    let mut i = 2;
    while i < len - 1 {
        let b = reference[i];
        if !b.is_ascii_digit() {
            return Err(EntryFault::Reference);
        }
        value = value * 10 + (b - b'0') as u32;
        if value > MAX_CODE_POINT {
            return Err(EntryFault::CodePoint);
        }
        i += 1;
    }

    if matches!(value, 0xD800..=0xDFFF) {
        return Err(EntryFault::CodePoint);
    }
    Ok(value)
}

/// Byte-wise name ordering, usable in `const` context.
pub(crate) const fn compare_names(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
