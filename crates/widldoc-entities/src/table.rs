//! The entity table and resolver.
//!
//! An [`EntityTable`] is a name-sorted, duplicate-free slice of
//! [`EntityEntry`] values searched by binary search. The built-in table is
//! sorted and validated by `const` evaluation, so a corrupt entry is a
//! compile error and there is no initialization at runtime.

use std::borrow::Cow;

use widldoc_types::error::{Result, WidlError};

use crate::data::SOURCE;
use crate::entry::{EntityEntry, EntryFault, compare_names};

/// Number of entries in [`BUILTIN`].
pub const BUILTIN_LEN: usize = SOURCE.len();

const SORTED: [EntityEntry<'static>; BUILTIN_LEN] = sort_entries(SOURCE);

const _: () = assert_valid(&SORTED);

/// The built-in HTML 4 entity table.
pub static BUILTIN: EntityTable<'static> = EntityTable {
    entries: Cow::Borrowed(&SORTED),
};

/// Resolve `name` against the built-in table.
///
/// `name` excludes the `&` and `;` delimiters: pass `"amp"`, not `"&amp;"`.
/// Matching is exact and case-sensitive.
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    BUILTIN.lookup(name)
}

/// Sorted, validated, immutable entity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTable<'a> {
    entries: Cow<'a, [EntityEntry<'a>]>,
}

impl EntityTable<'static> {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static EntityTable<'static> {
        &BUILTIN
    }
}

impl<'a> EntityTable<'a> {
    /// Build a table from entries in any order.
    ///
    /// Entries are sorted by name, then every entry is validated and
    /// duplicate names are rejected.
    pub fn build<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = EntityEntry<'a>>,
    {
        let mut entries: Vec<EntityEntry<'a>> = entries.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.name.cmp(b.name));

        for entry in &entries {
            entry.check().map_err(|fault| fault_error(entry, fault))?;
        }
        if let Some(pair) = entries.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(WidlError::DuplicateEntity(pair[0].name.to_string()));
        }

        log::debug!("Built entity table with {} entries", entries.len());
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Look up the numeric reference for `name`.
    pub fn lookup(&self, name: &str) -> Option<&'a str> {
        self.get(name).map(|entry| entry.reference)
    }

    /// Look up the full entry for `name`.
    pub fn get(&self, name: &str) -> Option<&EntityEntry<'a>> {
        self.entries
            .binary_search_by(|entry| entry.name.cmp(name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// A borrowed view of this table with a shorter lifetime.
    pub fn view(&self) -> EntityTable<'_> {
        EntityTable {
            entries: Cow::Borrowed(self.entries()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in ascending name order.
    pub fn entries(&self) -> &[EntityEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityEntry<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'t, 'a> IntoIterator for &'t EntityTable<'a> {
    type Item = &'t EntityEntry<'a>;
    type IntoIter = std::slice::Iter<'t, EntityEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn fault_error(entry: &EntityEntry<'_>, fault: EntryFault) -> WidlError {
    match fault {
        EntryFault::EmptyName | EntryFault::NameCharacter => {
            WidlError::InvalidEntityName(entry.name.to_string())
        },
        EntryFault::Reference | EntryFault::CodePoint => WidlError::InvalidReference {
            name: entry.name.to_string(),
            reference: entry.reference.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Compile-time construction
// ---------------------------------------------------------------------------

/// Insertion sort by name.
const fn sort_entries<const N: usize>(
    mut entries: [EntityEntry<'static>; N],
) -> [EntityEntry<'static>; N] {
    let mut i = 1;
    while i < N {
        let mut j = i;
        while j > 0 && compare_names(entries[j].name, entries[j - 1].name).is_lt() {
            let tmp = entries[j];
            entries[j] = entries[j - 1];
            entries[j - 1] = tmp;
            j -= 1;
        }
        i += 1;
    }
    entries
}

/// Panics (failing compilation when used in a `const`) on a malformed
/// entry or a name that is not strictly greater than its predecessor.
const fn assert_valid(entries: &[EntityEntry<'static>]) {
    let mut i = 0;
    while i < entries.len() {
        match entries[i].check() {
            Ok(()) => {},
            Err(EntryFault::EmptyName) => panic!("built-in entity with empty name"),
            Err(EntryFault::NameCharacter) => panic!("built-in entity name is not alphanumeric"),
            Err(EntryFault::Reference) => panic!("built-in entity reference is not `&#<digits>;`"),
            Err(EntryFault::CodePoint) => panic!("built-in entity code point out of range"),
        }
        if i > 0 && !compare_names(entries[i - 1].name, entries[i].name).is_lt() {
            panic!("built-in entity names are not unique");
        }
        i += 1;
    }
}
