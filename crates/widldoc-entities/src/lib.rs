//! Named character references for widldoc documentation comments.
//!
//! Maps HTML entity names to numeric character references so the comment
//! scanner can emit `&#233;` wherever an author wrote `&eacute;`. The
//! built-in table is a `static`, sorted and checked at compile time, and is
//! searched by binary search without allocating.
//!
//! ```
//! use widldoc_entities::{lookup_entity, substitute_entities, BUILTIN};
//! use widldoc_types::config::UnresolvedPolicy;
//!
//! assert_eq!(lookup_entity("nbsp"), Some("&#160;"));
//! assert_eq!(lookup_entity("NBSP"), None);
//!
//! let out = substitute_entities("Caf&eacute; &amp; Cr&egrave;me", &BUILTIN, UnresolvedPolicy::PassThrough)?;
//! assert_eq!(out.text, "Caf&#233; &#38; Cr&#232;me");
//! # Ok::<(), widldoc_types::error::WidlError>(())
//! ```

mod data;
pub mod entry;
pub mod file;
pub mod source;
pub mod substitute;
pub mod table;

pub use entry::{EntityEntry, EntryFault};
pub use file::{EntityFile, EntityRecord};
pub use source::EntitySource;
pub use substitute::{Substituted, Unresolved, substitute_entities};
pub use table::{BUILTIN, BUILTIN_LEN, EntityTable, lookup_entity};
