//! Rewrite named entities in comment text to numeric references.
//!
//! Documentation comments may use HTML named entities (`&eacute;`), but the
//! XML emitted for them has no DTD declaring those names. Every `&name;`
//! span found in the table is replaced by its numeric form (`&#233;`);
//! everything else, including numeric references, is copied verbatim.

use std::borrow::Cow;

use widldoc_types::config::UnresolvedPolicy;
use widldoc_types::error::{Result, WidlError};

use crate::table::EntityTable;

/// A `&name;` span whose name the table did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unresolved<'t> {
    /// The name between `&` and `;`.
    pub name: &'t str,
    /// Byte offset of the `&` in the input.
    pub offset: usize,
}

/// Output of [`substitute_entities`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted<'t> {
    /// Rewritten text. Borrowed when nothing was replaced.
    pub text: Cow<'t, str>,
    /// Unresolved spans in input order. Always empty under
    /// [`UnresolvedPolicy::Reject`], which fails instead.
    pub unresolved: Vec<Unresolved<'t>>,
}

/// Replace each resolvable `&name;` in `text` with its numeric reference.
///
/// A reference is `&`, one or more ASCII letters or digits, then `;`. A bare
/// `&`, a name with no closing `;`, and `&#...;` numeric references are not
/// named references and pass through untouched. Names the table does not
/// know are handled according to `policy`.
pub fn substitute_entities<'t>(
    text: &'t str,
    table: &EntityTable<'_>,
    policy: UnresolvedPolicy,
) -> Result<Substituted<'t>> {
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut unresolved = Vec::new();
    let mut pos = 0;

    while let Some(rel) = text[pos..].find('&') {
        let amp = pos + rel;
        let Some(name) = named_reference(&text[amp + 1..]) else {
            pos = amp + 1;
            continue;
        };
        // `&` + name + `;`
        let end = amp + name.len() + 2;

        match table.lookup(name) {
            Some(reference) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[copied..amp]);
                buf.push_str(reference);
                copied = end;
            },
            None => match policy {
                UnresolvedPolicy::PassThrough => unresolved.push(Unresolved { name, offset: amp }),
                UnresolvedPolicy::Warn => {
                    log::warn!("Unresolved entity `&{name};` at byte {amp}");
                    unresolved.push(Unresolved { name, offset: amp });
                },
                UnresolvedPolicy::Reject => {
                    return Err(WidlError::UnresolvedEntity {
                        name: name.to_string(),
                        offset: amp,
                    });
                },
            },
        }
        pos = end;
    }

    let text = match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        },
        None => Cow::Borrowed(text),
    };
    Ok(Substituted { text, unresolved })
}

/// If `rest` (the text after an `&`) starts with `name;`, return `name`.
fn named_reference(rest: &str) -> Option<&str> {
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if len > 0 && rest.as_bytes().get(len) == Some(&b';') {
        Some(&rest[..len])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntityEntry;
    use crate::table::BUILTIN;

    fn rewrite(text: &str) -> Substituted<'_> {
        substitute_entities(text, &BUILTIN, UnresolvedPolicy::PassThrough).unwrap()
    }

    #[test]
    fn cafe_creme_round_trip() {
        let out = rewrite("Caf&eacute; &amp; Cr&egrave;me");
        assert_eq!(out.text, "Caf&#233; &#38; Cr&#232;me");
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn text_without_entities_is_borrowed() {
        let out = rewrite("plain text, no escapes");
        assert!(matches!(out.text, Cow::Borrowed(_)));
        assert_eq!(out.text, "plain text, no escapes");
    }

    #[test]
    fn unresolved_only_text_is_still_borrowed() {
        let out = rewrite("a &bogus; b");
        assert!(matches!(out.text, Cow::Borrowed(_)));
        assert_eq!(out.unresolved, vec![Unresolved { name: "bogus", offset: 2 }]);
    }

    #[test]
    fn numeric_references_pass_through() {
        let out = rewrite("&#233; &#xE9; &#X41;");
        assert_eq!(out.text, "&#233; &#xE9; &#X41;");
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn incomplete_references_pass_through() {
        for text in ["AT&T", "a & b", "&", "&;", "&amp", "&nbsp x;", "trailing &"] {
            let out = rewrite(text);
            assert_eq!(out.text, text);
            assert!(out.unresolved.is_empty(), "{text:?}");
        }
    }

    #[test]
    fn adjacent_references() {
        assert_eq!(rewrite("&lt;&gt;").text, "&#60;&#62;");
        assert_eq!(rewrite("&&amp;;").text, "&&#38;;");
    }

    #[test]
    fn replacement_output_is_not_rescanned() {
        assert_eq!(rewrite("&amp;lt;").text, "&#38;lt;");
    }

    #[test]
    fn case_mismatch_is_unresolved() {
        let out = rewrite("&NBSP; &nbsp;");
        assert_eq!(out.text, "&NBSP; &#160;");
        assert_eq!(out.unresolved, vec![Unresolved { name: "NBSP", offset: 0 }]);
    }

    #[test]
    fn multibyte_text_around_references() {
        let out = rewrite("naïve &mdash; “quoted” &hellip;");
        assert_eq!(out.text, "naïve &#8212; “quoted” &#8230;");
    }

    #[test]
    fn warn_policy_keeps_text_and_records() {
        let out = substitute_entities("x &zz; &copy;", &BUILTIN, UnresolvedPolicy::Warn).unwrap();
        assert_eq!(out.text, "x &zz; &#169;");
        assert_eq!(out.unresolved, vec![Unresolved { name: "zz", offset: 2 }]);
    }

    #[test]
    fn reject_policy_reports_offset() {
        let err = substitute_entities("&amp; &nope;", &BUILTIN, UnresolvedPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            WidlError::UnresolvedEntity { ref name, offset: 6 } if name == "nope"
        ));
    }

    #[test]
    fn reject_policy_accepts_fully_resolved_text() {
        let out = substitute_entities("&copy; 2009", &BUILTIN, UnresolvedPolicy::Reject).unwrap();
        assert_eq!(out.text, "&#169; 2009");
    }

    #[test]
    fn custom_table() {
        let table = EntityTable::build([EntityEntry::new("widl", "&#87;")]).unwrap();
        let out = substitute_entities("&widl; &amp;", &table, UnresolvedPolicy::PassThrough).unwrap();
        assert_eq!(out.text, "&#87; &amp;");
        assert_eq!(out.unresolved, vec![Unresolved { name: "amp", offset: 7 }]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn text_without_ampersand_is_unchanged(text in "[^&]{0,64}") {
                let out = rewrite(&text);
                prop_assert!(matches!(out.text, Cow::Borrowed(_)));
                prop_assert_eq!(&*out.text, text.as_str());
            }

            #[test]
            fn every_builtin_name_is_rewritten(
                idx in 0..BUILTIN.len(),
                before in "[a-z ]{0,8}",
                after in "[a-z ]{0,8}",
            ) {
                let entry = BUILTIN.entries()[idx];
                let text = format!("{before}&{};{after}", entry.name);
                let out = rewrite(&text);
                prop_assert_eq!(&*out.text, format!("{before}{}{after}", entry.reference));
            }

            #[test]
            fn never_panics(text in "\\PC{0,64}") {
                let _ = substitute_entities(&text, &BUILTIN, UnresolvedPolicy::Warn);
            }
        }
    }
}
