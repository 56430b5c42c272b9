use lazy_static::lazy_static;
use regex::Regex;

use crate::ident;
use crate::TagSet;

/// The literal separating an atom descriptor from its value in dump output.
const SEPARATOR: &str = " contains: ";

lazy_static! {
    /// Matches the descriptor of a packed atom line, e.g. `Atom "©alb"`.
    static ref PACKED: Regex = Regex::new(r#"^Atom "([©a-zA-]+)"$"#).unwrap();
    /// Matches the descriptor of a custom atom line, e.g.
    /// `Atom "----" [com.apple.iTunes;PODCASTGUID]`.
    static ref CUSTOM: Regex = Regex::new(r#"^Atom "----" \[com\.apple\.iTunes;([A-Z]+)\]$"#).unwrap();
}

/// Parses the textual atom dump of a file into a tag set.
///
/// Every line whose descriptor matches a recognized atom shape contributes one tag; packed
/// codes are resolved to canonical names, custom (`----`) identifiers are their own name,
/// values are trimmed of surrounding whitespace. All other lines are skipped without error,
/// so parsing an unrecognized or empty dump yields an empty set rather than failing. When a
/// dump contains the same atom twice the last line wins.
pub fn parse_dump(dump: &str) -> TagSet {
    let mut tags = TagSet::new();
    for line in dump.lines() {
        let (descriptor, value) = match line.split_once(SEPARATOR) {
            Some(parts) => parts,
            None => continue,
        };
        let value = value.trim();
        if let Some(caps) = PACKED.captures(descriptor) {
            if let Some(name) = ident::resolve_read_atom(&caps[1]) {
                tags.insert(name, value);
            }
        } else if let Some(caps) = CUSTOM.captures(descriptor) {
            tags.insert(&caps[1], value);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_atom_resolves_and_trims() {
        let tags = parse_dump("Atom \"©alb\" contains:  MyAlbum \n");
        assert_eq!(tags.get("album"), Some("MyAlbum"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn custom_atom_keeps_its_identifier() {
        let tags = parse_dump("Atom \"----\" [com.apple.iTunes;PODCASTGUID] contains: abc-123\n");
        assert_eq!(tags.get("PODCASTGUID"), Some("abc-123"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn unresolved_packed_code_is_skipped() {
        let tags = parse_dump("Atom \"zzzz\" contains: x\n");
        assert!(tags.is_empty());
    }

    #[test]
    fn lines_without_separator_are_skipped() {
        let dump = "AtomicParsley version: 0.9.6 (utf8)\n\
                    Atom \"©nam\"\n\
                    ---------------------------\n";
        assert!(parse_dump(dump).is_empty());
    }

    #[test]
    fn empty_dump_yields_empty_set() {
        assert!(parse_dump("").is_empty());
        assert!(parse_dump("\n").is_empty());
    }

    #[test]
    fn duplicate_atoms_last_line_wins() {
        let dump = "Atom \"©nam\" contains: First\n\
                    Atom \"©nam\" contains: Second\n";
        let tags = parse_dump(dump);
        assert_eq!(tags.get("title"), Some("Second"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn realistic_dump_extracts_recognized_atoms_only() {
        let dump = "Atom \"©nam\" contains: Echoes of Dawn\n\
                    Atom \"©alb\" contains: Night Ferry\n\
                    Atom \"©day\" contains: 2019\n\
                    Atom \"trkn\" contains: 3 of 12\n\
                    Atom \"stik\" contains: Normal\n\
                    Atom \"covr\" contains: 1 piece of artwork\n\
                    Atom \"----\" [com.apple.iTunes;PODCASTGUID] contains: 7fe2a9c1\n\
                    \n";
        let tags = parse_dump(dump);
        assert_eq!(tags.get("title"), Some("Echoes of Dawn"));
        assert_eq!(tags.get("album"), Some("Night Ferry"));
        assert_eq!(tags.get("year"), Some("2019"));
        assert_eq!(tags.get("tracknum"), Some("3 of 12"));
        assert_eq!(tags.get("itunesMediaType"), Some("Normal"));
        assert_eq!(tags.get("PODCASTGUID"), Some("7fe2a9c1"));
        // covr has no read-side resolution and contributes nothing.
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn value_may_contain_the_separator() {
        let tags = parse_dump("Atom \"©cmt\" contains: this contains: that\n");
        assert_eq!(tags.get("comment"), Some("this contains: that"));
    }
}
