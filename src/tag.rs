use std::collections::hash_map;
use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::{Error, ErrorKind, WriteFlag};

/// An unordered set of tags, mapping tag names to string values.
///
/// A `TagSet` is used both as the write request handed to [`write_tags`] and as the read
/// result returned by [`read_tags`]. Keys are unique; on the write side they are flag names
/// from the [`WriteFlag`] vocabulary, on the read side canonical tag names and custom atom
/// identifiers.
///
/// [`write_tags`]: crate::AtomicParsley::write_tags
/// [`read_tags`]: crate::AtomicParsley::read_tags
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagSet {
    tags: HashMap<String, String>,
}

impl TagSet {
    /// Creates a new empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the set contains no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the value of the tag with the name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(|v| v.as_str())
    }

    /// Returns true if the set contains a tag with the name.
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Sets the value of a writable field, replacing any previous value.
    pub fn set(&mut self, flag: WriteFlag, value: impl Into<String>) {
        self.tags.insert(flag.as_str().to_owned(), value.into());
    }

    /// Inserts a tag under a raw name, replacing and returning any previous value.
    ///
    /// Names outside the [`WriteFlag`] vocabulary survive in the set but are dropped by
    /// filtering before a write request reaches the tool.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.tags.insert(name.into(), value.into())
    }

    /// Removes and returns the tag with the name.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.tags.remove(name)
    }

    /// Returns an iterator over all name and value pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for TagSet {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl std::iter::FromIterator<(String, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { tags: iter.into_iter().collect() }
    }
}

/// Filters the tags down to the writable vocabulary, silently dropping the rest.
pub(crate) fn filter(tags: TagSet) -> TagSet {
    tags.into_iter()
        .filter(|(name, _)| {
            let known = WriteFlag::from_name(name).is_some();
            if !known {
                debug!("dropping unrecognized tag {:?}", name);
            }
            known
        })
        .collect()
}

/// Validates a write request and returns the filtered tag set that may reach the tool.
///
/// Filtering unrecognized keys is not an error by itself; only a request that ends up with
/// nothing usable is rejected. The artwork file is checked only if an `artwork` entry
/// survives filtering.
pub(crate) fn prepare(path: &Path, tags: TagSet) -> crate::Result<TagSet> {
    if tags.is_empty() {
        return Err(Error::new(ErrorKind::EmptyRequest, "Tag map is empty.".to_owned()));
    }
    if !path.is_file() {
        return Err(Error::new(
            ErrorKind::FileNotFound(path.to_owned()),
            format!("No file at {}.", path.display()),
        ));
    }
    let tags = filter(tags);
    if tags.is_empty() {
        return Err(Error::new(ErrorKind::AllTagsFiltered, "All tags were filtered.".to_owned()));
    }
    if let Some(artwork) = tags.get(WriteFlag::Artwork.as_str()) {
        let artwork = Path::new(artwork);
        if !artwork.is_file() {
            return Err(Error::new(
                ErrorKind::ArtworkNotFound(artwork.to_owned()),
                format!("No artwork file at {}.", artwork.display()),
            ));
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really an mp4").unwrap();
        file
    }

    #[test]
    fn empty_request_fails_independent_of_path() {
        let err = prepare(Path::new("/no/such/file.m4a"), TagSet::new()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EmptyRequest));

        let file = sample_file();
        let err = prepare(file.path(), TagSet::new()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EmptyRequest));
    }

    #[test]
    fn missing_target_file_fails() {
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        let err = prepare(Path::new("/no/such/file.m4a"), tags).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::FileNotFound(_)));
    }

    #[test]
    fn all_unknown_keys_fail_as_filtered() {
        let file = sample_file();
        let mut tags = TagSet::new();
        tags.insert("Album", "wrong case");
        tags.insert("rating", "explicit");
        let err = prepare(file.path(), tags).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::AllTagsFiltered));
    }

    #[test]
    fn unknown_keys_are_dropped_silently() {
        let file = sample_file();
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        tags.insert("notAField", "x");
        let prepared = prepare(file.path(), tags).unwrap();
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared.get("title"), Some("Foo"));
    }

    #[test]
    fn missing_artwork_file_fails() {
        let file = sample_file();
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        tags.set(WriteFlag::Artwork, "/no/such/cover.png");
        let err = prepare(file.path(), tags).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ArtworkNotFound(_)));
    }

    #[test]
    fn artwork_is_checked_only_if_it_survives_filtering() {
        // A near-miss key referencing a missing file is dropped, not validated.
        let file = sample_file();
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        tags.insert("artworkFile", "/no/such/cover.png");
        let prepared = prepare(file.path(), tags).unwrap();
        assert_eq!(prepared.len(), 1);
    }

    #[test]
    fn existing_artwork_file_passes() {
        let file = sample_file();
        let artwork = sample_file();
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Artwork, artwork.path().to_str().unwrap());
        let prepared = prepare(file.path(), tags).unwrap();
        assert_eq!(prepared.get("artwork"), Some(artwork.path().to_str().unwrap()));
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Album, "Album");
        tags.set(WriteFlag::TvShowName, "Show");
        tags.insert("bogus", "value");
        tags.insert("another", "value");

        let once = filter(tags);
        let twice = filter(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }
}
