use std::hash::{Hash, Hasher};

/// A single song in the catalog.
///
/// Identity is the whole triple: two songs are the same song only if name,
/// album reference and duration all match. The album field is a reference
/// by name, the song does not own the album entry.
#[derive(Debug, Clone)]
pub struct Song {
    pub name: String,
    pub album: Option<String>,
    pub duration: f64,
}

impl Song {
    pub fn new(name: impl Into<String>, album: Option<String>, duration: f64) -> Self {
        Song {
            name: name.into(),
            album,
            duration,
        }
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        // Durations compare bit-for-bit, no epsilon. Keeps Eq coherent with
        // Hash so the song set dedups exactly.
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equal_when_all_three_fields_match() {
        let a = Song::new("Intro", Some("First".to_string()), 12.5);
        let b = Song::new("Intro", Some("First".to_string()), 12.5);
        assert_eq!(a, b);
    }

    #[test]
    fn name_alone_is_not_identity() {
        let a = Song::new("Intro", Some("First".to_string()), 12.5);
        let b = Song::new("Intro", None, 12.5);
        let c = Song::new("Intro", Some("First".to_string()), 12.6);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn duration_comparison_is_exact() {
        let a = Song::new("Intro", None, 0.1 + 0.2);
        let b = Song::new("Intro", None, 0.3);
        // 0.1 + 0.2 != 0.3 in f64, so these are distinct songs
        assert_ne!(a, b);
    }

    #[test]
    fn set_dedups_exact_duplicates() {
        let mut set = HashSet::new();
        set.insert(Song::new("Intro", None, 90.0));
        set.insert(Song::new("Intro", None, 90.0));
        assert_eq!(set.len(), 1);

        set.insert(Song::new("Intro", None, 90.5));
        assert_eq!(set.len(), 2);
    }
}
