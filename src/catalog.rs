use log::debug;
use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;
use crate::song::Song;

/// The in-memory catalog of a music group: an album directory plus a song
/// set, with query operations over both.
///
/// Albums and songs only ever get added, there is no removal. The album
/// reference on a song is checked once, when the song goes in.
#[derive(Debug, Default)]
pub struct Catalog {
    albums: HashMap<String, i32>,
    songs: HashSet<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Registers an album under `name`. Adding a name that is already in
    /// the directory overwrites its year.
    pub fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();
        debug!("album '{}' registered with year {}", name, year);
        self.albums.insert(name, year);
    }

    /// Adds a song to the set. A present `album` must already be in the
    /// directory, otherwise the catalog is left untouched and the song is
    /// rejected. Re-adding an identical song is a no-op.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<String>,
        duration: f64,
    ) -> Result<(), CatalogError> {
        if let Some(ref album_name) = album
            && !self.albums.contains_key(album_name)
        {
            return Err(CatalogError::InvalidReference {
                album: album_name.clone(),
            });
        }

        let song = Song::new(name, album, duration);
        debug!("song added: {:?}", song);
        self.songs.insert(song);
        Ok(())
    }

    /// All song names in ascending lexicographic order. Distinct songs
    /// sharing a name each contribute an entry; exact duplicates were
    /// already collapsed by the set.
    ///
    /// The returned iterator is a snapshot taken now, later mutations of
    /// the catalog do not show through it.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = String> + use<> {
        let mut names: Vec<String> = self.songs.iter().map(|song| song.name.clone()).collect();
        names.sort();
        names.into_iter()
    }

    /// All album names, in no particular order.
    pub fn album_names(&self) -> impl Iterator<Item = String> + use<> {
        self.albums
            .keys()
            .cloned()
            .collect::<Vec<String>>()
            .into_iter()
    }

    /// Names of the albums released in `year`, in no particular order.
    pub fn album_in_year(&self, year: i32) -> impl Iterator<Item = String> + use<> {
        self.albums
            .iter()
            .filter(|&(_, &album_year)| album_year == year)
            .map(|(name, _)| name.clone())
            .collect::<Vec<String>>()
            .into_iter()
    }

    /// Counts the songs filed under `album_name`. The argument itself is
    /// required; whether the album exists in the directory is not checked,
    /// an unknown name just counts zero.
    pub fn count_songs(&self, album_name: Option<&str>) -> Result<usize, CatalogError> {
        let album_name =
            album_name.ok_or(CatalogError::InvalidArgument("album name is required"))?;
        Ok(self
            .songs_with_album()
            .filter(|album| *album == album_name)
            .count())
    }

    /// Counts the songs that are not on any album.
    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|song| song.album.is_none()).count()
    }

    /// Mean duration of the songs filed under `album_name`, or `None` when
    /// no song matches.
    pub fn average_duration_of_songs(&self, album_name: &str) -> Option<f64> {
        let durations: Vec<f64> = self
            .songs
            .iter()
            .filter(|song| song.album.as_deref() == Some(album_name))
            .map(|song| song.duration)
            .collect();

        if durations.is_empty() {
            return None;
        }
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    }

    /// Name of the song with the greatest duration, `None` when the
    /// catalog has no songs. Ties go to whichever song the set yields
    /// first.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .max_by(|a, b| a.duration.total_cmp(&b.duration))
            .map(|song| song.name.as_str())
    }

    /// Name of the album with the greatest *year*, `None` when the
    /// directory is empty. Albums carry no duration, so "longest" here has
    /// always meant most recent.
    pub fn longest_album(&self) -> Option<&str> {
        self.albums
            .iter()
            .max_by_key(|&(_, &year)| year)
            .map(|(name, _)| name.as_str())
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Album names of the songs that have one.
    fn songs_with_album(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().filter_map(|song| song.album.as_deref())
    }
}
