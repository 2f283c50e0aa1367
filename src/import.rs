use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::ImportError;

// Mapped to the CSV headers of the catalog exports
#[derive(Debug, Deserialize)]
struct AlbumRow {
    #[serde(rename = "Album Name")]
    album_name: String,

    #[serde(rename = "Year")]
    year: i32,
}

#[derive(Debug, Deserialize)]
struct SongRow {
    #[serde(rename = "Track Name")]
    track_name: String,

    /// Empty field means the song is on no album.
    #[serde(rename = "Album Name", default)]
    album_name: String,

    #[serde(rename = "Duration")]
    duration: f64,
}

/// Builds a catalog from an albums CSV and a songs CSV. Albums go in
/// first so the song rows can reference them.
pub fn load_catalog(albums_csv: &Path, songs_csv: &Path) -> Result<Catalog, ImportError> {
    let mut catalog = Catalog::new();

    let albums = read_albums(&mut catalog, File::open(albums_csv)?)?;
    let songs = read_songs(&mut catalog, File::open(songs_csv)?)?;
    info!("catalog loaded: {} albums, {} songs", albums, songs);

    Ok(catalog)
}

/// Feeds album rows from `reader` into the catalog. Malformed rows are
/// skipped with a warning. Returns how many rows went in.
pub fn read_albums(catalog: &mut Catalog, reader: impl Read) -> Result<usize, ImportError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = 0;
    for result in csv_reader.deserialize::<AlbumRow>() {
        match result {
            Ok(row) => {
                catalog.add_album(row.album_name, row.year);
                loaded += 1;
            }
            Err(e) => {
                warn!("skipping invalid album row: {}", e);
            }
        }
    }
    Ok(loaded)
}

/// Feeds song rows from `reader` into the catalog. Malformed rows are
/// skipped with a warning; a row referencing an album the catalog does
/// not know fails the whole import.
pub fn read_songs(catalog: &mut Catalog, reader: impl Read) -> Result<usize, ImportError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = 0;
    for result in csv_reader.deserialize::<SongRow>() {
        match result {
            Ok(row) => {
                let album = match row.album_name.trim() {
                    "" => None,
                    name => Some(name.to_string()),
                };
                catalog.add_song(row.track_name, album, row.duration)?;
                loaded += 1;
            }
            Err(e) => {
                warn!("skipping invalid song row: {}", e);
            }
        }
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const ALBUMS: &str = "\
Album Name,Year
First,1999
Second,2004
";

    const SONGS: &str = "\
Track Name,Album Name,Duration
Opener,First,210.0
Deep Cut,Second,185.5
Hidden,,92.0
";

    #[test]
    fn loads_albums_and_songs() {
        let mut catalog = Catalog::new();
        assert_eq!(read_albums(&mut catalog, ALBUMS.as_bytes()).unwrap(), 2);
        assert_eq!(read_songs(&mut catalog, SONGS.as_bytes()).unwrap(), 3);

        assert_eq!(catalog.album_count(), 2);
        assert_eq!(catalog.song_count(), 3);
        assert_eq!(catalog.count_songs(Some("First")), Ok(1));
        assert_eq!(catalog.count_songs_in_no_album(), 1);
    }

    #[test]
    fn empty_album_field_means_no_album() {
        let mut catalog = Catalog::new();
        read_songs(&mut catalog, "Track Name,Album Name,Duration\nLoose, ,60.0\n".as_bytes())
            .unwrap();
        assert_eq!(catalog.count_songs_in_no_album(), 1);
    }

    #[test]
    fn unknown_album_reference_fails_the_import() {
        let mut catalog = Catalog::new();
        let result = read_songs(&mut catalog, SONGS.as_bytes());
        match result {
            Err(ImportError::Catalog(CatalogError::InvalidReference { album })) => {
                assert_eq!(album, "First");
            }
            other => panic!("expected an invalid reference, got {:?}", other),
        }
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let mut catalog = Catalog::new();
        let csv = "Album Name,Year\nGood,2001\nBad,not-a-year\n";
        assert_eq!(read_albums(&mut catalog, csv.as_bytes()).unwrap(), 1);
        assert_eq!(catalog.album_count(), 1);
    }
}
