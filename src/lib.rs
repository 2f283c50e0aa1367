mod catalog;
mod error;
mod import;
mod song;

pub use catalog::Catalog;
pub use error::{CatalogError, ImportError};
pub use import::{load_catalog, read_albums, read_songs};
pub use song::Song;
