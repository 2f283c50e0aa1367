#![allow(clippy::uninlined_format_args)]

mod cli;

use clap::Parser;
use log::LevelFilter;
use mucat::{Catalog, load_catalog};
use serde::Serialize;

use crate::cli::{Cli, Commands};

#[derive(Serialize)]
struct StatsReport {
    albums: usize,
    songs: usize,
    songs_in_no_album: usize,
    longest_song: Option<String>,
    latest_album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<AlbumStats>,
}

#[derive(Serialize)]
struct AlbumStats {
    name: String,
    songs: usize,
    average_duration: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let catalog = match load_catalog(&cli.albums_csv, &cli.songs_csv) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Songs => {
            for name in catalog.ordered_song_names() {
                println!("{}", name);
            }
        }
        Commands::Albums { year } => {
            let names: Vec<String> = match year {
                Some(year) => catalog.album_in_year(year).collect(),
                None => catalog.album_names().collect(),
            };
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Stats { album, json } => {
            let report = build_report(&catalog, album);
            if json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                print_report(&report);
            }
        }
    }
}

fn build_report(catalog: &Catalog, album: Option<String>) -> StatsReport {
    let album = album.map(|name| AlbumStats {
        songs: catalog.count_songs(Some(name.as_str())).unwrap_or(0),
        average_duration: catalog.average_duration_of_songs(&name),
        name,
    });

    StatsReport {
        albums: catalog.album_count(),
        songs: catalog.song_count(),
        songs_in_no_album: catalog.count_songs_in_no_album(),
        longest_song: catalog.longest_song().map(String::from),
        latest_album: catalog.longest_album().map(String::from),
        album,
    }
}

fn print_report(report: &StatsReport) {
    println!("Albums:            {}", report.albums);
    println!("Songs:             {}", report.songs);
    println!("Songs in no album: {}", report.songs_in_no_album);
    println!(
        "Longest song:      {}",
        report.longest_song.as_deref().unwrap_or("-")
    );
    println!(
        "Latest album:      {}",
        report.latest_album.as_deref().unwrap_or("-")
    );

    if let Some(ref album) = report.album {
        println!("---------------------------------------------------");
        println!("Album '{}':", album.name);
        println!("  Songs:            {}", album.songs);
        match album.average_duration {
            Some(avg) => println!("  Average duration: {:.1}s", avg),
            None => println!("  Average duration: -"),
        }
    }
}
