//! Wallpaper calculator
//!
//! Reads room dimensions (one `LxWxH` line per room), then reports the
//! total wallpaper area, the cube-shaped rooms and the rooms that share
//! their dimensions with another room.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::CalculatorService;
pub use application::{ApplicationError, DataSource, WallpaperReport};
pub use config::Settings;
pub use domain::{
    cubic_rooms, duplicate_rooms, parse_rooms, total_wallpaper_area, DomainError, Room,
};
