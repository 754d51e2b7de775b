//! Wallpaper calculation service
//!
//! Reads a data source, parses it into rooms, and derives the report.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, DataSource, IoResultExt, WallpaperReport};
use crate::config::Settings;
use crate::domain::{
    cubic_rooms, duplicate_rooms, total_wallpaper_area, Room, RoomParser, Splitter,
};
use crate::infrastructure::traits::FileSystem;

/// Service computing wallpaper reports from room files.
///
/// Every call works on freshly read data; nothing is cached between runs.
pub struct CalculatorService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl CalculatorService {
    /// Create a new calculator service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Build the room parser from the configured delimiter.
    pub fn parser(&self) -> ApplicationResult<RoomParser> {
        let splitter = Splitter::new(&self.settings.delimiter, self.settings.delimiter_mode)?;
        Ok(RoomParser::new(splitter).skip_blank_lines(self.settings.skip_blank_lines))
    }

    /// Read and parse all rooms from `source`.
    #[instrument(level = "debug", skip(self, source), fields(source = %source))]
    pub fn load_rooms(&self, source: &DataSource) -> ApplicationResult<Vec<Room>> {
        let parser = self.parser()?;
        let content = self
            .fs
            .read_to_string(source.path())
            .with_source_context(source)?;
        debug!("load_rooms: read {} bytes", content.len());

        let rooms = parser.parse(content.lines())?;
        info!("loaded {} rooms from {}", rooms.len(), source);
        Ok(rooms)
    }

    /// Derive the report for already parsed rooms.
    ///
    /// The three aggregations are independent and run via `rayon::join`;
    /// the total is still a sequential fold in room order.
    pub fn report(&self, rooms: &[Room]) -> WallpaperReport {
        let include_extra = self.settings.add_extra;
        let (total_area, (cubic, duplicates)) = rayon::join(
            || total_wallpaper_area(rooms, include_extra),
            || rayon::join(|| cubic_rooms(rooms), || duplicate_rooms(rooms)),
        );
        debug!(
            "report: {} cubic, {} duplicates, total {}",
            cubic.len(),
            duplicates.len(),
            total_area
        );

        WallpaperReport {
            cubic_rooms: cubic,
            duplicate_rooms: duplicates,
            total_area,
            include_extra,
            unit: self.settings.unit.clone(),
            room_count: rooms.len(),
        }
    }

    /// Read, parse and aggregate in one step.
    pub fn calculate(&self, source: &DataSource) -> ApplicationResult<WallpaperReport> {
        let rooms = self.load_rooms(source)?;
        Ok(self.report(&rooms))
    }
}
