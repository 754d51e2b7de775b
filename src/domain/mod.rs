//! Domain layer: rooms and the aggregations over them
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod aggregate;
pub mod error;
pub mod parser;
pub mod room;

pub use aggregate::{cubic_rooms, duplicate_rooms, total_wallpaper_area};
pub use error::{DomainError, DomainResult};
pub use parser::{parse_room_line, parse_rooms, DelimiterMode, RoomParser, Splitter};
pub use room::{Room, RoomKey, DIMENSION_COUNT};
