//! Calculation results handed to the reporting layer

use crate::domain::Room;

/// Outcome of one calculation run.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperReport {
    /// Cubic rooms, largest area first
    pub cubic_rooms: Vec<Room>,
    /// Rooms sharing their dimensions with at least one other room
    pub duplicate_rooms: Vec<Room>,
    /// Total wallpaper area over all rooms
    pub total_area: f64,
    /// Whether `total_area` includes the wastage allowance
    pub include_extra: bool,
    /// Display unit, no conversion applied
    pub unit: String,
    /// Number of rooms parsed
    pub room_count: usize,
}

impl WallpaperReport {
    /// `"<number> square <unit>s"`
    pub fn summary_line(&self) -> String {
        format!("{} square {}s", self.total_area, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_report_when_summary_line_then_pluralized_unit() {
        let report = WallpaperReport {
            cubic_rooms: vec![],
            duplicate_rooms: vec![],
            total_area: 58.0,
            include_extra: true,
            unit: "feet".into(),
            room_count: 1,
        };
        assert_eq!(report.summary_line(), "58 square feets");
    }

    #[test]
    fn given_fractional_total_when_summary_line_then_full_precision() {
        let report = WallpaperReport {
            cubic_rooms: vec![],
            duplicate_rooms: vec![],
            total_area: 12.5,
            include_extra: false,
            unit: "meter".into(),
            room_count: 1,
        };
        assert_eq!(report.summary_line(), "12.5 square meters");
    }
}
