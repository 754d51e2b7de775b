//! Pure aggregations over a parsed room sequence

use itertools::Itertools;

use super::Room;

/// Sum of every room's surface area, folded in sequence order.
pub fn total_wallpaper_area(rooms: &[Room], include_extra: bool) -> f64 {
    rooms
        .iter()
        .fold(0.0, |total, room| total + room.surface_area(include_extra))
}

/// Cubic rooms, largest base area first.
///
/// The sort is stable: rooms with equal area keep their input order.
pub fn cubic_rooms(rooms: &[Room]) -> Vec<Room> {
    let mut cubic: Vec<Room> = rooms.iter().filter(|r| r.is_cubic()).copied().collect();
    cubic.sort_by(|a, b| b.cmp_by_area(a));
    cubic
}

/// Rooms whose dimension triple occurs more than once.
///
/// Every member of a matching group is returned, in order of first
/// appearance in `rooms`.
pub fn duplicate_rooms(rooms: &[Room]) -> Vec<Room> {
    let counts = rooms.iter().filter_map(Room::key).counts();
    rooms
        .iter()
        .filter(|room| {
            room.key()
                .and_then(|key| counts.get(&key))
                .is_some_and(|&n| n > 1)
        })
        .copied()
        .collect()
}
