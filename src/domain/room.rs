//! Room entity: one rectangular-cuboid room

use std::cmp::Ordering;
use std::fmt;

use super::{DomainError, DomainResult};

/// Number of dimensions a room is described by (length, width, height).
pub const DIMENSION_COUNT: usize = 3;

/// A rectangular-cuboid room.
///
/// Equality compares the `(length, width, height)` triple in that order;
/// `position` does not take part. Dimensions are compared exactly, so a
/// room computed as `0.1 + 0.2` is not equal to one read as `0.3`.
#[derive(Debug, Clone, Copy)]
pub struct Room {
    position: usize,
    length: f64,
    width: f64,
    height: f64,
}

impl Room {
    pub fn new(position: usize, length: f64, width: f64, height: f64) -> Self {
        Self {
            position,
            length,
            width,
            height,
        }
    }

    /// Build a room from a dimension slice.
    ///
    /// Fails with [`DomainError::InvalidDimensions`] unless the slice holds
    /// exactly [`DIMENSION_COUNT`] values.
    pub fn from_dimensions(position: usize, dimensions: &[f64]) -> DomainResult<Self> {
        match *dimensions {
            [length, width, height] => Ok(Self::new(position, length, width, height)),
            _ => Err(DomainError::InvalidDimensions {
                position,
                expected: DIMENSION_COUNT,
                actual: dimensions.len(),
            }),
        }
    }

    /// 1-based line position in the source data.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn dimensions(&self) -> [f64; DIMENSION_COUNT] {
        [self.length, self.width, self.height]
    }

    /// True when all three dimensions are exactly equal.
    pub fn is_cubic(&self) -> bool {
        self.length == self.width && self.width == self.height
    }

    /// Wallpaper area of the room.
    ///
    /// The base area is `2*(l*w + w*h + h*l)`. With `include_extra` the
    /// smallest face is added once more to cover wastage.
    pub fn surface_area(&self, include_extra: bool) -> f64 {
        let a = self.length * self.width;
        let b = self.width * self.height;
        let c = self.height * self.length;
        let base = 2.0 * (a + b + c);
        if include_extra {
            base + a.min(b).min(c)
        } else {
            base
        }
    }

    /// Three-way comparison by base surface area (no extra), ascending.
    pub fn cmp_by_area(&self, other: &Room) -> Ordering {
        self.surface_area(false)
            .total_cmp(&other.surface_area(false))
    }

    /// Hashable identity of the dimension triple, consistent with `==`.
    pub fn key(&self) -> Option<RoomKey> {
        RoomKey::new(self)
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.width == other.width && self.height == other.height
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. room (length={}, width={}, height={})",
            self.position, self.length, self.width, self.height
        )
    }
}

/// Bit-level key of a room's dimension triple.
///
/// `-0.0` is folded onto `0.0` so two keys are equal exactly when the rooms
/// compare equal. Rooms with a NaN dimension equal nothing and have no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomKey([u64; DIMENSION_COUNT]);

impl RoomKey {
    fn new(room: &Room) -> Option<Self> {
        let mut bits = [0u64; DIMENSION_COUNT];
        for (slot, value) in bits.iter_mut().zip(room.dimensions()) {
            if value.is_nan() {
                return None;
            }
            // -0.0 == 0.0 but their bit patterns differ
            *slot = if value == 0.0 { 0 } else { value.to_bits() };
        }
        Some(Self(bits))
    }
}
