use serde::{Deserialize, Serialize};

/// Discrete activity bucket in `0..=4`, used to pick a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IntensityLevel(u8);

impl IntensityLevel {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Maps a day's count to its intensity level.
///
/// Inclusive lower bounds: 0, 1, 4, 7, 10.
pub fn level_of(count: u32) -> IntensityLevel {
    let level = match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    };
    IntensityLevel(level)
}
