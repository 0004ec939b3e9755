use std::sync::atomic::{AtomicU64, Ordering};

/// Number of slots; a power of two so that clustered years never collide.
const SLOTS: usize = 128;

/// A fixed-size, lock-free cache of `year -> start of year` results.
///
/// Each slot packs the year (high 32 bits) and the day count (low 32 bits)
/// into one `AtomicU64`, so that a read can never observe the year of one
/// write with the value of another. A slot is trusted only when its year is
/// the one asked for; on collision the newest write wins. Concurrent
/// writers may overwrite each other, which only causes a later miss.
pub struct StartOfYearCache {
    slots: [AtomicU64; SLOTS],
}

impl StartOfYearCache {
    pub fn new() -> Self {
        // Slot `i` holds year `i + 1`, which is stored in slot `i + 1`:
        // no initial entry can validate.
        Self {
            slots: std::array::from_fn(|i| AtomicU64::new(pack(i as i32 + 1, 0))),
        }
    }

    const fn index(year: i32) -> usize {
        year.rem_euclid(SLOTS as i32) as usize
    }

    /// Returns the cached start of `year`, if present.
    pub fn get(&self, year: i32) -> Option<i32> {
        let (cached_year, value) = unpack(self.slots[Self::index(year)].load(Ordering::Relaxed));
        (cached_year == year).then_some(value)
    }

    pub fn insert(&self, year: i32, start_of_year: i32) {
        self.slots[Self::index(year)].store(pack(year, start_of_year), Ordering::Relaxed);
    }

    /// Returns the start of `year`, computing it on a miss. Only values that
    /// fit in an `i32` are stored; larger ones are recomputed every time.
    pub fn get_or_insert_with(&self, year: i32, compute: impl FnOnce() -> i64) -> i64 {
        if let Some(value) = self.get(year) {
            return i64::from(value);
        }
        trace!("start-of-year cache miss for year {year}");
        let value = compute();
        if let Ok(start_of_year) = i32::try_from(value) {
            self.insert(year, start_of_year);
        }
        value
    }
}

impl Default for StartOfYearCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StartOfYearCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartOfYearCache").field("slots", &SLOTS).finish()
    }
}

const fn pack(year: i32, value: i32) -> u64 {
    ((year as u32 as u64) << 32) | value as u32 as u64
}

const fn unpack(bits: u64) -> (i32, i32) {
    ((bits >> 32) as u32 as i32, bits as u32 as i32)
}
