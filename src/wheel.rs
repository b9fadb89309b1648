//! Immutable lookup tables for the European wheel
//!
//! Everything here is computed once by [`WheelTables::european`] and never
//! mutated afterwards. All queries take numbers already known to be in
//! `0..=36` (or terminal digits in `0..=9`).

use crate::error::{AnalystError, AnalystResult};
use crate::models::{NumberInfo, NumberView, Section};
use std::collections::{BTreeSet, HashMap};

/// Number of pockets on a single-zero wheel
pub const POCKETS: usize = 37;

/// Highest pocket number
pub const MAX_NUMBER: u8 = 36;

/// Physical cylinder order, clockwise from zero
pub const WHEEL_ORDER: [u8; POCKETS] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

const VOISINS: [u8; 17] = [0, 2, 3, 4, 7, 12, 15, 18, 19, 21, 22, 25, 26, 28, 29, 32, 35];
const TIERS: [u8; 12] = [5, 8, 10, 11, 13, 16, 23, 24, 27, 30, 33, 36];

/// Central terminal -> its two lateral terminals
pub const HORSE_TRIADS: [[u8; 2]; 10] = [
    [3, 7],
    [4, 8],
    [5, 9],
    [6, 0],
    [7, 1],
    [8, 2],
    [9, 3],
    [0, 4],
    [1, 5],
    [2, 6],
];

const DISGUISED: [&[u8]; 10] = [
    &[11, 19, 22, 28, 33],
    &[12, 23, 29, 32, 34],
    &[11, 13, 24, 31, 35],
    &[12, 14, 21, 25, 26, 36],
    &[13, 15, 22, 26, 28, 31],
    &[14, 16, 23, 27, 32],
    &[15, 17, 24, 28, 33],
    &[16, 18, 25, 29, 34],
    &[17, 19, 24, 26, 35],
    &[18, 27, 33, 36],
];

/// Wheel offsets reported by [`WheelTables::neighbors`]
pub const NEIGHBOR_OFFSETS: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// Whether a raw value is a valid pocket number
pub fn is_valid_number(value: i64) -> bool {
    (0..=i64::from(MAX_NUMBER)).contains(&value)
}

#[derive(Debug, Clone)]
pub struct WheelTables {
    info: [NumberInfo; POCKETS],
    positions: [usize; POCKETS],
    neighbors: [[u8; 6]; POCKETS],
    lateral_to_central: HashMap<(u8, u8), u8>,
    disguised: [BTreeSet<u8>; 10],
}

impl WheelTables {
    /// Build the tables for the standard single-zero wheel
    pub fn european() -> AnalystResult<Self> {
        Self::build(&WHEEL_ORDER, &HORSE_TRIADS)
    }

    /// Build tables from an explicit wheel order and triad table
    pub fn build(order: &[u8; POCKETS], triads: &[[u8; 2]; 10]) -> AnalystResult<Self> {
        let positions = Self::map_positions(order)?;
        let lateral_to_central = Self::map_laterals(triads)?;

        let info = std::array::from_fn(|n| {
            let n = n as u8;
            let section = if VOISINS.contains(&n) {
                Section::Voisins
            } else if TIERS.contains(&n) {
                Section::Tiers
            } else {
                Section::Orphelins
            };
            NumberInfo {
                terminal: n % 10,
                section,
            }
        });

        let neighbors = std::array::from_fn(|n| {
            let pos = positions[n] as i32;
            NEIGHBOR_OFFSETS.map(|offset| {
                let idx = (pos + offset).rem_euclid(POCKETS as i32) as usize;
                order[idx]
            })
        });

        let disguised = std::array::from_fn(|d| DISGUISED[d].iter().copied().collect());

        Ok(Self {
            info,
            positions,
            neighbors,
            lateral_to_central,
            disguised,
        })
    }

    fn map_positions(order: &[u8; POCKETS]) -> AnalystResult<[usize; POCKETS]> {
        let mut positions = [usize::MAX; POCKETS];
        for (idx, &n) in order.iter().enumerate() {
            if n > MAX_NUMBER {
                return Err(AnalystError::InvalidWheel(format!(
                    "pocket {} out of range",
                    n
                )));
            }
            if positions[n as usize] != usize::MAX {
                return Err(AnalystError::InvalidWheel(format!(
                    "pocket {} appears more than once",
                    n
                )));
            }
            positions[n as usize] = idx;
        }
        // 37 distinct in-range entries cover every pocket
        Ok(positions)
    }

    fn map_laterals(triads: &[[u8; 2]; 10]) -> AnalystResult<HashMap<(u8, u8), u8>> {
        let mut map = HashMap::with_capacity(triads.len());
        for (central, &[a, b]) in triads.iter().enumerate() {
            let central = central as u8;
            let key = (a.min(b), a.max(b));
            if let Some(first) = map.insert(key, central) {
                return Err(AnalystError::DuplicateLateralPair {
                    first,
                    second: central,
                    low: key.0,
                    high: key.1,
                });
            }
        }
        Ok(map)
    }

    pub fn info(&self, n: u8) -> NumberInfo {
        self.info[n as usize]
    }

    pub fn terminal(&self, n: u8) -> u8 {
        self.info[n as usize].terminal
    }

    pub fn section(&self, n: u8) -> Section {
        self.info[n as usize].section
    }

    /// Index of `n` in [`WHEEL_ORDER`]
    pub fn wheel_position(&self, n: u8) -> usize {
        self.positions[n as usize]
    }

    /// Neighbours at offsets -3, -2, -1, +1, +2, +3 along the wheel
    pub fn neighbors(&self, n: u8) -> [u8; 6] {
        self.neighbors[n as usize]
    }

    /// Lateral terminals of a central terminal
    pub fn laterals(&self, digit: u8) -> [u8; 2] {
        HORSE_TRIADS[digit as usize]
    }

    /// Central terminal followed by its two laterals
    pub fn triad(&self, digit: u8) -> [u8; 3] {
        let [a, b] = self.laterals(digit);
        [digit, a, b]
    }

    /// Central terminal whose laterals are `a` and `b`, in either order
    pub fn central_for(&self, a: u8, b: u8) -> Option<u8> {
        self.lateral_to_central.get(&(a.min(b), a.max(b))).copied()
    }

    pub fn disguised(&self, digit: u8) -> &BTreeSet<u8> {
        &self.disguised[digit as usize]
    }

    /// Collect every table entry for `n`
    pub fn view(&self, n: u8) -> NumberView {
        let NumberInfo { terminal, section } = self.info(n);
        NumberView {
            number: n,
            terminal,
            section,
            wheel_position: self.wheel_position(n),
            neighbors: self.neighbors(n),
            horse_triad: self.triad(terminal),
            disguised: self.disguised(terminal).iter().copied().collect(),
        }
    }
}
