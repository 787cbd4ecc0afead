//! # Domain Types
//!
//! The two closed enumerations everything else is indexed by.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────┐     ┌─────────────────┐              │
//! │  │        Denomination          │     │      Shift      │              │
//! │  │  ──────────────────────────  │     │  ─────────────  │              │
//! │  │  1000 500 200 100 50         │     │  First  "1st"   │              │
//! │  │    20  10   5   1            │     │  Second "2nd"   │              │
//! │  │  (descending, fixed order)   │     │  Third  "3rd"   │              │
//! │  └──────────────────────────────┘     └─────────────────┘              │
//! │                                                                         │
//! │  Both axes are closed and tiny, so counts are fixed-size arrays        │
//! │  indexed by `index()` instead of maps with presence checks.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A currency face value in whole units.
///
/// Serialized as its face value (`500`), not as the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Denomination {
    Thousand,
    FiveHundred,
    TwoHundred,
    Hundred,
    Fifty,
    Twenty,
    Ten,
    Five,
    One,
}

impl Denomination {
    /// Number of denominations.
    pub const COUNT: usize = 9;

    /// Every denomination in descending face-value order.
    ///
    /// Reports, inputs and print views always enumerate in this order.
    pub const ALL: [Denomination; Denomination::COUNT] = [
        Denomination::Thousand,
        Denomination::FiveHundred,
        Denomination::TwoHundred,
        Denomination::Hundred,
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    /// Face value in whole currency units.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Denomination::Thousand => 1000,
            Denomination::FiveHundred => 500,
            Denomination::TwoHundred => 200,
            Denomination::Hundred => 100,
            Denomination::Fifty => 50,
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
            Denomination::Five => 5,
            Denomination::One => 1,
        }
    }

    /// Position in [`Denomination::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face value as money.
    #[inline]
    pub const fn face_value(self) -> Money {
        Money::from_major(self.value() as i64)
    }

    /// Looks up a denomination by face value.
    pub fn from_value(value: u32) -> Option<Self> {
        Denomination::ALL.into_iter().find(|d| d.value() == value)
    }

    /// Display label for inputs and print views.
    ///
    /// Values of 1000 and above are abbreviated with a `k` suffix.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Denomination;
    ///
    /// assert_eq!(Denomination::Thousand.label("₱"), "₱1k");
    /// assert_eq!(Denomination::FiveHundred.label("₱"), "₱500");
    /// assert_eq!(Denomination::One.label("₱"), "₱1");
    /// ```
    pub fn label(self, symbol: &str) -> String {
        let value = self.value();
        if value >= 1000 {
            format!("{}{}k", symbol, value / 1000)
        } else {
            format!("{}{}", symbol, value)
        }
    }
}

impl From<Denomination> for u32 {
    fn from(denomination: Denomination) -> Self {
        denomination.value()
    }
}

impl TryFrom<u32> for Denomination {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Denomination::from_value(value).ok_or(CoreError::UnknownDenomination(value))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Shift
// =============================================================================

/// One of the three fixed work periods cash is grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl Shift {
    /// Number of shifts.
    pub const COUNT: usize = 3;

    /// Every shift in tab order.
    pub const ALL: [Shift; Shift::COUNT] = [Shift::First, Shift::Second, Shift::Third];

    /// Position in [`Shift::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label shown on tabs and in notifications ("1st").
    pub const fn label(self) -> &'static str {
        match self {
            Shift::First => "1st",
            Shift::Second => "2nd",
            Shift::Third => "3rd",
        }
    }

    /// Upper-case label used in report headings ("1ST").
    pub const fn heading(self) -> &'static str {
        match self {
            Shift::First => "1ST",
            Shift::Second => "2ND",
            Shift::Third => "3RD",
        }
    }

    /// The tab to the right, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Shift::First => Shift::Second,
            Shift::Second => Shift::Third,
            Shift::Third => Shift::First,
        }
    }

    /// The tab to the left, wrapping around.
    pub const fn previous(self) -> Self {
        match self {
            Shift::First => Shift::Third,
            Shift::Second => Shift::First,
            Shift::Third => Shift::Second,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1st" | "1" | "first" => Ok(Shift::First),
            "2nd" | "2" | "second" => Ok(Shift::Second),
            "3rd" | "3" | "third" => Ok(Shift::Third),
            other => Err(CoreError::UnknownShift(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
