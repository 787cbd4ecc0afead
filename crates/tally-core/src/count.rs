//! # Count Module
//!
//! Shift counts, the three-shift tally and the totals derived from them.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tally                                                                  │
//! │  ┌──────────────┬──────────────┬──────────────┐                         │
//! │  │ First        │ Second       │ Third        │  ◄── [ShiftCount; 3]    │
//! │  ├──────────────┼──────────────┼──────────────┤                         │
//! │  │ 1000 × 2     │ 1000 × 0     │ 1000 × 0     │                         │
//! │  │  500 × 0     │  500 × 1     │  500 × 0     │  ◄── [Quantity; 9]      │
//! │  │  ...         │  ...         │  ...         │                         │
//! │  └──────────────┴──────────────┴──────────────┘                         │
//! │                                                                         │
//! │  shift_total  = Σ denomination × quantity        (never cached)        │
//! │  grand_total  = Σ shift_total                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Denomination, Shift};

/// Number of notes or coins counted for one denomination.
pub type Quantity = u32;

// =============================================================================
// Count Line
// =============================================================================

/// One denomination's row: quantity and the amount it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountLine {
    pub denomination: Denomination,
    pub quantity: Quantity,
    pub amount: Money,
}

impl CountLine {
    pub fn new(denomination: Denomination, quantity: Quantity) -> Self {
        CountLine {
            denomination,
            quantity,
            amount: line_amount(denomination, quantity),
        }
    }
}

/// Amount represented by `quantity` pieces of `denomination`.
#[inline]
pub fn line_amount(denomination: Denomination, quantity: Quantity) -> Money {
    denomination.face_value().multiply_quantity(quantity)
}

// =============================================================================
// Shift Count
// =============================================================================

/// Quantities for one shift, one slot per denomination.
///
/// ## Invariants
/// - Slot `i` holds the quantity of `Denomination::ALL[i]`
/// - An untouched slot is zero, so there is no "absent" state to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftCount {
    quantities: [Quantity; Denomination::COUNT],
}

impl ShiftCount {
    /// Creates an empty count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for a denomination (zero when never set).
    #[inline]
    pub fn quantity(&self, denomination: Denomination) -> Quantity {
        self.quantities[denomination.index()]
    }

    /// Replaces the quantity for one denomination.
    #[inline]
    pub fn set(&mut self, denomination: Denomination, quantity: Quantity) {
        self.quantities[denomination.index()] = quantity;
    }

    /// Resets every quantity to zero.
    pub fn clear(&mut self) {
        self.quantities = [0; Denomination::COUNT];
    }

    /// True when no denomination has a non-zero quantity.
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|&q| q == 0)
    }

    /// All nine rows in descending denomination order.
    pub fn lines(&self) -> impl Iterator<Item = CountLine> + '_ {
        Denomination::ALL
            .into_iter()
            .map(move |d| CountLine::new(d, self.quantity(d)))
    }

    /// Only rows with a non-zero quantity.
    pub fn nonzero_lines(&self) -> impl Iterator<Item = CountLine> + '_ {
        self.lines().filter(|line| line.quantity > 0)
    }

    /// Σ denomination × quantity.
    pub fn total(&self) -> Money {
        self.lines().map(|line| line.amount).sum()
    }
}

// =============================================================================
// Aggregate Count
// =============================================================================

/// Per-denomination quantities summed across all shifts.
///
/// Quantities are `u64`: three shifts at `Quantity::MAX` add up exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateCount {
    quantities: [u64; Denomination::COUNT],
}

impl AggregateCount {
    /// Combined quantity for a denomination.
    #[inline]
    pub fn quantity(&self, denomination: Denomination) -> u64 {
        self.quantities[denomination.index()]
    }

    /// Amount represented by the combined quantity of one denomination.
    pub fn amount(&self, denomination: Denomination) -> Money {
        denomination
            .face_value()
            .multiply_pieces(self.quantity(denomination))
    }

    /// Σ denomination × combined quantity. Equals the grand total.
    pub fn total(&self) -> Money {
        Denomination::ALL.into_iter().map(|d| self.amount(d)).sum()
    }
}

// =============================================================================
// Tally (all shifts)
// =============================================================================

/// Counts for all three shifts.
///
/// Created empty at startup, mutated in place by user edits and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    shifts: [ShiftCount; Shift::COUNT],
}

impl Tally {
    /// Creates a tally with all three shifts empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to one shift.
    #[inline]
    pub fn shift(&self, shift: Shift) -> &ShiftCount {
        &self.shifts[shift.index()]
    }

    /// Replaces the quantity for a (shift, denomination) pair. Every other
    /// entry is unaffected.
    pub fn set_quantity(&mut self, shift: Shift, denomination: Denomination, quantity: Quantity) {
        self.shifts[shift.index()].set(denomination, quantity);
    }

    /// Resets one shift to empty. Other shifts are unaffected.
    pub fn clear_shift(&mut self, shift: Shift) {
        self.shifts[shift.index()].clear();
    }

    /// Total for one shift.
    pub fn shift_total(&self, shift: Shift) -> Money {
        shift_total(self.shift(shift))
    }

    /// Sum of all shift totals.
    pub fn grand_total(&self) -> Money {
        grand_total(self)
    }

    /// Per-denomination quantities summed across all shifts.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Denomination, Shift, Tally};
    ///
    /// let mut tally = Tally::new();
    /// tally.set_quantity(Shift::First, Denomination::Fifty, 2);
    /// tally.set_quantity(Shift::Third, Denomination::Fifty, 5);
    ///
    /// assert_eq!(tally.aggregate().quantity(Denomination::Fifty), 7);
    /// ```
    pub fn aggregate(&self) -> AggregateCount {
        let mut combined = AggregateCount::default();
        for d in Denomination::ALL {
            combined.quantities[d.index()] = self
                .shifts
                .iter()
                .map(|count| count.quantity(d) as u64)
                .sum();
        }
        combined
    }

    /// Shifts with at least one non-zero quantity, in tab order.
    pub fn populated_shifts(&self) -> impl Iterator<Item = Shift> + '_ {
        Shift::ALL
            .into_iter()
            .filter(move |&s| !self.shift(s).is_empty())
    }

    /// True when every shift is empty.
    pub fn is_empty(&self) -> bool {
        self.shifts.iter().all(ShiftCount::is_empty)
    }
}

// =============================================================================
// Total Functions
// =============================================================================

/// Σ over the nine denominations of denomination × quantity.
pub fn shift_total(count: &ShiftCount) -> Money {
    count.total()
}

/// Σ over all shifts of [`shift_total`].
pub fn grand_total(tally: &Tally) -> Money {
    Shift::ALL
        .into_iter()
        .map(|s| shift_total(tally.shift(s)))
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tally() -> Tally {
        let mut tally = Tally::new();
        tally.set_quantity(Shift::First, Denomination::Thousand, 2);
        tally.set_quantity(Shift::First, Denomination::Hundred, 3);
        tally.set_quantity(Shift::Second, Denomination::FiveHundred, 1);
        tally
    }

    #[test]
    fn test_single_denomination_total_is_exact() {
        for d in Denomination::ALL {
            for q in [0, 1, 7, 250, Quantity::MAX] {
                let mut count = ShiftCount::new();
                count.set(d, q);
                assert_eq!(
                    shift_total(&count),
                    Money::from_major(d.value() as i64 * q as i64)
                );
            }
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let tally = sample_tally();

        assert_eq!(tally.shift_total(Shift::First), Money::from_major(2300));
        assert_eq!(tally.shift_total(Shift::Second), Money::from_major(500));
        assert_eq!(tally.shift_total(Shift::Third), Money::zero());
        assert_eq!(tally.grand_total(), Money::from_major(2800));
    }

    #[test]
    fn test_grand_total_is_sum_of_shift_totals() {
        let mut tally = sample_tally();
        tally.set_quantity(Shift::Third, Denomination::One, 9);
        tally.set_quantity(Shift::Third, Denomination::Twenty, 4);

        let summed: Money = Shift::ALL.iter().map(|&s| tally.shift_total(s)).sum();
        assert_eq!(tally.grand_total(), summed);
        assert_eq!(grand_total(&tally), Money::from_major(2800 + 9 + 80));
    }

    #[test]
    fn test_set_quantity_replaces_only_one_entry() {
        let mut tally = sample_tally();
        tally.set_quantity(Shift::First, Denomination::Thousand, 5);

        assert_eq!(tally.shift(Shift::First).quantity(Denomination::Thousand), 5);
        assert_eq!(tally.shift(Shift::First).quantity(Denomination::Hundred), 3);
        assert_eq!(tally.shift(Shift::Second).quantity(Denomination::FiveHundred), 1);
    }

    #[test]
    fn test_clear_shift_leaves_others() {
        let mut tally = sample_tally();
        tally.set_quantity(Shift::Third, Denomination::Ten, 3);

        tally.clear_shift(Shift::First);

        assert_eq!(tally.shift_total(Shift::First), Money::zero());
        assert!(tally.shift(Shift::First).is_empty());
        assert_eq!(tally.shift_total(Shift::Second), Money::from_major(500));
        assert_eq!(tally.shift_total(Shift::Third), Money::from_major(30));
    }

    #[test]
    fn test_zero_entries_count_as_empty() {
        let mut tally = Tally::new();
        tally.set_quantity(Shift::Second, Denomination::Five, 0);

        assert!(tally.shift(Shift::Second).is_empty());
        assert!(tally.is_empty());
        assert_eq!(tally.populated_shifts().count(), 0);
    }

    #[test]
    fn test_aggregate_and_populated_shifts() {
        let mut tally = sample_tally();
        tally.set_quantity(Shift::Second, Denomination::Hundred, 4);

        let combined = tally.aggregate();
        assert_eq!(combined.quantity(Denomination::Thousand), 2);
        assert_eq!(combined.quantity(Denomination::Hundred), 7);
        assert_eq!(combined.quantity(Denomination::One), 0);
        assert_eq!(combined.total(), tally.grand_total());

        let populated: Vec<Shift> = tally.populated_shifts().collect();
        assert_eq!(populated, vec![Shift::First, Shift::Second]);
    }

    #[test]
    fn test_lines_order_and_nonzero_filter() {
        let tally = sample_tally();
        let lines: Vec<CountLine> = tally.shift(Shift::First).lines().collect();
        assert_eq!(lines.len(), Denomination::COUNT);
        assert_eq!(lines[0].denomination, Denomination::Thousand);
        assert_eq!(lines[0].amount, Money::from_major(2000));

        let nonzero: Vec<Denomination> = tally
            .shift(Shift::First)
            .nonzero_lines()
            .map(|l| l.denomination)
            .collect();
        assert_eq!(nonzero, vec![Denomination::Thousand, Denomination::Hundred]);
    }

    #[test]
    fn test_aggregate_of_saturated_shifts_matches_grand_total() {
        let mut tally = Tally::new();
        for shift in Shift::ALL {
            tally.set_quantity(shift, Denomination::One, Quantity::MAX);
            tally.set_quantity(shift, Denomination::Thousand, Quantity::MAX);
        }

        let combined = tally.aggregate();
        assert_eq!(combined.quantity(Denomination::One), 3 * Quantity::MAX as u64);
        assert_eq!(
            combined.amount(Denomination::Thousand),
            Money::from_major(3000 * Quantity::MAX as i64)
        );
        assert_eq!(combined.total(), tally.grand_total());
    }
}
