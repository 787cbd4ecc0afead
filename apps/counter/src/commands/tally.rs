//! # Tally Commands
//!
//! Commands that read or change the counts.
//!
//! ## Count Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Count Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐  set_active_shift  ┌──────────┐   set_quantity            │
//! │  │  Empty   │───────────────────►│  Active  │◄──────────────┐           │
//! │  │  Tally   │                    │  Shift   │───────────────┘           │
//! │  └──────────┘                    └──────────┘                           │
//! │       ▲                               │                                 │
//! │       │          clear_shift          │                                 │
//! │       └───────────────────────────────┘  (active shift only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use tally_core::validation::parse_quantity;
use tally_core::{CountLine, Denomination, Money, Shift};

use crate::error::ApiError;
use crate::state::{CounterConfig, CounterState};

/// One shift's rows and total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    pub shift: Shift,
    pub lines: Vec<CountLine>,
    pub total: Money,
    pub total_text: String,
}

/// Full tally snapshot returned by every tally command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyResponse {
    pub active_shift: Shift,
    pub shifts: Vec<ShiftResponse>,
    pub grand_total: Money,
    pub grand_total_text: String,
}

impl TallyResponse {
    fn build(state: &CounterState, config: &CounterConfig) -> Self {
        let shifts = Shift::ALL
            .into_iter()
            .map(|shift| {
                let count = state.tally.shift(shift);
                let total = count.total();
                ShiftResponse {
                    shift,
                    lines: count.lines().collect(),
                    total,
                    total_text: config.format_currency(total),
                }
            })
            .collect();
        let grand_total = state.tally.grand_total();

        TallyResponse {
            active_shift: state.active_shift,
            shifts,
            grand_total,
            grand_total_text: config.format_currency(grand_total),
        }
    }

    /// Snapshot of one shift.
    pub fn shift(&self, shift: Shift) -> &ShiftResponse {
        &self.shifts[shift.index()]
    }
}

/// Gets the current tally. Called once per frame by the UI.
pub fn get_tally(state: &CounterState, config: &CounterConfig) -> TallyResponse {
    trace!("get_tally command");
    TallyResponse::build(state, config)
}

/// Sets the quantity of one denomination in the active shift.
///
/// ## Behavior
/// - `input` is coerced: empty, negative or non-numeric text stores 0
/// - Only the (active shift, denomination) entry changes
///
/// ## Arguments
/// * `denomination` - Face value, e.g. `500`
/// * `input` - Raw text typed by the user
pub fn set_quantity(
    state: &mut CounterState,
    config: &CounterConfig,
    denomination: u32,
    input: &str,
) -> Result<TallyResponse, ApiError> {
    debug!(shift = %state.active_shift, denomination = %denomination, input = %input, "set_quantity command");

    let denomination = Denomination::try_from(denomination)?;
    let quantity = parse_quantity(input);
    state
        .tally
        .set_quantity(state.active_shift, denomination, quantity);

    Ok(TallyResponse::build(state, config))
}

/// Switches the active shift. Counts are untouched.
///
/// ## Arguments
/// * `shift` - "1st", "2nd", "3rd" (also "1", "first", ...)
pub fn set_active_shift(
    state: &mut CounterState,
    config: &CounterConfig,
    shift: &str,
) -> Result<TallyResponse, ApiError> {
    debug!(shift = %shift, "set_active_shift command");

    state.active_shift = shift.parse::<Shift>()?;
    Ok(TallyResponse::build(state, config))
}

/// Resets the active shift to empty and confirms with a notification.
pub fn clear_shift(state: &mut CounterState, config: &CounterConfig) -> TallyResponse {
    let shift = state.active_shift;
    debug!(shift = %shift, "clear_shift command");

    state.tally.clear_shift(shift);
    state.notifications.info(
        "Shift Cleared",
        format!("{} shift has been reset to zero.", shift),
    );

    TallyResponse::build(state, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (CounterState, CounterConfig) {
        (CounterState::new(), CounterConfig::default())
    }

    #[test]
    fn test_concrete_scenario() {
        let (mut state, config) = setup();

        set_quantity(&mut state, &config, 1000, "2").unwrap();
        set_quantity(&mut state, &config, 100, "3").unwrap();
        set_active_shift(&mut state, &config, "2nd").unwrap();
        let response = set_quantity(&mut state, &config, 500, "1").unwrap();

        assert_eq!(response.active_shift, Shift::Second);
        assert_eq!(response.shift(Shift::First).total_text, "₱2,300.00");
        assert_eq!(response.shift(Shift::Second).total_text, "₱500.00");
        assert_eq!(response.shift(Shift::Third).total, Money::zero());
        assert_eq!(response.grand_total_text, "₱2,800.00");
    }

    #[test]
    fn test_invalid_input_stores_zero() {
        let (mut state, config) = setup();
        set_quantity(&mut state, &config, 20, "7").unwrap();

        for input in ["-3", "abc", ""] {
            let response = set_quantity(&mut state, &config, 20, input).unwrap();
            assert_eq!(response.shift(Shift::First).total, Money::zero());
        }
    }

    #[test]
    fn test_unknown_denomination_is_rejected() {
        let (mut state, config) = setup();
        let err = set_quantity(&mut state, &config, 2000, "1").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.tally.is_empty());
    }

    #[test]
    fn test_unknown_shift_is_rejected() {
        let (mut state, config) = setup();
        let err = set_active_shift(&mut state, &config, "4th").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.active_shift, Shift::First);
    }

    #[test]
    fn test_clear_shift_only_touches_active_shift() {
        let (mut state, config) = setup();
        set_quantity(&mut state, &config, 1000, "1").unwrap();
        set_active_shift(&mut state, &config, "3rd").unwrap();
        set_quantity(&mut state, &config, 10, "4").unwrap();

        let response = clear_shift(&mut state, &config);

        assert_eq!(response.shift(Shift::Third).total, Money::zero());
        assert_eq!(response.shift(Shift::First).total, Money::from_major(1000));

        let note = state.notifications.latest().unwrap();
        assert_eq!(note.title, "Shift Cleared");
        assert_eq!(note.message, "3rd shift has been reset to zero.");
    }

    #[test]
    fn test_get_tally_reflects_state() {
        let (mut state, config) = setup();
        set_quantity(&mut state, &config, 50, "4").unwrap();
        set_active_shift(&mut state, &config, "3rd").unwrap();

        let snapshot = get_tally(&state, &config);

        assert_eq!(snapshot.active_shift, Shift::Third);
        assert_eq!(snapshot.shift(Shift::First).total_text, "₱200.00");
        assert_eq!(snapshot.shift(Shift::Third).lines.len(), Denomination::COUNT);
        assert_eq!(snapshot.grand_total, Money::from_major(200));
    }

    #[test]
    fn test_response_shape() {
        let (mut state, config) = setup();
        let response = set_quantity(&mut state, &config, 5, "3").unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["activeShift"], "1st");
        assert_eq!(json["grandTotalText"], "₱15.00");
        assert_eq!(json["shifts"].as_array().unwrap().len(), 3);

        let line = &json["shifts"][0]["lines"][7];
        assert_eq!(line["denomination"], 5);
        assert_eq!(line["quantity"], 3);
    }
}
