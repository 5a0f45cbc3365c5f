//! Tap, hold, double-tap, modal and chord shorthands.
//!
//! None of these resolve anything at generation time.  They lay out the
//! daemon's emission slots and timing parameters so the daemon can tell a tap
//! from a hold from a double tap while the user is pressing buttons.
//!
//! # Double tap, step by step
//!
//! [`double_click_button`] emits two manipulators for the same input.  The
//! daemon tries them in order:
//!
//! ```text
//! 1st press:  variable == 0  → manipulator #2: set variable = 1,
//!                              tap on release / hold past threshold,
//!                              delayed action resets variable to 0
//! 2nd press:  variable == 1  → manipulator #1: double-tap events,
//!             (within delay)   reset variable to 0
//! ```
//!
//! The first tap's own events still fire on release; a double tap therefore
//! means "tap, then the double-tap action".

use super::conditions::variable_if;
use crate::domain::{
    Condition, DelayedAction, FromEvent, InputKey, KeyOrder, KeyUpWhen, Manipulator, Parameters,
    SimultaneousOptions, ToEvent,
};

/// Timing thresholds handed to the daemon, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Longest press that still counts as a tap.
    pub tap_timeout_ms: u32,
    /// Press duration after which the hold action fires.
    pub hold_threshold_ms: u32,
    /// Window in which a second press counts as a double tap.
    pub double_tap_delay_ms: u32,
    /// Window in which chord inputs count as simultaneous.
    pub simultaneous_threshold_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tap_timeout_ms: 250,
            hold_threshold_ms: 300,
            double_tap_delay_ms: 250,
            simultaneous_threshold_ms: 50,
        }
    }
}

/// The three gestures a single button can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TapDance {
    pub tap: Vec<ToEvent>,
    pub double_tap: Vec<ToEvent>,
    pub hold: Vec<ToEvent>,
}

/// One manipulator distinguishing a tap from a hold.
pub fn tap_hold(
    from: FromEvent,
    tap: Vec<ToEvent>,
    hold: Vec<ToEvent>,
    timing: &Timing,
) -> Manipulator {
    let parameters = Parameters {
        to_if_alone_timeout_ms: Some(timing.tap_timeout_ms),
        to_if_held_down_threshold_ms: (!hold.is_empty()).then_some(timing.hold_threshold_ms),
        ..Parameters::default()
    };
    Manipulator::new(from)
        .to_if_alone(tap)
        .to_if_held_down(hold)
        .with_parameters(parameters)
}

/// Expands a tap / double-tap / hold button into manipulators.
///
/// Without a double-tap action this degrades to a single [`tap_hold`]
/// manipulator and `variable` is not used.  `conditions` are applied to every
/// manipulator produced.
pub fn double_click_button(
    from: FromEvent,
    dance: TapDance,
    variable: &str,
    timing: &Timing,
    conditions: &[Condition],
) -> Vec<Manipulator> {
    if dance.double_tap.is_empty() {
        return vec![tap_hold(from, dance.tap, dance.hold, timing).when(conditions.iter().cloned())];
    }

    let reset = ToEvent::set_variable(variable, 0);

    let second_press = Manipulator::new(from.clone())
        .to(dance.double_tap)
        .to([reset.clone()])
        .when(conditions.iter().cloned())
        .when([variable_if(variable, 1)]);

    let has_hold = !dance.hold.is_empty();
    let first_press = Manipulator::new(from)
        .to([ToEvent::set_variable(variable, 1)])
        .to_if_alone(dance.tap)
        .to_if_held_down(dance.hold)
        .to_delayed_action(DelayedAction {
            to_if_invoked: vec![reset.clone()],
            to_if_canceled: vec![reset],
        })
        .when(conditions.iter().cloned())
        .with_parameters(Parameters {
            to_if_alone_timeout_ms: Some(timing.tap_timeout_ms),
            to_if_held_down_threshold_ms: has_hold.then_some(timing.hold_threshold_ms),
            to_delayed_action_delay_ms: Some(timing.double_tap_delay_ms),
            simultaneous_threshold_ms: None,
        });

    vec![second_press, first_press]
}

/// A key that switches a mode on while held.
///
/// `variable` is 1 from key down to key up.  `alone` is emitted when the key
/// is pressed and released without anything else in between, so the key keeps
/// its normal function for plain taps.
pub fn modal_toggle(
    from: FromEvent,
    variable: &str,
    alone: Vec<ToEvent>,
    conditions: &[Condition],
) -> Manipulator {
    Manipulator::new(from)
        .to([ToEvent::set_variable(variable, 1)])
        .to_after_key_up([ToEvent::set_variable(variable, 0)])
        .to_if_alone(alone)
        .when(conditions.iter().cloned())
}

/// Several inputs pressed together, in any order.
pub fn chord<I, K>(
    keys: I,
    to: Vec<ToEvent>,
    timing: &Timing,
    conditions: &[Condition],
) -> Manipulator
where
    I: IntoIterator<Item = K>,
    K: Into<InputKey>,
{
    let from = FromEvent::simultaneous(keys).with_simultaneous_options(SimultaneousOptions {
        key_down_order: Some(KeyOrder::Insensitive),
        key_up_when: Some(KeyUpWhen::Any),
        ..SimultaneousOptions::default()
    });
    Manipulator::new(from)
        .to(to)
        .when(conditions.iter().cloned())
        .with_parameters(Parameters {
            simultaneous_threshold_ms: Some(timing.simultaneous_threshold_ms),
            ..Parameters::default()
        })
}
