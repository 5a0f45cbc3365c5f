//! Auto-closing brackets and quotes in text editors.
//!
//! Typing an opening character emits the pair and moves the cursor back
//! between them.  Holding `fn` types the single character instead; those
//! passthrough manipulators live in a separate rule that is listed first so
//! they win.

use hyper_core::keymap::{KeyCode, Modifier};
use hyper_core::layers::frontmost_app_if;
use hyper_core::{Condition, FromEvent, Manipulator, Rule, ToEvent};

use super::TEXT_EDITOR_IDS;

/// One auto-closed pair: the opening key stroke and the closing key stroke.
struct Pair {
    open: KeyCode,
    open_mods: &'static [Modifier],
    close: KeyCode,
    close_mods: &'static [Modifier],
}

const SHIFT: &[Modifier] = &[Modifier::Shift];
const OPTION: &[Modifier] = &[Modifier::Option];
const OPTION_SHIFT: &[Modifier] = &[Modifier::Option, Modifier::Shift];

/// `()`, `''`, `""`, ``` `` ```, `[]`, `{}`, `“”`, `‘’`, `<>` on a US layout.
const PAIRS: &[Pair] = &[
    Pair { open: KeyCode::Digit9, open_mods: SHIFT, close: KeyCode::Digit0, close_mods: SHIFT },
    Pair { open: KeyCode::Quote, open_mods: &[], close: KeyCode::Quote, close_mods: &[] },
    Pair { open: KeyCode::Quote, open_mods: SHIFT, close: KeyCode::Quote, close_mods: SHIFT },
    Pair {
        open: KeyCode::GraveAccentAndTilde,
        open_mods: &[],
        close: KeyCode::GraveAccentAndTilde,
        close_mods: &[],
    },
    Pair { open: KeyCode::OpenBracket, open_mods: &[], close: KeyCode::CloseBracket, close_mods: &[] },
    Pair {
        open: KeyCode::OpenBracket,
        open_mods: SHIFT,
        close: KeyCode::CloseBracket,
        close_mods: SHIFT,
    },
    Pair {
        open: KeyCode::OpenBracket,
        open_mods: OPTION,
        close: KeyCode::OpenBracket,
        close_mods: OPTION_SHIFT,
    },
    Pair {
        open: KeyCode::CloseBracket,
        open_mods: OPTION,
        close: KeyCode::CloseBracket,
        close_mods: OPTION_SHIFT,
    },
    Pair { open: KeyCode::Comma, open_mods: SHIFT, close: KeyCode::Period, close_mods: SHIFT },
];

fn in_editor() -> Condition {
    frontmost_app_if(TEXT_EDITOR_IDS.iter().copied())
}

/// With `fn` held, type the opening character alone.
fn passthrough(pair: &Pair) -> Manipulator {
    let from = FromEvent::new(pair.open)
        .mandatory(std::iter::once(Modifier::Fn).chain(pair.open_mods.iter().copied()));
    Manipulator::new(from)
        .to([ToEvent::key_with(pair.open, pair.open_mods.iter().copied())])
        .when([in_editor()])
}

/// Type the pair and step back between the two characters.
fn auto_close(pair: &Pair) -> Manipulator {
    let from = if pair.open_mods.is_empty() {
        FromEvent::new(pair.open)
    } else {
        FromEvent::new(pair.open).mandatory(pair.open_mods.iter().copied())
    };
    Manipulator::new(from)
        .to([
            ToEvent::key_with(pair.open, pair.open_mods.iter().copied()),
            ToEvent::key_with(pair.close, pair.close_mods.iter().copied()),
            ToEvent::key(KeyCode::LeftArrow),
        ])
        .when([in_editor()])
}

/// The two auto-quote rules, passthrough first.
pub fn auto_quotes_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "(1/2) Do not auto close brackets & quotes when holding fn",
            PAIRS.iter().map(passthrough).collect(),
        ),
        Rule::new(
            "(2/2) Auto close brackets & quotes ( (), '', \"\", ``, [], {}, “”, ‘’, <> )",
            PAIRS.iter().map(auto_close).collect(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_rules_with_one_manipulator_per_pair() {
        let rules = auto_quotes_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].manipulators.len(), PAIRS.len());
        assert_eq!(rules[1].manipulators.len(), PAIRS.len());
    }

    #[test]
    fn test_passthrough_requires_fn_before_pair_modifiers() {
        // Arrange
        let rules = auto_quotes_rules();

        // Act: first pair is shift+9 → "("
        let value = serde_json::to_value(&rules[0].manipulators[0]).unwrap();

        // Assert
        assert_eq!(
            value["from"],
            json!({ "key_code": "9", "modifiers": { "mandatory": ["fn", "shift"] } })
        );
        assert_eq!(value["to"], json!([{ "key_code": "9", "modifiers": ["shift"] }]));
    }

    #[test]
    fn test_plain_quote_auto_close_has_no_from_modifiers() {
        let rules = auto_quotes_rules();
        let value = serde_json::to_value(&rules[1].manipulators[1]).unwrap();
        assert_eq!(value["from"], json!({ "key_code": "quote" }));
        assert_eq!(
            value["to"],
            json!([
                { "key_code": "quote" },
                { "key_code": "quote" },
                { "key_code": "left_arrow" }
            ])
        );
    }

    #[test]
    fn test_option_bracket_closes_with_option_shift() {
        let rules = auto_quotes_rules();
        let value = serde_json::to_value(&rules[1].manipulators[6]).unwrap();
        assert_eq!(
            value["to"][1],
            json!({ "key_code": "open_bracket", "modifiers": ["option", "shift"] })
        );
    }

    #[test]
    fn test_every_manipulator_is_limited_to_editors() {
        for rule in auto_quotes_rules() {
            for m in &rule.manipulators {
                assert_eq!(m.conditions, vec![in_editor()]);
            }
        }
    }
}
