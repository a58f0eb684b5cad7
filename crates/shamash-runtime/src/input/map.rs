//! Key-press to navigation-command mapping.

use crate::engine::Motion;

use super::types::{Key, Modifiers};

/// Maps one key press to a camera motion, or `None` when the press is not
/// a navigation command.
///
/// Chorded presses (ctrl/alt/meta held) never map, even when the base key
/// is bound; those combinations stay with the platform (`Ctrl+S` must not
/// move the camera). The table is case-sensitive and deliberately small:
///
/// | keys      | motion  |
/// |-----------|---------|
/// | `a`, `h`  | left    |
/// | `d`, `l`  | right   |
/// | `j`       | down    |
/// | `k`       | up      |
/// | `w`       | forward |
/// | `s`       | back    |
///
/// This is a pure function of its arguments; all statefulness (current
/// modifiers, focus) lives with the caller.
pub fn command_for(key: Key, modifiers: Modifiers) -> Option<Motion> {
    if modifiers.chorded() {
        return None;
    }

    match key {
        Key::Char('a' | 'h') => Some(Motion::Left),
        Key::Char('d' | 'l') => Some(Motion::Right),
        Key::Char('j') => Some(Motion::Down),
        Key::Char('k') => Some(Motion::Up),
        Key::Char('w') => Some(Motion::Forward),
        Key::Char('s') => Some(Motion::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Modifiers {
        Modifiers::default()
    }

    fn ctrl() -> Modifiers {
        Modifiers { ctrl: true, ..Modifiers::default() }
    }

    fn alt() -> Modifiers {
        Modifiers { alt: true, ..Modifiers::default() }
    }

    fn meta() -> Modifiers {
        Modifiers { meta: true, ..Modifiers::default() }
    }

    // ── the table ─────────────────────────────────────────────────────────

    #[test]
    fn every_bound_key_maps() {
        let table = [
            ('a', Motion::Left),
            ('h', Motion::Left),
            ('d', Motion::Right),
            ('l', Motion::Right),
            ('j', Motion::Down),
            ('k', Motion::Up),
            ('w', Motion::Forward),
            ('s', Motion::Back),
        ];
        for (ch, motion) in table {
            assert_eq!(command_for(Key::Char(ch), plain()), Some(motion), "key {ch:?}");
        }
    }

    #[test]
    fn unbound_characters_do_not_map() {
        for ch in ['x', 'q', 'e', ' ', '1', ';'] {
            assert_eq!(command_for(Key::Char(ch), plain()), None, "key {ch:?}");
        }
        // Modifier state makes no difference to an unbound key.
        assert_eq!(command_for(Key::Char('x'), ctrl()), None);
    }

    #[test]
    fn table_is_case_sensitive() {
        // Uppercase is what a shifted press delivers; none of it is bound.
        for ch in ['A', 'H', 'D', 'L', 'J', 'K', 'W', 'S'] {
            assert_eq!(command_for(Key::Char(ch), plain()), None, "key {ch:?}");
        }
    }

    #[test]
    fn non_character_keys_do_not_map() {
        assert_eq!(command_for(Key::Other, plain()), None);
        assert_eq!(command_for(Key::Other, ctrl()), None);
    }

    // ── modifiers ─────────────────────────────────────────────────────────

    #[test]
    fn chorded_presses_are_reserved() {
        for mods in [ctrl(), alt(), meta()] {
            for ch in ['a', 'h', 'd', 'l', 'j', 'k', 'w', 's'] {
                assert_eq!(command_for(Key::Char(ch), mods), None, "key {ch:?} with {mods:?}");
            }
        }
    }

    #[test]
    fn ctrl_s_is_not_a_command() {
        // The classic save chord must reach the platform untouched.
        assert_eq!(command_for(Key::Char('s'), ctrl()), None);
    }

    #[test]
    fn combined_chords_are_reserved() {
        let all = Modifiers { shift: true, ctrl: true, alt: true, meta: true };
        assert_eq!(command_for(Key::Char('w'), all), None);
    }

    #[test]
    fn shift_alone_is_not_a_chord() {
        // Shift resolves through the character's case: a lowercase 'a' with
        // the shift flag raised (caps-lock plus shift) still means left.
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        assert_eq!(command_for(Key::Char('a'), shift), Some(Motion::Left));
        assert_eq!(command_for(Key::Char('A'), shift), None);
    }
}
