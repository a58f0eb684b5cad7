use std::fmt;

/// Logical keyboard key, reduced to what the navigation layer consumes.
///
/// `Char` carries the character exactly as the active keymap produced it,
/// so `Shift`+`a` arrives as `'A'` and stays distinct from `'a'`. Every
/// non-printing key (arrows, function keys, modifiers) collapses into
/// `Other`: the viewer binds none of them, and collapsing keeps the
/// command table closed over a handful of characters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Char(char),
    Other,
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// True when a chording modifier is held.
    ///
    /// Shift is not part of this set: shifted presses already surface as
    /// their shifted character in [`Key::Char`], so the command table
    /// resolves them by case instead of by flag.
    pub fn chorded(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
