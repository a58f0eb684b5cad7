use super::types::Modifiers;

/// Current keyboard context for the viewer window.
///
/// winit reports modifier changes separately from key presses, so the
/// runtime records the latest `ModifiersChanged` here and samples it when
/// a press arrives.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,
}

impl InputState {
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Release events are not delivered while unfocused; a ctrl held
            // across a focus switch would otherwise stick and swallow
            // navigation until the next ModifiersChanged.
            self.modifiers = Modifiers::default();
        }
    }
}
