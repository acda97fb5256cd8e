use paddleball_common::key::Key;

/// Held directional state, rebuilt from key transitions and sampled once
/// per frame before the paddles advance.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Apply a key transition to the held state.
    pub fn apply(&mut self, key: Key, is_down: bool) {
        match key {
            Key::A | Key::Left => self.left = is_down,
            Key::D | Key::Right => self.right = is_down,
            _ => {}
        }
    }
}

/// Discrete one-shot actions derived from key presses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Press {
    Pause,
    Confirm,
    Back,
    MenuUp,
    MenuDown,
}

/// Map a key-down event to a discrete action, if it has one.
pub fn press_for_key(key: Key) -> Option<Press> {
    match key {
        Key::P => Some(Press::Pause),
        Key::Space | Key::Return => Some(Press::Confirm),
        Key::Escape => Some(Press::Back),
        Key::W | Key::Up => Some(Press::MenuUp),
        Key::S | Key::Down => Some(Press::MenuDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_both_drive_the_held_state() {
        let mut input = InputState::default();
        input.apply(Key::A, true);
        assert!(input.left);
        input.apply(Key::A, false);
        assert!(!input.left);
        input.apply(Key::Right, true);
        assert!(input.right);
    }

    #[test]
    fn discrete_presses_map_to_actions() {
        assert_eq!(press_for_key(Key::P), Some(Press::Pause));
        assert_eq!(press_for_key(Key::Return), Some(Press::Confirm));
        assert_eq!(press_for_key(Key::Escape), Some(Press::Back));
        assert_eq!(press_for_key(Key::D), None);
    }
}
