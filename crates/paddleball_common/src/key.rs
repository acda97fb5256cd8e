/// Logical key set shared between the frontend and the game.
///
/// The frontend maps physical keycodes onto this set so the game never sees
/// raw device details. `None` stands for any key we do not care about.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    P,
    Up,
    Down,
    Left,
    Right,
    Space,
    Return,
    Escape,
    None,
}
