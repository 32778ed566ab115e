/// One of the four held movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Semantic key the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    Jump,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to a key. Arrows and WASD share directions.
    pub fn from_code(code: &str) -> Option<Key> {
        let key = match code {
            "ArrowUp" | "KeyW" => Key::Move(Direction::Forward),
            "ArrowDown" | "KeyS" => Key::Move(Direction::Backward),
            "ArrowLeft" | "KeyA" => Key::Move(Direction::Left),
            "ArrowRight" | "KeyD" => Key::Move(Direction::Right),
            "Space" => Key::Jump,
            _ => return None,
        };
        Some(key)
    }
}
