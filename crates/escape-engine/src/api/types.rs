use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    pub const ROOM: EntityId = EntityId(0);
    pub const PLAYER: EntityId = EntityId(1);
    pub const EXIT: EntityId = EntityId(2);
    /// Obstacles are numbered from here in store order.
    pub const FIRST_OBSTACLE: u32 = 3;

    pub fn obstacle(index: usize) -> Self {
        EntityId(Self::FIRST_OBSTACLE + index as u32)
    }
}

/// Game event kinds written into `GameEvent::kind`.
pub mod event_kind {
    /// A run began. `a` = 0.0 for start, 1.0 for restart.
    pub const STARTED: f32 = 1.0;
    /// The exit was reached. `a` = whole seconds, `b` = fractional seconds.
    pub const WON: f32 = 2.0;
}

/// A game event communicated from Rust to the UI layer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn started(restart: bool) -> Self {
        Self {
            kind: event_kind::STARTED,
            a: if restart { 1.0 } else { 0.0 },
            ..Self::default()
        }
    }

    pub fn won(elapsed_seconds: f64) -> Self {
        Self {
            kind: event_kind::WON,
            a: elapsed_seconds.floor() as f32,
            b: elapsed_seconds as f32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacle_ids_follow_fixed_ids() {
        assert_eq!(EntityId::obstacle(0), EntityId(3));
        assert_eq!(EntityId::obstacle(7), EntityId(10));
        assert_ne!(EntityId::obstacle(0), EntityId::EXIT);
    }

    #[test]
    fn won_event_floors_seconds() {
        let ev = GameEvent::won(12.93);
        assert_eq!(ev.kind, event_kind::WON);
        assert_eq!(ev.a, 12.0);
        assert!((ev.b - 12.93).abs() < 1e-4);
    }

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
