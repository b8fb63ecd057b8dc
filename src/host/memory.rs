// src/host/memory.rs

use std::collections::HashMap;

use crate::host::{
    EventContext, FadeType, MapLoader, PlayerPosition, PlayerStore, SceneHost, SceneKind,
};
use crate::map::{EventSpec, MapDocument, MapError};

/// Scene host that just records the current scene.
#[derive(Debug)]
pub struct MemoryScene {
    current: SceneKind,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self {
            current: SceneKind::Map,
        }
    }
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneHost for MemoryScene {
    fn switch_scene(&mut self, scene: SceneKind) {
        self.current = scene;
    }

    fn current_scene(&self) -> SceneKind {
        self.current
    }
}

/// Player store that applies transfers immediately and remembers the last
/// one, so tests can assert on restores.
#[derive(Debug)]
pub struct MemoryPlayer {
    position: PlayerPosition,
    pub last_transfer: Option<(PlayerPosition, FadeType)>,
}

impl MemoryPlayer {
    pub fn new(position: PlayerPosition) -> Self {
        Self {
            position,
            last_transfer: None,
        }
    }
}

impl PlayerStore for MemoryPlayer {
    fn position(&self) -> PlayerPosition {
        self.position
    }

    fn reserve_transfer(&mut self, map_id: i32, x: i32, y: i32, facing: i32, fade: FadeType) {
        self.position = PlayerPosition {
            map_id,
            x,
            y,
            facing,
        };
        self.last_transfer = Some((self.position, fade));
    }
}

/// Map store over a fixed set of documents.
#[derive(Debug, Default)]
pub struct MemoryMapLoader {
    maps: HashMap<i32, MapDocument>,
}

impl MemoryMapLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, map_id: i32, doc: MapDocument) {
        let _ = self.maps.insert(map_id, doc);
    }
}

impl MapLoader for MemoryMapLoader {
    fn load_map(&mut self, map_id: i32) -> Result<MapDocument, MapError> {
        self.maps
            .get(&map_id)
            .cloned()
            .ok_or(MapError::NotFound(map_id))
    }
}

/// Event context over a plain event list.
#[derive(Debug, Default)]
pub struct MemoryEvents {
    pub events: Vec<Option<EventSpec>>,
}

impl MemoryEvents {
    pub fn new(events: Vec<Option<EventSpec>>) -> Self {
        Self { events }
    }
}

impl EventContext for MemoryEvents {
    fn invoking_event(&self) -> Option<EventSpec> {
        self.events
            .iter()
            .flatten()
            .find(|event| event.locked)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_loader_not_found() {
        let mut loader = MemoryMapLoader::new();
        assert!(matches!(loader.load_map(3), Err(MapError::NotFound(3))));
        loader.insert(3, MapDocument::new(4, 4, 1));
        assert!(loader.load_map(3).is_ok());
    }

    #[test]
    fn test_invoking_event_is_first_locked() {
        let mut first = EventSpec::new(1, "a");
        let mut second = EventSpec::new(2, "b");
        second.locked = true;
        let mut third = EventSpec::new(3, "c");
        third.locked = true;
        first.locked = false;
        let events = MemoryEvents::new(vec![None, Some(first), Some(second), Some(third)]);
        assert_eq!(events.invoking_event().map(|e| e.id), Some(2));
    }

    #[test]
    fn test_player_transfer_applies() {
        let mut player = MemoryPlayer::new(PlayerPosition {
            map_id: 1,
            x: 0,
            y: 0,
            facing: 2,
        });
        player.reserve_transfer(4, 6, 6, 8, FadeType::None);
        assert_eq!(player.position().map_id, 4);
        assert_eq!(player.position().facing, 8);
    }
}
