// src/map/loader.rs

use log::info;
use rand::seq::IndexedRandom;

use crate::config::{GenSettings, MazeConfig};
use crate::host::{EventContext, MapLoader};
use crate::map::{build_goal_event, MapDocument, MapError};
use crate::maze::generate;

/// Sentinel map id that requests a generated maze instead of stored data.
pub const GENERATED_MAP_ID: i32 = -1;

/// Map loader that composes over the host's loader: the sentinel id is
/// turned into a freshly generated maze map, anything else passes through
/// to `inner` untouched.
///
/// The generation size arrives out of band via [`GenSettings`], written by
/// the session controller when a `Generate` session is entered.
pub struct MazeMapLoader<L: MapLoader, E: EventContext> {
    inner: L,
    events: E,
    settings: GenSettings,
    config: MazeConfig,
}

impl<L: MapLoader, E: EventContext> MazeMapLoader<L, E> {
    pub fn new(inner: L, events: E, settings: GenSettings, config: MazeConfig) -> Self {
        Self {
            inner,
            events,
            settings,
            config,
        }
    }

    fn build_generated(&mut self) -> Result<MapDocument, MapError> {
        let size = self.settings.size();
        let mut rng = rand::rng();
        let maze = generate(size, &mut rng);

        let goal_pos = maze
            .goal_candidates
            .choose(&mut rng)
            .copied()
            .ok_or(MapError::NoGoalCandidates { size })?;

        let template = self.events.invoking_event();
        let mut goal = build_goal_event(template.as_ref());
        goal.x = goal_pos.x as i32;
        goal.y = goal_pos.y as i32;

        info!(
            "materialized generated maze map: {}x{}, goal at ({}, {})",
            maze.grid.width(),
            maze.grid.height(),
            goal.x,
            goal.y
        );
        Ok(MapDocument::from_maze(&maze, goal, &self.config))
    }
}

impl<L: MapLoader, E: EventContext> MapLoader for MazeMapLoader<L, E> {
    fn load_map(&mut self, map_id: i32) -> Result<MapDocument, MapError> {
        if map_id == GENERATED_MAP_ID {
            self.build_generated()
        } else {
            self.inner.load_map(map_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryEvents, MemoryMapLoader};
    use crate::map::{EventSpec, Trigger};

    fn loader(size: usize, events: Vec<Option<EventSpec>>) -> MazeMapLoader<MemoryMapLoader, MemoryEvents> {
        let settings = GenSettings::new();
        settings.set_size(size);
        MazeMapLoader::new(
            MemoryMapLoader::new(),
            MemoryEvents::new(events),
            settings,
            MazeConfig::default(),
        )
    }

    #[test]
    fn test_sentinel_id_generates_map() {
        let mut loader = loader(6, Vec::new());
        let doc = loader.load_map(GENERATED_MAP_ID).unwrap();
        assert_eq!(doc.width, 12);
        assert_eq!(doc.height, 12);

        let goal = doc.goal_event().expect("goal event missing");
        assert_eq!(goal.trigger, Trigger::PlayerTouch);
        let pos = doc.goal_position().unwrap();
        // Goal sits on a floor tile away from the entrance.
        assert_eq!(doc.tile(pos.x, pos.y), MazeConfig::default().gen_floor);
        let entrance = ((6 / 2) * 2, (6 / 2) * 2);
        assert_ne!((pos.x, pos.y), entrance);
    }

    #[test]
    fn test_goal_borrows_invoking_event_appearance() {
        let mut template = EventSpec::new(4, "Caller");
        template.locked = true;
        template.appearance.character_name = "People1".to_string();
        let mut loader = loader(5, vec![None, Some(template)]);
        let doc = loader.load_map(GENERATED_MAP_ID).unwrap();
        let goal = doc.goal_event().unwrap();
        assert_eq!(goal.appearance.character_name, "People1");
    }

    #[test]
    fn test_other_ids_delegate_to_inner_loader() {
        let mut loader = loader(6, Vec::new());
        assert!(matches!(loader.load_map(2), Err(MapError::NotFound(2))));
    }

    #[test]
    fn test_exactly_one_goal_per_generated_map() {
        let mut loader = loader(8, Vec::new());
        for _ in 0..16 {
            let doc = loader.load_map(GENERATED_MAP_ID).unwrap();
            let goals = doc.events.iter().flatten().filter(|e| e.is_goal()).count();
            assert_eq!(goals, 1);
        }
    }
}
