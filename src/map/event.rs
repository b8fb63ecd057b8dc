// src/map/event.rs

use log::warn;

/// Marker tag identifying the goal event on a generated map.
pub const GOAL_TAG: &str = "goal";

/// How an event's trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ActionButton,
    PlayerTouch,
    EventTouch,
    Autorun,
    Parallel,
}

/// An effect an event can run when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ends the current maze session as a success.
    MazeSuccess,
    /// Ends the current maze session as a failure.
    MazeFail,
}

/// Visual descriptor of a placeable event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub character_name: String,
    pub character_index: i32,
    pub tile_id: i32,
    pub direction: i32,
    pub pattern: i32,
}

impl Default for Appearance {
    fn default() -> Self {
        // Placeholder sprite used when no template event is available.
        Self {
            character_name: "Actor1".to_string(),
            character_index: 0,
            tile_id: 0,
            direction: 2,
            pattern: 0,
        }
    }
}

/// A placeable, triggerable map event. This is the in-memory shape the
/// host's event runner consumes; the maze core only ever builds one of
/// these per generated map (the goal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    pub id: usize,
    pub name: String,
    pub tag: String,
    pub x: i32,
    pub y: i32,
    pub appearance: Appearance,
    pub trigger: Trigger,
    pub through: bool,
    pub direction_fix: bool,
    /// Set by the host on the event currently engaging the player. The
    /// goal factory uses the first locked event as its visual template.
    pub locked: bool,
    pub actions: Vec<Action>,
}

impl EventSpec {
    /// A bare event with no appearance overrides and no actions.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tag: String::new(),
            x: 0,
            y: 0,
            appearance: Appearance::default(),
            trigger: Trigger::ActionButton,
            through: false,
            direction_fix: false,
            locked: false,
            actions: Vec::new(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.tag == GOAL_TAG
    }
}

/// Builds the goal event for a generated maze.
///
/// When a template is supplied (by convention, the event that invoked maze
/// mode), its appearance carries over so the goal looks like the caller.
/// Without one, a placeholder appearance is used and a warning is logged;
/// generation proceeds either way. The trigger configuration is fixed
/// regardless of template: solid, player-touch, facing locked, and a single
/// success-signal action. Position is assigned later by the map loader.
pub fn build_goal_event(template: Option<&EventSpec>) -> EventSpec {
    let mut event = match template {
        Some(template) => {
            let mut event = template.clone();
            event.appearance.direction = 2;
            event
        }
        None => {
            warn!("no template event found, building goal with placeholder appearance");
            EventSpec::new(0, "EV001")
        }
    };
    event.id = 1;
    event.tag = GOAL_TAG.to_string();
    event.through = false;
    event.trigger = Trigger::PlayerTouch;
    event.direction_fix = true;
    event.locked = false;
    event.actions = vec![Action::MazeSuccess];
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_goal_event() {
        let goal = build_goal_event(None);
        assert_eq!(goal.id, 1);
        assert!(goal.is_goal());
        assert_eq!(goal.appearance.character_name, "Actor1");
        assert_eq!(goal.trigger, Trigger::PlayerTouch);
        assert!(!goal.through);
        assert!(goal.direction_fix);
        assert_eq!(goal.actions, vec![Action::MazeSuccess]);
    }

    #[test]
    fn test_goal_event_borrows_template_appearance() {
        let mut template = EventSpec::new(7, "Gatekeeper");
        template.appearance.character_name = "Monster2".to_string();
        template.appearance.character_index = 3;
        template.through = true;
        template.trigger = Trigger::Autorun;
        template.locked = true;
        template.actions = vec![Action::MazeFail];

        let goal = build_goal_event(Some(&template));
        assert_eq!(goal.appearance.character_name, "Monster2");
        assert_eq!(goal.appearance.character_index, 3);
        // Behaviour is overridden even when appearance is borrowed.
        assert_eq!(goal.id, 1);
        assert!(!goal.through);
        assert!(!goal.locked);
        assert_eq!(goal.trigger, Trigger::PlayerTouch);
        assert_eq!(goal.actions, vec![Action::MazeSuccess]);
        // The template itself is untouched.
        assert_eq!(template.id, 7);
        assert_eq!(template.actions, vec![Action::MazeFail]);
    }
}
