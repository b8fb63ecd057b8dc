// src/command/mod.rs
//
// Textual command surface: `Maze on|off|toggle|map|generate|success|fail`
// with positional arguments, as dispatched by host event scripts.

use crate::host::{PlayerStore, SceneHost};
use crate::session::{MazeMode, MazeSessionController, Outcome, Permissions};

/// Command word the host dispatcher routes here.
pub const COMMAND: &str = "Maze";

/// A parsed maze command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCommand {
    On(Permissions),
    Off,
    Toggle(Permissions),
    Map {
        map_id: i32,
        x: i32,
        y: i32,
        facing: i32,
        permissions: Permissions,
    },
    Generate {
        size: usize,
        permissions: Permissions,
    },
    Success,
    Fail,
}

/// An explicit `"false"` disables a flag; anything else, including an
/// absent argument, enables it.
fn flag(arg: Option<&str>) -> bool {
    arg != Some("false")
}

fn permissions(retry: Option<&str>, quit: Option<&str>) -> Permissions {
    Permissions {
        can_retry: flag(retry),
        can_quit: flag(quit),
    }
}

/// Permissive numeric parse: a malformed argument degrades to 0, an id no
/// map store resolves, so the failure surfaces in the map loader rather
/// than here.
fn number(arg: Option<&str>) -> i32 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl MazeCommand {
    /// Parses the argument list following the `Maze` command word.
    /// Returns `None` for an unknown or missing subcommand.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let arg = |i: usize| args.get(i).map(|s| s.as_ref());
        match arg(0)? {
            "on" => Some(Self::On(permissions(arg(1), arg(2)))),
            "off" => Some(Self::Off),
            "toggle" => Some(Self::Toggle(permissions(arg(1), arg(2)))),
            "map" => Some(Self::Map {
                map_id: number(arg(1)),
                x: number(arg(2)),
                y: number(arg(3)),
                facing: number(arg(4)),
                permissions: permissions(arg(5), arg(6)),
            }),
            "generate" => Some(Self::Generate {
                size: number(arg(1)).max(0) as usize,
                permissions: permissions(arg(2), arg(3)),
            }),
            "success" => Some(Self::Success),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

/// Applies a parsed command to the session controller.
pub fn dispatch<S: SceneHost, P: PlayerStore>(
    command: MazeCommand,
    controller: &mut MazeSessionController<S, P>,
) {
    match command {
        MazeCommand::On(permissions) => controller.enter(MazeMode::Reskin, permissions),
        MazeCommand::Off => {
            let _ = controller.exit(Outcome::Unresolved);
        }
        MazeCommand::Toggle(permissions) => controller.toggle(MazeMode::Reskin, permissions),
        MazeCommand::Map {
            map_id,
            x,
            y,
            facing,
            permissions,
        } => controller.enter(
            MazeMode::LoadMap {
                map_id,
                x,
                y,
                facing,
            },
            permissions,
        ),
        MazeCommand::Generate { size, permissions } => {
            controller.enter(MazeMode::Generate { size }, permissions)
        }
        MazeCommand::Success => {
            let _ = controller.exit(Outcome::Success);
        }
        MazeCommand::Fail => {
            let _ = controller.exit(Outcome::Failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenSettings;
    use crate::host::{MemoryPlayer, MemoryScene, PlayerPosition};
    use crate::session::ClearFlag;

    #[test]
    fn test_parse_on_with_flags() {
        // "Maze on false true" disables retry but keeps quit.
        let cmd = MazeCommand::parse(&["on", "false", "true"]).unwrap();
        assert_eq!(
            cmd,
            MazeCommand::On(Permissions {
                can_retry: false,
                can_quit: true,
            })
        );
    }

    #[test]
    fn test_absent_flags_enable() {
        match MazeCommand::parse(&["generate", "8"]).unwrap() {
            MazeCommand::Generate { size, permissions } => {
                assert_eq!(size, 8);
                assert!(permissions.can_retry);
                assert!(permissions.can_quit);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_non_false_flag_enables() {
        // Anything that is not the literal "false" counts as enabled.
        let cmd = MazeCommand::parse(&["toggle", "no", "0"]).unwrap();
        assert_eq!(cmd, MazeCommand::Toggle(Permissions::default()));
    }

    #[test]
    fn test_parse_map() {
        let cmd = MazeCommand::parse(&["map", "2", "10", "15", "6"]).unwrap();
        assert_eq!(
            cmd,
            MazeCommand::Map {
                map_id: 2,
                x: 10,
                y: 15,
                facing: 6,
                permissions: Permissions::default(),
            }
        );
    }

    #[test]
    fn test_malformed_numbers_degrade_to_zero() {
        let cmd = MazeCommand::parse(&["map", "two", "x", "15", "6"]).unwrap();
        match cmd {
            MazeCommand::Map { map_id, x, y, .. } => {
                assert_eq!(map_id, 0);
                assert_eq!(x, 0);
                assert_eq!(y, 15);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_subcommand() {
        assert_eq!(MazeCommand::parse(&["explode"]), None);
        assert_eq!(MazeCommand::parse::<&str>(&[]), None);
    }

    fn controller() -> MazeSessionController<MemoryScene, MemoryPlayer> {
        MazeSessionController::new(
            MemoryScene::new(),
            MemoryPlayer::new(PlayerPosition {
                map_id: 1,
                x: 2,
                y: 3,
                facing: 2,
            }),
            GenSettings::new(),
            ClearFlag::new(),
        )
    }

    #[test]
    fn test_dispatch_generate_then_success() {
        let mut ctl = controller();
        dispatch(MazeCommand::parse(&["generate", "6"]).unwrap(), &mut ctl);
        assert!(ctl.is_active());
        assert!(ctl.session().unwrap().is_generated());

        dispatch(MazeCommand::Success, &mut ctl);
        assert!(!ctl.is_active());
        assert!(ctl.clear_flag().get());
    }

    #[test]
    fn test_dispatch_off_is_bare_exit() {
        let mut ctl = controller();
        dispatch(MazeCommand::parse(&["on"]).unwrap(), &mut ctl);
        dispatch(MazeCommand::Off, &mut ctl);
        assert!(!ctl.is_active());
        assert!(!ctl.clear_flag().get());
    }

    #[test]
    fn test_dispatch_map_enters_loaded_session() {
        let mut ctl = controller();
        dispatch(
            MazeCommand::parse(&["map", "2", "10", "15", "6"]).unwrap(),
            &mut ctl,
        );
        assert!(ctl.is_active());
        let session = ctl.session().unwrap();
        assert!(!session.is_generated());
        assert!(session.restores_on_exit());
        // Return location is where the player stood before the command.
        assert_eq!(session.return_location.map_id, 1);
        assert_eq!((session.return_location.x, session.return_location.y), (2, 3));
    }
}
