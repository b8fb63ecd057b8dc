// src/session/controller.rs

use log::{debug, info};

use crate::config::GenSettings;
use crate::host::{FadeType, PlayerStore, SceneHost, SceneKind};
use crate::map::GENERATED_MAP_ID;
use crate::session::{
    ClearFlag, MazeMode, MazeSession, Outcome, Permissions, SessionKind, MIN_GEN_SIZE,
};

/// Facing assigned to the player on a generated map's entrance (down).
const ENTRANCE_FACING: i32 = 2;

/// Owns the maze session lifecycle: entering maze mode, remembering where
/// the player came from, and restoring that location when the session
/// resolves. At most one session exists at a time; a second `enter` is a
/// silent no-op.
///
/// The controller never runs the generator itself. For `Generate` entries
/// it publishes the requested size through the shared [`GenSettings`] and
/// reserves a transfer to the sentinel map id; the map loader does the
/// rest once the host materializes the map.
pub struct MazeSessionController<S: SceneHost, P: PlayerStore> {
    scene: S,
    player: P,
    settings: GenSettings,
    clear_flag: ClearFlag,
    session: Option<MazeSession>,
}

impl<S: SceneHost, P: PlayerStore> MazeSessionController<S, P> {
    pub fn new(scene: S, player: P, settings: GenSettings, clear_flag: ClearFlag) -> Self {
        Self {
            scene,
            player,
            settings,
            clear_flag,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&MazeSession> {
        self.session.as_ref()
    }

    /// Handle to the clear flag, for host scripts that poll it.
    pub fn clear_flag(&self) -> ClearFlag {
        self.clear_flag.clone()
    }

    /// Enters maze mode. Captures the current player location for the trip
    /// back, stores `permissions`, and switches the scene. Ignored while a
    /// session is already active.
    pub fn enter(&mut self, mode: MazeMode, permissions: Permissions) {
        if self.session.is_some() || self.scene.current_scene() == SceneKind::Maze {
            debug!("enter ignored: maze session already active");
            return;
        }

        let return_location = self.player.position();
        let kind = match mode {
            MazeMode::Reskin => SessionKind::Reskin,
            MazeMode::LoadMap {
                map_id,
                x,
                y,
                facing,
            } => {
                self.player
                    .reserve_transfer(map_id, x, y, facing, FadeType::None);
                SessionKind::Loaded
            }
            MazeMode::Generate { size } => {
                let size = size.max(MIN_GEN_SIZE);
                self.settings.set_size(size);
                let entrance = ((size / 2) * 2) as i32;
                self.player.reserve_transfer(
                    GENERATED_MAP_ID,
                    entrance,
                    entrance,
                    ENTRANCE_FACING,
                    FadeType::None,
                );
                SessionKind::Generated
            }
        };

        info!("entering maze mode ({:?})", kind);
        self.session = Some(MazeSession {
            return_location,
            kind,
            permissions,
            outcome: Outcome::Unresolved,
        });
        self.scene.switch_scene(SceneKind::Maze);
    }

    /// Leaves maze mode, resolving the session to `outcome`. A resolved
    /// outcome is mirrored into the clear flag and, for loaded and
    /// generated sessions, sends the player back to the captured return
    /// location. `Outcome::Unresolved` is the bare scene switch used by
    /// `off`/`toggle`: the flag keeps its previous value and the player
    /// stays put. Returns `None` (and does nothing) when no session is
    /// active.
    pub fn exit(&mut self, outcome: Outcome) -> Option<Outcome> {
        let mut session = self.session.take()?;
        session.outcome = outcome;

        if outcome != Outcome::Unresolved {
            self.clear_flag.set(outcome == Outcome::Success);
            if session.restores_on_exit() {
                let loc = session.return_location;
                self.player
                    .reserve_transfer(loc.map_id, loc.x, loc.y, loc.facing, FadeType::None);
            }
        }

        info!("leaving maze mode ({:?})", outcome);
        self.scene.switch_scene(SceneKind::Map);
        Some(outcome)
    }

    /// Exits with a bare scene switch when a session is active, enters
    /// otherwise.
    pub fn toggle(&mut self, mode: MazeMode, permissions: Permissions) {
        if self.is_active() {
            let _ = self.exit(Outcome::Unresolved);
        } else {
            self.enter(mode, permissions);
        }
    }
}
