// src/session/mod.rs

pub mod controller;

pub use controller::MazeSessionController;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::host::PlayerPosition;

/// Smallest allowed generation size; requests below it are clamped up.
pub const MIN_GEN_SIZE: usize = 4;

/// How a maze session is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeMode {
    /// Reskin the current map in place; events keep running.
    Reskin,
    /// Load an existing map and treat it as a maze minigame.
    LoadMap {
        map_id: i32,
        x: i32,
        y: i32,
        facing: i32,
    },
    /// Generate a random maze of `size` logical cells per side.
    Generate { size: usize },
}

/// What kind of session is active, remembered so `exit` knows whether the
/// player needs to travel back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Reskin,
    Loaded,
    Generated,
}

/// Pause-menu permissions for the session. Absence of an explicit opt-out
/// means enabled, so the default is all-true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub can_retry: bool,
    pub can_quit: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            can_retry: true,
            can_quit: true,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Session still running, or ended by a bare scene switch.
    Unresolved,
    Success,
    Failure,
}

/// One active traversal of maze mode, created on `enter` and destroyed on
/// `exit`. The return location is captured at entry and never changes.
#[derive(Debug, Clone)]
pub struct MazeSession {
    pub return_location: PlayerPosition,
    pub kind: SessionKind,
    pub permissions: Permissions,
    pub outcome: Outcome,
}

impl MazeSession {
    pub fn is_generated(&self) -> bool {
        self.kind == SessionKind::Generated
    }

    /// Reskin sessions never moved the player, so only loaded and
    /// generated sessions travel back on a resolved exit.
    pub fn restores_on_exit(&self) -> bool {
        self.kind != SessionKind::Reskin
    }
}

/// Process-wide mirror of the last resolved maze outcome, readable by
/// arbitrary host scripts. Written only by the controller's `exit`.
/// Cloning shares the underlying flag.
#[derive(Debug, Clone, Default)]
pub struct ClearFlag {
    cleared: Arc<RwLock<bool>>,
}

impl ClearFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        *self.cleared.read()
    }

    pub(crate) fn set(&self, cleared: bool) {
        *self.cleared.write() = cleared;
    }
}
