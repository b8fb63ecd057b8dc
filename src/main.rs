//! # Mazekit Demo Entry Point
//!
//! Runs a maze command against the in-memory host and prints the resulting
//! generated map as ASCII (`#` wall, space floor, `@` entrance, `*` goal).
//! This is a workbench for the library, not part of the engine integration:
//! real hosts wire `MazeSessionController` and `MazeMapLoader` onto their
//! own scene, player, and map stores.
//!
//! ```text
//! mazekit generate 8
//! mazekit generate 12 false
//! ```
//!
//! Tile ids can be overridden by pointing `MAZEKIT_CONFIG` at a JSON file
//! with `gen_floor` / `gen_wall` / `gen_tileset_id` fields.

use std::env;
use std::error::Error;
use std::fs;

use log::info;

use mazekit::command::{dispatch, MazeCommand};
use mazekit::config::{GenSettings, MazeConfig};
use mazekit::host::{
    MapLoader, MemoryEvents, MemoryMapLoader, MemoryPlayer, MemoryScene, PlayerPosition,
};
use mazekit::map::{MazeMapLoader, GENERATED_MAP_ID};
use mazekit::session::{ClearFlag, MazeSessionController, Permissions};

fn load_config() -> Result<MazeConfig, Box<dyn Error>> {
    match env::var("MAZEKIT_CONFIG") {
        Ok(path) => {
            let json = fs::read_to_string(&path)?;
            Ok(MazeConfig::from_json(&json)?)
        }
        Err(_) => Ok(MazeConfig::default()),
    }
}

fn render(doc: &mazekit::map::MapDocument, config: &MazeConfig, entrance: (usize, usize)) {
    let goal = doc.goal_position();
    for y in 0..doc.height {
        let mut line = String::with_capacity(doc.width);
        for x in 0..doc.width {
            let glyph = if (x, y) == entrance {
                '@'
            } else if goal.is_some_and(|g| (g.x, g.y) == (x, y)) {
                '*'
            } else if doc.tile(x, y) == config.gen_floor {
                ' '
            } else {
                '#'
            };
            line.push(glyph);
        }
        println!("{}", line);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = if args.is_empty() {
        MazeCommand::Generate {
            size: 8,
            permissions: Permissions::default(),
        }
    } else {
        match MazeCommand::parse(&args) {
            Some(command) => command,
            None => {
                eprintln!("usage: mazekit on|off|toggle|map|generate|success|fail [args...]");
                return Ok(());
            }
        }
    };
    info!("dispatching {:?}", command);

    let config = load_config()?;
    let settings = GenSettings::new();
    let mut controller = MazeSessionController::new(
        MemoryScene::new(),
        MemoryPlayer::new(PlayerPosition {
            map_id: 1,
            x: 0,
            y: 0,
            facing: 2,
        }),
        settings.clone(),
        ClearFlag::new(),
    );
    let mut loader = MazeMapLoader::new(
        MemoryMapLoader::new(),
        MemoryEvents::default(),
        settings,
        config.clone(),
    );

    dispatch(command, &mut controller);

    // The controller only reserves the transfer; play the host's part and
    // materialize the generated map the player was sent to.
    if let Some(session) = controller.session() {
        info!(
            "session active: generated={}, retry={}, quit={}",
            session.is_generated(),
            session.permissions.can_retry,
            session.permissions.can_quit
        );
        if session.is_generated() {
            let doc = loader.load_map(GENERATED_MAP_ID)?;
            let n = doc.width / 2;
            let entrance = ((n / 2) * 2, (n / 2) * 2);
            render(&doc, &config, entrance);
        }
    }
    Ok(())
}
