//! Pointer input to turn commands.
//!
//! The host polls its pointer once per frame and hands the state to
//! `InputAdapter::update`. A press is recognised only on the frame the left
//! button goes down. Clicks are queued as intents and resolved against the
//! game state when they are applied, and at most one is applied per step.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::game_state::chess_types::Coordinate;
use crate::game_state::game_manager::{GameManager, TurnCommand, TurnEvent};
use crate::presentation::board_geometry::BoardGeometry;

/// Raw pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub left_pressed: bool,
}

impl PointerState {
    pub fn new(x: i32, y: i32, left_pressed: bool) -> Self {
        Self { x, y, left_pressed }
    }
}

/// Something the user asked for, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// A click on a board cell, or off the board (`None`).
    Click(Option<Coordinate>),
    Command(TurnCommand),
}

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    geometry: BoardGeometry,
    previous: PointerState,
    pending: VecDeque<InputIntent>,
}

impl InputAdapter {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            previous: PointerState::default(),
            pending: VecDeque::new(),
        }
    }

    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Records this frame's pointer, queueing a click on a fresh press.
    pub fn observe(&mut self, pointer: PointerState) {
        if pointer.left_pressed && !self.previous.left_pressed {
            let tile = self.geometry.tile_at(pointer.x, pointer.y);
            trace!("press at ({}, {}) -> {:?}", pointer.x, pointer.y, tile);
            self.pending.push_back(InputIntent::Click(tile));
        }
        self.previous = pointer;
    }

    /// Queues an already-resolved command, e.g. from a keyboard shortcut.
    pub fn push_command(&mut self, command: TurnCommand) {
        self.pending.push_back(InputIntent::Command(command));
    }

    /// Queues a click on a board cell directly, bypassing pixel mapping.
    pub fn push_click(&mut self, tile: Option<Coordinate>) {
        self.pending.push_back(InputIntent::Click(tile));
    }

    /// Applies at most one queued intent.
    ///
    /// Returns `None` if nothing was queued or the intent resolved to no
    /// command.
    pub fn step(&mut self, game: &mut GameManager) -> Option<TurnEvent> {
        let intent = self.pending.pop_front()?;
        let command = resolve(intent, game)?;
        let event = game.handle(command);
        debug!("{command:?} -> {event:?}");
        Some(event)
    }

    /// One frame: observe the pointer, then step.
    pub fn update(&mut self, game: &mut GameManager, pointer: PointerState) -> Option<TurnEvent> {
        self.observe(pointer);
        self.step(game)
    }
}

/// Turns an intent into a command for the current turn phase.
///
/// Without a selection a click selects; with one it is a move attempt. Clicks
/// off the board are dropped and leave any selection in place.
fn resolve(intent: InputIntent, game: &GameManager) -> Option<TurnCommand> {
    match intent {
        InputIntent::Command(command) => Some(command),
        InputIntent::Click(None) => None,
        InputIntent::Click(Some(tile)) => {
            if game.current_player().has_selection() {
                Some(TurnCommand::MoveTo(tile))
            } else {
                Some(TurnCommand::SelectAt(tile))
            }
        }
    }
}
