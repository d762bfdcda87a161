// src/app/mod.rs
//! Browser side of the game: hit testing, dragging, drawing and the JS-facing `GameApp`.

pub mod assets;
pub mod browser_event_manager;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod layout_calculator;
pub mod renderer;
pub mod state_getter;
pub mod state_handler;
