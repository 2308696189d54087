pub mod chrome;
pub mod config;
pub mod constants;
pub mod content;
pub mod desktop;
pub mod dock;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod interaction;
pub mod layout;
pub mod panel_split;
pub mod runner;
pub mod skins;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
