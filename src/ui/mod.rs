//! Terminal UI: the app loop, the command-queue side of the engine's
//! collaborator trait, and the board view.

mod app;
mod frontend;
mod game_view;

pub use app::App;
