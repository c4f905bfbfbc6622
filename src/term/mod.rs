//! Terminal output collaborator: score-table formatting and the console
//! renderer. The core never touches this module.

pub mod renderer;
pub mod score_view;

pub use renderer::ConsoleRenderer;
pub use score_view::format_score_table;
