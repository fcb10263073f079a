pub mod app;
pub mod input;
pub mod item_row;
pub mod render;
pub mod theme;

pub use app::run;
