pub mod config;
pub mod item;
pub mod packing_list;

pub use config::*;
pub use item::*;
pub use packing_list::*;
