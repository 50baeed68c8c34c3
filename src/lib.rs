// radarscope library: the radar layout engine and its data collaborators
//
// The terminal viewer in main.rs is a thin host around these modules; the
// integration tests drive them directly.

pub mod cli;
pub mod filter;
pub mod radar;
pub mod store;
pub mod theme;
