pub mod outline;

pub use outline::{render_node_outline, render_outline};
