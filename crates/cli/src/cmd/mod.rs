mod browse;
mod graph;
mod screens;
mod source;

pub use browse::{BrowseArgs, cmd_browse};
pub use graph::{GraphArgs, cmd_graph};
pub use screens::{ScreensArgs, cmd_screens};
