mod render;

pub use render::{OutputFormat, render_error, render_response};
