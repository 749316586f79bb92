pub mod renderer;


pub use renderer::{render_fragment, render_page, RenderError, RenderOptions};
