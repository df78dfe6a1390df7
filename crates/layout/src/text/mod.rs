mod wrapper;

pub use wrapper::{clip_to_width, wrap_text};
