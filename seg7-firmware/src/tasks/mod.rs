//! Embassy tasks

mod refresh;
mod showcase;

pub use refresh::refresh_task;
pub use showcase::showcase_task;
