pub mod calculator;
pub mod file_transform;
pub mod lists;

pub use file_transform::transform_file;
pub use lists::list_walkthrough;
