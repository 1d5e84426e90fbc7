pub mod detector;
pub mod documentation;
