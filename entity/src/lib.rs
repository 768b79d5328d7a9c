pub mod prelude;

pub mod course;
pub mod reflection;
pub mod reflection_submission;
