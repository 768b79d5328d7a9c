pub use super::course::Entity as Course;
pub use super::reflection::Entity as Reflection;
pub use super::reflection_submission::Entity as ReflectionSubmission;
