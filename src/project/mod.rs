//! Project context

mod model;

pub use model::Project;
