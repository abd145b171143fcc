//! Plan preview output
//!
//! Rendering a plan is side-effect free apart from writing to the given sink.

pub mod json;
pub mod text;

pub use self::json::JsonPlan;
pub use self::text::{print_plan, render_plan};
