//! UI Components
//!
//! Leptos views over the display region.

mod framework_card;
mod framework_list;

pub use framework_card::FrameworkCardView;
pub use framework_list::FrameworkList;
