//! Content types of the heritage guide
//!
//! Each type implements [`Record`](crate::core::Record) and declares which of
//! its fields the content pages filter on, search in and aggregate over.

pub mod festival;
pub mod manuscript;
pub mod monastery;
pub mod story;

pub use festival::Festival;
pub use manuscript::Manuscript;
pub use monastery::Monastery;
pub use story::Story;
