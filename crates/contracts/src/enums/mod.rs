pub mod sort_field;

pub use sort_field::{SortColumn, SortField};
