pub mod number_format;
pub mod sortable_header_cell;

pub use number_format::{format_count, format_money, format_money_opt, format_percent};
pub use sortable_header_cell::SortableHeaderCell;
