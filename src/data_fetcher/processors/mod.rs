pub mod column_filter;
pub mod row_filter;
pub mod selection;

pub use column_filter::filter_columns;
pub use row_filter::filter_rows;
pub use selection::{select_table, table_index};
