pub mod page_size_select;
pub mod pagination_controls;
pub mod table;
