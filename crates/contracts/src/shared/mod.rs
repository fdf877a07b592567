pub mod page_size;

pub use page_size::PageSize;
