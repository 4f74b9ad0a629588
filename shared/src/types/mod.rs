//! Type definitions module
//!
//! - `filter` - Exact-match filter maps forwarded to storage backends
//! - `page` - Offset/limit pagination windows

pub mod filter;
pub mod page;

pub use filter::Filters;
pub use page::Page;
