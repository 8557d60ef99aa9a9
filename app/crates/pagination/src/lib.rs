//! Pagination primitives for page-numbered REST listings.
//!
//! Directory endpoints address results with a 1-based `page` query parameter
//! and answer with an envelope that reports the page size, the total record
//! count, and the total page count alongside the records themselves. This
//! crate owns both halves of that contract:
//!
//! - [`PageNumber`] is a validated, 1-based page index that knows how to write
//!   itself into a request URL.
//! - [`Page`] is the decoded envelope. Missing fields decode as zero or empty
//!   so a sparse server response never fails to parse.
//!
//! The server is the only source of truth for `total_pages`, and that value
//! may change between requests. Callers decide whether more pages remain by
//! asking the most recently observed envelope via [`Page::has_more_after`].

mod envelope;
mod page_number;

pub use envelope::Page;
pub use page_number::{PAGE_QUERY_PARAM, PageNumber, PageNumberError};
