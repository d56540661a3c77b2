//! Response building for the conversion API.
//!
//! - [`problem`] - Problem details bodies for rejected requests
//! - [`headers`] - Attachment headers for converted documents

pub mod headers;
pub mod problem;

pub use headers::{DownloadHeaders, download_file_name};
pub use problem::{ProblemDetails, ProblemDetailsBuilder};
