//! Client for the [UTokyo Online Course Catalogue](https://catalog.he.u-tokyo.ac.jp/).
//!
//! The catalogue exposes two pages worth talking to: a search page returning
//! result cards for a set of filters, and a detail page for a single course.
//! This crate builds the requests, performs them over reqwest and parses the
//! returned HTML into typed records.
//!
//! ```no_run
//! use ut_course_catalog::{CourseCatalog, SearchFilter};
//!
//! # async fn run() -> ut_course_catalog::Result<()> {
//! let catalog = CourseCatalog::new()?;
//! let filter = SearchFilter {
//!     keyword: Some("システム".to_string()),
//!     ..Default::default()
//! };
//! let page = catalog.fetch_search(&filter, 1).await?;
//! for course in &page.items {
//!     println!("{} {}", course.timetable_code, course.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod course;
pub mod error;
mod text;

pub use catalog::config::CatalogConfig;
pub use catalog::query::{RequestSpec, SearchFilter};
pub use catalog::CourseCatalog;
pub use course::{CommonCode, CourseDetail, CourseSummary, SearchPage};
pub use error::{CatalogError, Result};
