//! Output generators.
//!
//! - **Sitemap**: Google News sitemap (`news-sitemap.xml`) built from fetched posts

pub mod sitemap;
