//! Basketball-Reference data source: page fetching, player search, shooting
//! table extraction, and the sample data used when any of that fails.

pub mod document;
pub mod http;
pub mod locator;
pub mod sample;
pub mod service;
pub mod table;

pub use http::{HttpPageSource, Page, PageSource};
pub use locator::{PlayerLocator, PlayerMatch};
pub use service::ShootingDataService;
pub use table::{extract, RawTable};
