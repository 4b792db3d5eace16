//! Framework Catalog
//!
//! Loads the framework list from the data endpoint and renders it:
//! - models: wire records and rendered cards
//! - fetcher: the single GET and its error
//! - region / renderer: the display region and what gets written into it

mod fetcher;
mod models;
mod region;
mod renderer;

pub use fetcher::{parse_frameworks, FetchError, Fetcher};
pub use models::{
    CardLine, Framework, FrameworkCard, CATEGORY_LABEL, LEGISLATOR_LABEL, PLACEHOLDER, UNTITLED,
};
pub use region::{DisplayRegion, RegionNode};
pub use renderer::{Renderer, ERROR_MESSAGE};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/data";

/// Fetch once and render the outcome.
///
/// Called a single time by the host at startup. The region is already
/// updated when this returns; the result only reports which path ran.
pub async fn load_frameworks<R: DisplayRegion>(
    fetcher: &Fetcher,
    renderer: &mut Renderer<R>,
) -> Result<usize, FetchError> {
    match fetcher.fetch().await {
        Ok(frameworks) => {
            renderer.show(&frameworks);
            Ok(frameworks.len())
        }
        Err(e) => {
            renderer.show_error();
            Err(e)
        }
    }
}
