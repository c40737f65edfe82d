mod api_error;
mod client;

pub use api_error::ApiError;
pub use client::ApiClient;

use crate::domain::{fallback_listings, Listing};

/// The remote spreadsheet API as the rest of the site sees it.
///
/// `ApiClient` is the real implementation; tests plug in canned data.
pub trait ListingApi: Send + Sync {
    /// `?action=getAll`. An empty array is `Ok(vec![])`.
    fn load_all(&self) -> Result<Vec<Listing>, ApiError>;

    /// `?action=getOne&id=..`. `Ok(None)` when the API answers with an error marker.
    fn load_one(&self, id: &str) -> Result<Option<Listing>, ApiError>;

    /// `?action=contact&..`. Only transport failures are reported.
    fn send_contact(&self, params: &[(String, String)]) -> Result<(), ApiError>;

    /// Like `load_all`, but never empty: failures and empty results are
    /// replaced by the fixed backup collection.
    fn load_all_or_fallback(&self) -> Vec<Listing> {
        match self.load_all() {
            Ok(listings) if !listings.is_empty() => listings,
            Ok(_) => {
                tracing::warn!("listings API returned no rows, using backup data");
                fallback_listings()
            }
            Err(e) => {
                tracing::warn!(error = %e, "listings API failed, using backup data");
                fallback_listings()
            }
        }
    }
}
