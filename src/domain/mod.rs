pub mod listing;
pub mod price;

pub use listing::{fallback_listings, Listing, ListingId};
pub use price::PriceStyle;
