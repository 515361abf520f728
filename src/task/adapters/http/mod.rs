//! HTTP adapters for the content store.

mod fetcher;
mod store;

pub use fetcher::HttpContentFetcher;
pub use store::MoralisContentStore;
