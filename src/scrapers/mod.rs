pub mod airbnb;
pub mod browser;
pub mod classifier;
pub mod enricher;
pub mod extractor;
pub mod geocoder;
pub mod traits;
pub mod types;

pub use airbnb::LeadScanner;
pub use browser::ChromePageSource;
pub use geocoder::NominatimGeocoder;
pub use types::ScanConfig;
