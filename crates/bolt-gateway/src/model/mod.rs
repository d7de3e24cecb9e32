mod health;
mod url;

pub use health::HealthResponse;
pub use url::{ListUrlsResponse, ShortenRequest, UrlResponse};
