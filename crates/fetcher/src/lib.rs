//! Retrying JSON fetch client for remote health data providers.
//!
//! [`Fetcher`] issues GET requests with a language tag merged into the query
//! string, retries failed attempts with linear backoff, and decodes the body
//! into a typed payload. Transport and sleeping are injected through the
//! [`HttpTransport`] and [`Sleeper`] traits, so retry behaviour can be tested
//! without a network or real delays.
//!
//! # Example
//!
//! ```no_run
//! use fetcher::{FetchRequest, Fetcher};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Symptoms {
//!     summary: Option<String>,
//! }
//!
//! # async fn example() -> Result<(), fetcher::FetchError> {
//! let fetcher = Fetcher::http()?;
//! let request = FetchRequest::new("https://health.example.org/diseases/dengue/symptoms", "hi")
//!     .max_retries(2);
//! let payload: Symptoms = fetcher.fetch(&request).await?;
//! println!("{:?}", payload.summary);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetcher;
pub mod retry;
pub mod transport;

pub use error::{AttemptError, FetchError};
pub use fetcher::{FetchRequest, Fetcher, LANGUAGE_PARAM};
pub use retry::{Sleeper, TokioSleeper};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
