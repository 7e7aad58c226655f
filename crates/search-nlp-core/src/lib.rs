pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::ProviderError;
pub use traits::*;
pub use types::*;
