//! REST surface of the SDX topology service.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod handlers;
mod router;
mod schema;
mod state;

pub use error::{ApiError, Result};
pub use router::{DEFAULT_API_PREFIX, RouterBuilder};
pub use schema::{EventRequest, UniRequest, ValidateRequest};
pub use state::ApiContext;
