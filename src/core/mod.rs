pub mod handler;
pub mod router;

pub use crate::domain::model::{ApiRequest, ApiResponse, ErrorBody};
pub use crate::domain::ports::DataSource;
pub use crate::utils::error::Result;
