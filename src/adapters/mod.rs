// Adapters layer: concrete data sources behind the DataSource port.

pub mod inline;
pub mod remote;

pub use inline::InlineSource;
pub use remote::RemoteSource;
