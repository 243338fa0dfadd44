pub mod layout;
pub mod outcome;
pub mod status;

pub use layout::CacheLayout;
pub use outcome::FetchOutcome;
pub use status::ResponseStatus;
