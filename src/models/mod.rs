pub mod context_tag_keys;
mod availability_data;
mod data;
mod envelope;
mod exception_data;
mod exception_details;
mod request_data;
mod sanitize;
mod severity_level;

pub use availability_data::*;
pub use data::*;
pub use envelope::*;
pub use exception_data::*;
pub use exception_details::*;
pub use request_data::*;
pub use sanitize::*;
pub use severity_level::*;
