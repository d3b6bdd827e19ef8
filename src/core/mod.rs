// Core modules implementing the bridge seam, status codes, and error modeling.
pub mod bridge;
pub mod error;
pub mod framework;
pub mod status;
