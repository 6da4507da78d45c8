pub mod config;
pub mod domain;
pub mod error;
pub mod notifier;
pub mod policy;
pub mod service;

#[cfg(test)]
mod test_utils;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use notifier::*;
pub use policy::*;
pub use service::*;
