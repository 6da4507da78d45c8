pub mod clock;
pub mod id_generator;
pub mod models;
pub mod repository;
pub mod utils;

pub use clock::*;
pub use id_generator::*;
pub use models::*;
