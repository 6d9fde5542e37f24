// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod plugin;
pub mod runner;
pub mod sci_m;
pub mod version;

pub use error::InputValidationError;
pub use models::Record;
pub use plugin::ModelPlugin;
pub use sci_m::SciMModel;
