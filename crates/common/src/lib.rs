pub mod error;

pub use error::{UmamiError, UmamiResult};
