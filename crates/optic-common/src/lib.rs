pub mod config;
pub mod request;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, DbConfig};
pub use request::{
    Jobname, ModelType, NewRequest, RequestForm, RequestStatus, ValidationError,
};
