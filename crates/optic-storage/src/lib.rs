pub mod entities;
mod requests;

pub use requests::RequestStorage;
pub use optic_common::{NewRequest, RequestStatus};
