pub mod requests;

pub use requests::Entity as Requests;
