pub mod config;
pub mod crop;
pub mod error;
pub mod models;
pub mod officer;
pub mod requests;
pub mod responses;

pub use config::*;
pub use crop::*;
pub use error::*;
pub use models::*;
pub use officer::*;
pub use requests::*;
pub use responses::*;
