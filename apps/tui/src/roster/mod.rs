pub mod draft;
pub mod error;
mod ids;
pub mod store;

pub use draft::{Draft, DraftField};
pub use error::StoreError;
pub use ids::IdGenerator;
pub use store::{sample_users, Confirmation, Mode, SaveOutcome, UserStore};
