//! Authorization domain types.

mod caller;
mod error;
mod operation;

pub use caller::{Caller, Claims, bearer_token};
pub use error::{AuthError, VerificationError};
pub use operation::Operation;
