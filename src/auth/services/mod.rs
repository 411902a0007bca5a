//! Authorization services.

mod gate;

pub use gate::AuthGate;
