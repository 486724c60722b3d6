pub mod session;

pub use session::{AuthOutcome, Session};
