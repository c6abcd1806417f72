//! Application service layer.
//!
//! Services tie a contact store to form sessions: they decide how a session
//! starts (blank or hydrated) and signal when it completes.

mod edit_session;

pub use edit_session::{
    EditSession, EditSessionService, EditSessionServiceImpl, SessionCompletion,
};
