//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `opportunities`, `chat`, etc.) so
//! individual components can depend on small focused models. Every slice
//! is a plain struct plus a tagged event union and a total `reduce`
//! function; components hold the structs in `RwSignal` contexts and the
//! async action helpers in [`actions`] drive the pending/fulfilled/
//! rejected lifecycle around each network call. Only the session slice is
//! persisted, through [`persist`].

pub mod actions;
pub mod chat;
pub mod community;
pub mod opportunities;
pub mod persist;
pub mod personality;
pub mod phase;
pub mod profile;
pub mod session;
