pub mod draft;
pub mod session;
pub mod total;
pub mod user;

pub use draft::{Action, DraftError, SessionDraft};
pub use session::{capitalize_first, format_duration, Session};
pub use total::{TimeUnit, WatchTotal};
pub use user::{UnknownUser, User};
