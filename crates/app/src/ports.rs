//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the browser.
//! They are defined here (in `app`) so that both the controllers and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is single-threaded: futures are not required to be `Send`
//! because the browser's fetch and timer futures are not.

pub mod page;
pub mod session_store;
pub mod transport;
pub mod view;

pub use page::{PageHost, Route};
pub use session_store::SessionStore;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
pub use view::{Banner, BannerKind, BusyAction, DashboardView, LoginStep, LoginView};
