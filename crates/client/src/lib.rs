//! Contact form submission lifecycle.
//!
//! [`SubmissionClient`] owns the three form fields and a small state machine:
//!
//! ```text
//! Idle --submit--> Submitting --2xx--> Succeeded --dismiss--> Idle
//!                       \--non-2xx / network error--> Failed --dismiss--> Idle
//! ```
//!
//! While `Submitting`, inputs are disabled, a second submit is a no-op and
//! the page should warn before unloading.

mod form;
mod state;
mod transport;

pub use form::*;
pub use state::*;
pub use transport::*;
