//! # Controller Module
//!
//! Per-request response state for generated controllers.
//!
//! ## Overview
//!
//! A generated controller does not talk to the HTTP engine directly. The routing
//! adapter creates one [`ControllerState`] per request, hands it the engine's
//! request object through [`Controller::init_controller`], and runs the handler.
//! The handler may override the status code and add response headers; once it
//! returns, the adapter reads the state back and builds the wire response.
//!
//! ```rust
//! use brrtrouter_runtime::{Controller, ControllerState, HttpStatusCode};
//!
//! struct EngineRequest {
//!     path: String,
//! }
//!
//! let mut state = ControllerState::new();
//! state.init_controller(EngineRequest { path: "/pets".to_string() });
//!
//! // Handler code
//! state.set_status(HttpStatusCode::Created);
//! state.set_header("Location", "/pets/42");
//!
//! // Adapter code
//! assert_eq!(state.context().map(|r| r.path.as_str()), Some("/pets"));
//! let parts = state.into_parts();
//! assert_eq!(parts.status, Some(HttpStatusCode::Created));
//! assert_eq!(parts.headers["Location"], "/pets/42");
//! ```
//!
//! ## Embedding
//!
//! Generated controller structs embed a `ControllerState` and implement
//! [`HasControllerState`]; the blanket implementation then makes them a
//! [`Controller`] without any generated delegation code:
//!
//! ```rust
//! use brrtrouter_runtime::{Controller, ControllerState, HasControllerState, HttpStatusCode};
//!
//! #[derive(Default)]
//! struct PetsController {
//!     state: ControllerState<()>,
//! }
//!
//! impl HasControllerState for PetsController {
//!     type Request = ();
//!
//!     fn controller_state(&self) -> &ControllerState<()> {
//!         &self.state
//!     }
//!
//!     fn controller_state_mut(&mut self) -> &mut ControllerState<()> {
//!         &mut self.state
//!     }
//! }
//!
//! let mut controller = PetsController::default();
//! controller.init_controller(());
//! controller.set_status(HttpStatusCode::Accepted);
//! assert_eq!(controller.status(), Some(HttpStatusCode::Accepted));
//! ```
//!
//! ## Ownership
//!
//! One state instance belongs to one request. All writes go through `&mut self`,
//! so the borrow checker rules out concurrent writers; there is no locking.

mod state;

pub use state::*;
