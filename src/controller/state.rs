use crate::status::HttpStatusCode;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Response-state contract implemented by every generated controller.
///
/// `Request` is the routing engine's own request object. This layer stores it
/// and hands it back; it never inspects it.
pub trait Controller {
    /// Opaque request handle supplied by the routing adapter.
    type Request;

    /// Reset the header map and store the request handle.
    ///
    /// Called once per request before the handler runs. The setters also work
    /// before this call (the header map always exists), but the adapter is
    /// expected to call it first.
    fn init_controller(&mut self, request: Self::Request);

    /// Override the response status. The last write wins.
    fn set_status(&mut self, status: HttpStatusCode);

    /// The status override, or `None` when the handler's default applies.
    fn status(&self) -> Option<HttpStatusCode>;

    /// Insert or replace a response header.
    ///
    /// Names are stored exactly as given; `"ETag"` and `"etag"` are distinct
    /// entries here. Case folding happens when the adapter builds the wire
    /// headers (see [`ControllerState::header_map`]).
    fn set_header(&mut self, name: &str, value: &str);

    /// All headers set so far.
    ///
    /// This is a live, read-only view of the controller's own map: it reflects
    /// later `set_header` calls once the borrow ends, and cannot be used to
    /// modify the map. Clone it, or use [`ControllerState::into_parts`], to
    /// take ownership.
    fn headers(&self) -> &HashMap<String, String>;

    /// The request handle passed to [`init_controller`](Self::init_controller),
    /// or `None` before initialization.
    fn context(&self) -> Option<&Self::Request>;
}

/// Gives a generated controller struct the [`Controller`] API by pointing at
/// the [`ControllerState`] it embeds.
pub trait HasControllerState {
    /// Request handle type stored in the embedded state.
    type Request;

    /// The embedded state, for reads.
    fn controller_state(&self) -> &ControllerState<Self::Request>;

    /// The embedded state, for writes.
    fn controller_state_mut(&mut self) -> &mut ControllerState<Self::Request>;
}

/// Storage for one request's response state.
#[derive(Debug, Clone)]
pub struct ControllerState<R> {
    status: Option<HttpStatusCode>,
    headers: HashMap<String, String>,
    request: Option<R>,
}

/// What the adapter takes back from a [`ControllerState`] after the handler
/// has returned.
#[derive(Debug, Clone)]
pub struct ControllerParts<R> {
    pub status: Option<HttpStatusCode>,
    pub headers: HashMap<String, String>,
    pub request: Option<R>,
}

impl<R> Default for ControllerState<R> {
    fn default() -> Self {
        Self {
            status: None,
            headers: HashMap::new(),
            request: None,
        }
    }
}

impl<R> ControllerState<R> {
    /// An uninitialized state: no status override, no headers, no request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The status override, or `default` when the handler set none.
    #[must_use]
    pub fn status_or(&self, default: HttpStatusCode) -> HttpStatusCode {
        self.status.unwrap_or(default)
    }

    /// Consume the state at the end of the request.
    #[must_use]
    pub fn into_parts(self) -> ControllerParts<R> {
        ControllerParts {
            status: self.status,
            headers: self.headers,
            request: self.request,
        }
    }

    /// Build wire headers from the accumulated map.
    ///
    /// Header names are lower-cased by `http`; two entries differing only by
    /// case are both appended.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not a valid header token or a value
    /// contains bytes not allowed in a header value.
    pub fn header_map(&self) -> Result<HeaderMap, http::Error> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(value)?;
            map.append(name, value);
        }
        Ok(map)
    }
}

impl<R> HasControllerState for ControllerState<R> {
    type Request = R;

    fn controller_state(&self) -> &ControllerState<R> {
        self
    }

    fn controller_state_mut(&mut self) -> &mut ControllerState<R> {
        self
    }
}

impl<T: HasControllerState> Controller for T {
    type Request = T::Request;

    fn init_controller(&mut self, request: Self::Request) {
        let state = self.controller_state_mut();
        debug!(
            cleared_headers = state.headers.len(),
            "initializing controller state"
        );
        state.headers = HashMap::new();
        state.request = Some(request);
    }

    fn set_status(&mut self, status: HttpStatusCode) {
        let state = self.controller_state_mut();
        if let Some(previous) = state.status {
            debug!(
                previous = previous.as_u16(),
                status = status.as_u16(),
                "overriding response status"
            );
        }
        state.status = Some(status);
    }

    fn status(&self) -> Option<HttpStatusCode> {
        self.controller_state().status
    }

    fn set_header(&mut self, name: &str, value: &str) {
        trace!(header = name, value, "setting response header");
        self.controller_state_mut()
            .headers
            .insert(name.to_string(), value.to_string());
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.controller_state().headers
    }

    fn context(&self) -> Option<&Self::Request> {
        self.controller_state().request.as_ref()
    }
}
