//! Tests for the per-request controller state
//!
//! # Test Coverage
//!
//! - Fresh state after `init_controller`
//! - Header overwrite and case sensitivity
//! - Status override (last write wins)
//! - Request handle identity through `context()`
//! - Embedding via `HasControllerState`
//! - Conversion to `http::HeaderMap`
//! - Header writes traced with name and value

use brrtrouter_runtime::{
    Controller, ControllerState, HasControllerState, HttpStatusCode,
};
use std::collections::HashMap;
use std::sync::Arc;
mod tracing_util;
use tracing_util::init_test_tracing;

#[derive(Debug)]
struct EngineRequest {
    path: String,
}

fn initialized() -> ControllerState<Arc<EngineRequest>> {
    let mut state = ControllerState::new();
    state.init_controller(Arc::new(EngineRequest {
        path: "/pets".to_string(),
    }));
    state
}

#[test]
fn test_fresh_state_has_no_status_and_no_headers() {
    init_test_tracing();
    let state = initialized();
    assert_eq!(state.status(), None);
    assert!(state.headers().is_empty());
}

#[test]
fn test_set_header_overwrites() {
    let mut state = initialized();
    state.set_header("A", "1");
    state.set_header("A", "2");

    let expected: HashMap<String, String> = [("A".to_string(), "2".to_string())].into();
    assert_eq!(state.headers(), &expected);
}

#[test]
fn test_header_names_are_case_sensitive() {
    let mut state = initialized();
    state.set_header("ETag", "\"v1\"");
    state.set_header("etag", "\"v2\"");

    assert_eq!(state.headers().len(), 2);
    assert_eq!(state.headers()["ETag"], "\"v1\"");
    assert_eq!(state.headers()["etag"], "\"v2\"");
}

#[test]
fn test_set_status_last_write_wins() {
    let mut state = initialized();
    state.set_status(HttpStatusCode::NotFound);
    state.set_status(HttpStatusCode::InternalServerError);
    assert_eq!(state.status(), Some(HttpStatusCode::InternalServerError));
    assert_eq!(state.status().map(HttpStatusCode::as_u16), Some(500));
}

#[test]
fn test_context_returns_identical_handle() {
    let handle = Arc::new(EngineRequest {
        path: "/pets/42".to_string(),
    });
    let mut state = ControllerState::new();
    assert!(state.context().is_none());

    state.init_controller(Arc::clone(&handle));

    let ctx = state.context().expect("handle stored");
    assert!(Arc::ptr_eq(ctx, &handle));
    assert_eq!(ctx.path, "/pets/42");
}

#[test]
fn test_context_with_borrowed_handle() {
    let request = EngineRequest {
        path: "/users".to_string(),
    };
    let mut state: ControllerState<&EngineRequest> = ControllerState::new();
    state.init_controller(&request);

    let ctx = state.context().copied().expect("handle stored");
    assert!(std::ptr::eq(ctx, &request));
}

#[test]
fn test_reinit_clears_headers_and_replaces_handle() {
    let mut state = initialized();
    state.set_header("X-Request-Id", "abc");
    state.init_controller(Arc::new(EngineRequest {
        path: "/other".to_string(),
    }));

    assert!(state.headers().is_empty());
    assert_eq!(state.context().map(|r| r.path.as_str()), Some("/other"));
}

#[test]
fn test_into_parts() {
    let mut state = initialized();
    state.set_status(HttpStatusCode::Created);
    state.set_header("Location", "/pets/42");

    let parts = state.into_parts();
    assert_eq!(parts.status, Some(HttpStatusCode::Created));
    assert_eq!(parts.headers.get("Location").map(String::as_str), Some("/pets/42"));
    assert_eq!(parts.request.map(|r| r.path.clone()), Some("/pets".to_string()));
}

#[test]
fn test_header_map_lowercases_names() {
    let mut state = initialized();
    state.set_header("Content-Language", "en");
    state.set_header("X-Rate-Limit", "10");

    let map = state.header_map().expect("valid headers");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("content-language").and_then(|v| v.to_str().ok()), Some("en"));
    assert_eq!(map.get("x-rate-limit").and_then(|v| v.to_str().ok()), Some("10"));
}

#[test]
fn test_header_map_keeps_case_variants() {
    let mut state = initialized();
    state.set_header("Vary", "Accept");
    state.set_header("vary", "Origin");

    let map = state.header_map().expect("valid headers");
    let values: Vec<&str> = map
        .get_all("vary")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(values.len(), 2);
    assert!(values.contains(&"Accept"));
    assert!(values.contains(&"Origin"));
}

#[test]
fn test_header_map_rejects_invalid_name() {
    let mut state = initialized();
    state.set_header("Bad Header", "x");
    assert!(state.header_map().is_err());
}

#[test]
fn test_header_map_rejects_invalid_value() {
    let mut state = initialized();
    state.set_header("X-Trace", "line\nbreak");
    assert!(state.header_map().is_err());
}

#[derive(Default)]
struct ListPetsController {
    state: ControllerState<String>,
    calls: usize,
}

impl HasControllerState for ListPetsController {
    type Request = String;

    fn controller_state(&self) -> &ControllerState<String> {
        &self.state
    }

    fn controller_state_mut(&mut self) -> &mut ControllerState<String> {
        &mut self.state
    }
}

impl ListPetsController {
    fn list_pets(&mut self) -> Vec<&'static str> {
        self.calls += 1;
        self.set_header("X-Total-Count", "2");
        self.set_status(HttpStatusCode::PartialContent);
        vec!["Rex", "Tom"]
    }
}

fn run_generic<C: Controller<Request = String>>(controller: &mut C, request: &str) {
    controller.init_controller(request.to_string());
}

#[test]
fn test_embedded_state_through_trait() {
    let mut controller = ListPetsController::default();
    run_generic(&mut controller, "GET /pets");

    let pets = controller.list_pets();
    assert_eq!(pets, ["Rex", "Tom"]);
    assert_eq!(controller.calls, 1);
    assert_eq!(controller.status(), Some(HttpStatusCode::PartialContent));
    assert_eq!(controller.headers()["X-Total-Count"], "2");
    assert_eq!(controller.context().map(String::as_str), Some("GET /pets"));
}

#[test]
fn test_controller_as_trait_object() {
    let mut state: ControllerState<String> = ControllerState::new();
    {
        let controller: &mut dyn Controller<Request = String> = &mut state;
        controller.init_controller("req".to_string());
        controller.set_status(HttpStatusCode::Accepted);
    }
    assert_eq!(state.status(), Some(HttpStatusCode::Accepted));
}

#[test]
fn test_state_per_worker() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut state: ControllerState<usize> = ControllerState::new();
                state.init_controller(i);
                state.set_header("X-Worker", &i.to_string());
                state.into_parts()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let parts = handle.join().expect("worker finished");
        assert_eq!(parts.request, Some(i));
        assert_eq!(parts.headers["X-Worker"], i.to_string());
    }
}

#[test]
fn test_set_header_traces_name_and_value() {
    let captured = Arc::new(std::sync::Mutex::new(Vec::<u8>::new()));
    let sink = Arc::clone(&captured);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || SharedBuf(Arc::clone(&sink)))
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut state = initialized();
        state.set_header("X-Request-Id", "req-7f3a");
    });

    let output = String::from_utf8(captured.lock().expect("lock").clone()).expect("utf8");
    assert!(output.contains("setting response header"), "{output}");
    assert!(output.contains("X-Request-Id"), "{output}");
    assert!(output.contains("req-7f3a"), "{output}");
}

struct SharedBuf(Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
