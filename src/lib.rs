// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive front-end.
//
// Module responsibilities:
// - `config`: Static startup configuration (mock-mode toggle, API base
//   path) plus the front-end's canned quote list.
// - `api`: The data-access contract (register, pending list, upload) with
//   one live HTTP implementation and one mock implementation, selected
//   once at startup.
// - `ui`: Implements the terminal flows and delegates every call to `api`.
//
// Keeping this separation makes it easy to drive the API layer from tests
// or replace the UI without touching the data-access contract.
pub mod api;
pub mod config;
pub mod ui;
