//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the application state the way the event loop does and
//! render through `TestBackend`, without a real terminal or server.
