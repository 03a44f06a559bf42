//! Gateway integration tests
//!
//! Drive the full HTTP surface through the router (oneshot) and, for the
//! smoke test, through a real bound listener.
