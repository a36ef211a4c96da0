//! Black-box tests for dbseed
//!
//! Only the public `dbseed` facade is used; the tests live under `tests/`.
