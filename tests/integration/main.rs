//! Integration tests

mod e2e_test;
mod hedge_test;
mod interactive_test;
mod properties_test;
mod snapshot_test;
