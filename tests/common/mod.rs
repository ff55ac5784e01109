pub mod app;

#[allow(unused_imports)]
pub use app::{test_config, TestApp, UnreachableStore};
