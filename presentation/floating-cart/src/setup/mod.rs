pub mod app;
pub mod dependency_injection;
pub mod event_loop;
