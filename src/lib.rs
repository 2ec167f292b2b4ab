pub mod app;
pub mod color;
pub mod data;
pub mod form;
pub mod query;
pub mod state;
pub mod ui;
