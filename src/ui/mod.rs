pub mod listing;
pub mod panels;
