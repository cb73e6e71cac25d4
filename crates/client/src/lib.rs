pub mod abstract_trait;
pub mod dashboard;
pub mod flow;
pub mod preferences;
pub mod presentation;
pub mod service;
pub mod view;
