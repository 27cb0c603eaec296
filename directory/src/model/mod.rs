pub mod event;
pub mod person;
pub mod raw;
