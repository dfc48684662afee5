//! User directory: registration, lookup and removal.

mod service;


pub use service::UserService;
