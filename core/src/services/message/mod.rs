//! Read access to the archive of dispatched messages.

mod service;

#[cfg(test)]
mod tests;

pub use service::MessageService;
