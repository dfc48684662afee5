pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

#[cfg(test)]
#[path = "tests/mock_tests.rs"]
mod tests;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
