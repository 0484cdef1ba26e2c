use crate::domain::{User, UserId};
use crate::roster::error::StoreError;

/// Hands out strictly increasing ids, so an id is never reused even after
/// the user holding the highest one is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    /// `None` once `u64::MAX` has been handed out
    next: Option<u64>,
}

impl IdGenerator {
    pub fn starting_after(users: &[User]) -> Self {
        let highest = users.iter().map(|user| user.id.get()).max().unwrap_or(0);
        Self {
            next: highest.checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Result<UserId, StoreError> {
        let next = self.next.ok_or(StoreError::IdsExhausted)?;
        self.next = next.checked_add(1);
        Ok(UserId::new(next))
    }
}
