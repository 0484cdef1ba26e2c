use crate::domain::{Gender, User, UserId};
use crate::roster::draft::{Draft, DraftField};
use crate::roster::error::StoreError;
use crate::roster::ids::IdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Adding,
    Editing(UserId),
}

impl Mode {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_drafting(self) -> bool {
        !self.is_idle()
    }
}

/// The user's answer to the delete prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(UserId),
    Updated(UserId),
}

impl SaveOutcome {
    pub const fn id(self) -> UserId {
        match self {
            Self::Added(id) | Self::Updated(id) => id,
        }
    }
}

/// The record shown on first start
pub fn sample_users() -> Vec<User> {
    vec![User {
        id: UserId::new(1),
        name: "Dara".to_string(),
        gender: Gender::Male,
        age: 25,
        address: "PP".to_string(),
    }]
}

/// Ordered user list plus the single in-progress draft.
///
/// Every mutation goes through one of the methods below; a failed call
/// leaves the store exactly as it was.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    mode: Mode,
    draft: Draft,
    ids: IdGenerator,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Builds a store over `users`. Ids are assumed unique; new ids start
    /// past the highest one given.
    pub fn with_users(users: Vec<User>) -> Self {
        let ids = IdGenerator::starting_after(&users);
        Self {
            users,
            mode: Mode::Idle,
            draft: Draft::default(),
            ids,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The draft, present only while adding or editing.
    pub fn draft(&self) -> Option<&Draft> {
        self.mode.is_drafting().then_some(&self.draft)
    }

    pub fn start_add(&mut self) -> Result<(), StoreError> {
        if self.mode.is_drafting() {
            return Err(StoreError::Busy);
        }

        self.draft = Draft::default();
        self.mode = Mode::Adding;
        Ok(())
    }

    pub fn start_edit(&mut self, id: UserId) -> Result<(), StoreError> {
        if self.mode.is_drafting() {
            return Err(StoreError::Busy);
        }

        let user = self.get(id).ok_or(StoreError::UnknownUser(id))?;
        self.draft = Draft::from_user(user);
        self.mode = Mode::Editing(id);
        Ok(())
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: &str) -> Result<(), StoreError> {
        if self.mode.is_idle() {
            return Err(StoreError::NotDrafting);
        }

        self.draft.set(field, value);
        Ok(())
    }

    pub fn save(&mut self) -> Result<SaveOutcome, StoreError> {
        let mode = self.mode;
        if mode.is_idle() {
            return Err(StoreError::NotDrafting);
        }

        let valid = self.draft.validate()?;

        let outcome = match mode {
            Mode::Adding => {
                let id = self.ids.next_id()?;
                self.users.push(User {
                    id,
                    name: valid.name,
                    gender: valid.gender,
                    age: valid.age,
                    address: valid.address,
                });
                SaveOutcome::Added(id)
            }
            Mode::Editing(id) => {
                let Some(user) = self.users.iter_mut().find(|user| user.id == id) else {
                    // The record vanished under the draft; drop the edit.
                    self.reset_draft();
                    return Err(StoreError::UnknownUser(id));
                };
                user.name = valid.name;
                user.gender = valid.gender;
                user.age = valid.age;
                user.address = valid.address;
                SaveOutcome::Updated(id)
            }
            Mode::Idle => return Err(StoreError::NotDrafting),
        };

        self.reset_draft();
        Ok(outcome)
    }

    pub fn cancel(&mut self) {
        self.reset_draft();
    }

    /// Removes the user with `id` once the user has confirmed. Deleting the
    /// record that is being edited also drops the edit.
    pub fn delete_record(&mut self, id: UserId, confirmation: Confirmation) -> Option<User> {
        if confirmation == Confirmation::Declined {
            return None;
        }

        let index = self.position(id)?;
        let removed = self.users.remove(index);

        if self.mode == Mode::Editing(id) {
            self.reset_draft();
        }

        Some(removed)
    }

    fn reset_draft(&mut self) {
        self.mode = Mode::Idle;
        self.draft = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn fill(store: &mut UserStore, name: &str, age: &str, address: &str) -> TestResult {
        store.update_draft_field(DraftField::Name, name)?;
        store.update_draft_field(DraftField::Age, age)?;
        store.update_draft_field(DraftField::Address, address)?;
        Ok(())
    }

    fn two_users() -> UserStore {
        let mut users = sample_users();
        users.push(User {
            id: UserId::new(2),
            name: "Lina".to_string(),
            gender: Gender::Female,
            age: 41,
            address: "Kampot".to_string(),
        });
        UserStore::with_users(users)
    }

    #[test]
    fn add_scenario_appends_second_record() -> TestResult {
        let mut store = UserStore::with_users(sample_users());

        store.start_add()?;
        assert_eq!(store.mode(), Mode::Adding);
        assert_eq!(store.draft(), Some(&Draft::default()));

        fill(&mut store, "Sam", "30", "Town")?;
        let outcome = store.save()?;

        assert_eq!(store.len(), 2);
        assert_eq!(store.mode(), Mode::Idle);
        let added = &store.users()[1];
        assert_eq!(outcome, SaveOutcome::Added(added.id));
        assert_eq!(added.name, "Sam");
        assert_eq!(added.gender, Gender::Male);
        assert_eq!(added.age, 30);
        assert_eq!(added.address, "Town");
        assert_ne!(added.id, UserId::new(1));
        Ok(())
    }

    #[test]
    fn added_record_stores_trimmed_values() -> TestResult {
        let mut store = UserStore::new();
        store.start_add()?;
        fill(&mut store, "  Sam  ", " 30", "Town  ")?;
        store.update_draft_field(DraftField::Gender, "other")?;
        store.save()?;

        let user = &store.users()[0];
        assert_eq!(user.name, "Sam");
        assert_eq!(user.address, "Town");
        assert_eq!(user.age, 30);
        assert_eq!(user.gender, Gender::Other);
        Ok(())
    }

    #[test]
    fn edit_with_invalid_age_keeps_state() -> TestResult {
        let mut store = UserStore::with_users(sample_users());
        let before = store.users().to_vec();

        store.start_edit(UserId::new(1))?;
        store.update_draft_field(DraftField::Age, "abc")?;

        assert_eq!(store.save(), Err(StoreError::InvalidAge));
        assert_eq!(store.users(), before.as_slice());
        assert_eq!(store.mode(), Mode::Editing(UserId::new(1)));
        assert_eq!(store.draft().map(|draft| draft.age.as_str()), Some("abc"));
        Ok(())
    }

    #[test]
    fn edit_updates_only_target_record() -> TestResult {
        let mut store = two_users();
        let untouched = store.users()[0].clone();

        store.start_edit(UserId::new(2))?;
        assert_eq!(store.draft().map(|draft| draft.name.as_str()), Some("Lina"));
        fill(&mut store, "Lina K", "42", "Kep")?;

        assert_eq!(store.save()?, SaveOutcome::Updated(UserId::new(2)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.users()[0], untouched);
        let edited = &store.users()[1];
        assert_eq!(edited.id, UserId::new(2));
        assert_eq!(edited.name, "Lina K");
        assert_eq!(edited.age, 42);
        assert_eq!(edited.address, "Kep");
        assert_eq!(edited.gender, Gender::Female);
        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
        Ok(())
    }

    #[test]
    fn blank_fields_raise_missing_fields() -> TestResult {
        for (name, age, address) in [("", "30", "Town"), ("Sam", "", "Town"), ("Sam", "30", "")] {
            let mut store = UserStore::with_users(sample_users());
            store.start_add()?;
            fill(&mut store, name, age, address)?;

            assert_eq!(store.save(), Err(StoreError::MissingFields));
            assert_eq!(store.len(), 1);
            assert_eq!(store.mode(), Mode::Adding);
        }
        Ok(())
    }

    #[test]
    fn bad_ages_raise_invalid_age() -> TestResult {
        for age in ["0", "-5", "abc"] {
            let mut store = UserStore::with_users(sample_users());
            store.start_add()?;
            fill(&mut store, "Sam", age, "Town")?;

            assert_eq!(store.save(), Err(StoreError::InvalidAge));
            assert_eq!(store.len(), 1);
            assert_eq!(store.mode(), Mode::Adding);
        }
        Ok(())
    }

    #[test]
    fn cancel_returns_to_idle_and_clears_draft() -> TestResult {
        let mut store = UserStore::with_users(sample_users());
        store.start_edit(UserId::new(1))?;
        store.update_draft_field(DraftField::Name, "changed")?;

        store.cancel();

        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
        assert_eq!(store.users()[0].name, "Dara");

        store.start_add()?;
        assert_eq!(store.draft(), Some(&Draft::default()));
        Ok(())
    }

    #[test]
    fn add_and_edit_are_mutually_exclusive() -> TestResult {
        let mut store = UserStore::with_users(sample_users());
        store.start_add()?;
        assert_eq!(store.start_edit(UserId::new(1)), Err(StoreError::Busy));
        assert_eq!(store.start_add(), Err(StoreError::Busy));
        assert_eq!(store.mode(), Mode::Adding);

        store.cancel();
        store.start_edit(UserId::new(1))?;
        assert_eq!(store.start_add(), Err(StoreError::Busy));
        assert_eq!(store.mode(), Mode::Editing(UserId::new(1)));
        Ok(())
    }

    #[test]
    fn edit_of_unknown_id_is_a_no_op() {
        let mut store = UserStore::with_users(sample_users());
        assert_eq!(
            store.start_edit(UserId::new(99)),
            Err(StoreError::UnknownUser(UserId::new(99)))
        );
        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
    }

    #[test]
    fn idle_store_rejects_draft_changes_and_save() {
        let mut store = UserStore::new();
        assert_eq!(
            store.update_draft_field(DraftField::Name, "Sam"),
            Err(StoreError::NotDrafting)
        );
        assert_eq!(store.save(), Err(StoreError::NotDrafting));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut store = two_users();

        assert_eq!(store.delete_record(UserId::new(1), Confirmation::Declined), None);
        assert_eq!(store.len(), 2);

        let removed = store.delete_record(UserId::new(1), Confirmation::Confirmed);
        assert_eq!(removed.map(|user| user.name), Some("Dara".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.users()[0].id, UserId::new(2));

        assert_eq!(store.delete_record(UserId::new(1), Confirmation::Confirmed), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_record_under_edit_drops_the_edit() -> TestResult {
        let mut store = two_users();
        store.start_edit(UserId::new(2))?;

        store.delete_record(UserId::new(1), Confirmation::Confirmed);
        assert_eq!(store.mode(), Mode::Editing(UserId::new(2)));

        store.delete_record(UserId::new(2), Confirmation::Confirmed);
        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn ids_are_not_reused_after_delete() -> TestResult {
        let mut store = UserStore::with_users(sample_users());
        store.start_add()?;
        fill(&mut store, "Sam", "30", "Town")?;
        let first = store.save()?.id();

        store.delete_record(first, Confirmation::Confirmed);
        store.start_add()?;
        fill(&mut store, "Kim", "22", "City")?;
        let second = store.save()?.id();

        assert!(second > first);
        Ok(())
    }

    #[test]
    fn rapid_adds_get_distinct_ids() -> TestResult {
        let mut store = UserStore::new();
        for n in 1..=5 {
            store.start_add()?;
            fill(&mut store, &format!("user {n}"), "20", "Addr")?;
            store.save()?;
        }

        let mut ids: Vec<_> = store.users().iter().map(|user| user.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        Ok(())
    }

    #[test]
    fn add_fails_without_reusing_an_id_when_ids_run_out() -> TestResult {
        let mut store = UserStore::with_users(vec![User {
            id: UserId::new(u64::MAX),
            name: "Last".to_string(),
            gender: Gender::Other,
            age: 50,
            address: "End".to_string(),
        }]);
        store.start_add()?;
        fill(&mut store, "Sam", "30", "Town")?;

        assert_eq!(store.save(), Err(StoreError::IdsExhausted));
        assert_eq!(store.len(), 1);
        assert_eq!(store.mode(), Mode::Adding);
        Ok(())
    }
}
