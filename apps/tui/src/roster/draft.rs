use crate::domain::{Gender, User};
use crate::roster::error::StoreError;

/// Editable field of the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Gender,
    Age,
    Address,
}

impl DraftField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Gender, Self::Age, Self::Address];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Address => "Address",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter name",
            Self::Gender => "",
            Self::Age => "Enter age",
            Self::Address => "Enter address",
        }
    }
}

/// Uncommitted form values. Age stays free text until the draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub gender: Gender,
    pub age: String,
    pub address: String,
}

/// A draft that passed validation, with text fields trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub address: String,
}

impl Draft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            gender: user.gender,
            age: user.age.to_string(),
            address: user.address.clone(),
        }
    }

    /// Current text of a text field; `None` for the gender select.
    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::Age => Some(&self.age),
            DraftField::Address => Some(&self.address),
            DraftField::Gender => None,
        }
    }

    /// Replaces one field. A gender value that does not parse is ignored.
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => value.clone_into(&mut self.name),
            DraftField::Age => value.clone_into(&mut self.age),
            DraftField::Address => value.clone_into(&mut self.address),
            DraftField::Gender => {
                if let Some(gender) = Gender::parse(value) {
                    self.gender = gender;
                }
            }
        }
    }

    pub fn validate(&self) -> Result<ValidDraft, StoreError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let address = self.address.trim();

        if name.is_empty() || age.is_empty() || address.is_empty() {
            return Err(StoreError::MissingFields);
        }

        let age = match age.parse::<u32>() {
            Ok(age) if age > 0 => age,
            _ => return Err(StoreError::InvalidAge),
        };

        Ok(ValidDraft {
            name: name.to_string(),
            gender: self.gender,
            age,
            address: address.to_string(),
        })
    }
}
