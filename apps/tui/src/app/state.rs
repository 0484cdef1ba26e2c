use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::domain::UserId;
use crate::roster::{DraftField, Mode, UserStore};

/// Which pane receives keys while no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Form,
}

/// Selectable element of the form: one of the fields or a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(DraftField),
    Save,
    Cancel,
}

impl FormFocus {
    pub const ORDER: [Self; 6] = [
        Self::Field(DraftField::Name),
        Self::Field(DraftField::Gender),
        Self::Field(DraftField::Age),
        Self::Field(DraftField::Address),
        Self::Save,
        Self::Cancel,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[wrap_increment(self.index(), Self::ORDER.len())]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[wrap_decrement(self.index(), Self::ORDER.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Blocking message acknowledged with Enter or Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub text: &'static str,
}

impl Notice {
    pub const fn new(kind: NoticeKind, title: &'static str, text: &'static str) -> Self {
        Self { kind, title, text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Notice(Notice),
    ConfirmDelete {
        id: UserId,
        name: String,
        /// "Yes, delete it!" is highlighted instead of "Cancel"
        yes_selected: bool,
    },
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub store: UserStore,
    pub focus: Focus,
    pub form_focus: FormFocus,
    pub selected_index: usize,
    pub dialog: Option<Dialog>,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(store: UserStore) -> Self {
        Self {
            running: true,
            store,
            focus: Focus::Table,
            form_focus: FormFocus::Field(DraftField::Name),
            selected_index: 0,
            dialog: None,
            show_help: false,
            status_message: String::new(),
        }
    }

    pub const fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub const fn is_drafting(&self) -> bool {
        self.store.mode().is_drafting()
    }

    pub fn selected_user_id(&self) -> Option<UserId> {
        self.store.users().get(self.selected_index).map(|user| user.id)
    }

    /// Keeps the table selection inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}
