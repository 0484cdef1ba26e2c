use crate::app::state::{App, Dialog, Focus, FormFocus, Notice, NoticeKind};
use crate::domain::UserId;
use crate::roster::{Confirmation, DraftField, SaveOutcome, StoreError};
use tracing::{debug, info, warn};

const MISSING_FIELDS: Notice = Notice::new(
    NoticeKind::Warning,
    "Missing Fields",
    "Please fill in all fields",
);
const INVALID_AGE: Notice = Notice::new(NoticeKind::Error, "Invalid Age", "Please enter a valid age");
const USER_ADDED: Notice = Notice::new(
    NoticeKind::Success,
    "User Added",
    "The user has been added successfully.",
);
const USER_UPDATED: Notice = Notice::new(
    NoticeKind::Success,
    "User Updated",
    "The user has been updated successfully.",
);
const USER_DELETED: Notice = Notice::new(NoticeKind::Success, "Deleted!", "The user has been deleted.");

/// Everything the form, the table and the dialogs can ask the controller
/// to do. Input handlers only produce these; `App::dispatch` applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartAdd,
    StartEdit(UserId),
    UpdateDraft(DraftField, String),
    Save,
    Cancel,
    RequestDelete(UserId),
    ResolveDelete(Confirmation),
    ToggleDeleteChoice,
    DismissNotice,
    Select(usize),
    FocusForm(FormFocus),
    FocusTable,
    ToggleHelp,
    Quit,
}

impl App {
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, mode = ?self.mode(), "dispatch");

        match action {
            Action::StartAdd => self.start_add(),
            Action::StartEdit(id) => self.start_edit(id),
            Action::UpdateDraft(field, value) => {
                if let Err(e) = self.store.update_draft_field(field, &value) {
                    debug!(%e, "draft update ignored");
                }
            }
            Action::Save => self.save(),
            Action::Cancel => {
                self.store.cancel();
                self.focus = Focus::Table;
                self.status_message.clear();
            }
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ResolveDelete(confirmation) => self.resolve_delete(confirmation),
            Action::ToggleDeleteChoice => {
                if let Some(Dialog::ConfirmDelete { yes_selected, .. }) = &mut self.dialog {
                    *yes_selected = !*yes_selected;
                }
            }
            Action::DismissNotice => {
                if matches!(self.dialog, Some(Dialog::Notice(_))) {
                    self.dialog = None;
                }
            }
            Action::Select(index) => {
                self.selected_index = index;
                self.clamp_selection();
            }
            Action::FocusForm(form_focus) => {
                if self.is_drafting() {
                    self.focus = Focus::Form;
                    self.form_focus = form_focus;
                }
            }
            Action::FocusTable => self.focus = Focus::Table,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.running = false,
        }
    }

    fn start_add(&mut self) {
        match self.store.start_add() {
            Ok(()) => {
                self.focus = Focus::Form;
                self.form_focus = FormFocus::Field(DraftField::Name);
                self.status_message.clear();
            }
            Err(e) => {
                warn!(%e, "add rejected");
                self.status_message = "Finish the current add or edit first".to_string();
            }
        }
    }

    fn start_edit(&mut self, id: UserId) {
        match self.store.start_edit(id) {
            Ok(()) => {
                self.focus = Focus::Form;
                self.form_focus = FormFocus::Field(DraftField::Name);
                self.status_message.clear();
            }
            Err(StoreError::UnknownUser(id)) => {
                warn!(%id, "edit requested for unknown user");
            }
            Err(e) => {
                warn!(%e, "edit rejected");
                self.status_message = "Finish the current add or edit first".to_string();
            }
        }
    }

    fn save(&mut self) {
        match self.store.save() {
            Ok(SaveOutcome::Added(id)) => {
                info!(%id, total = self.store.len(), "user added");
                if let Some(index) = self.store.position(id) {
                    self.selected_index = index;
                }
                self.finish_draft(USER_ADDED);
            }
            Ok(SaveOutcome::Updated(id)) => {
                info!(%id, "user updated");
                self.finish_draft(USER_UPDATED);
            }
            Err(StoreError::MissingFields) => {
                debug!("save rejected: missing fields");
                self.dialog = Some(Dialog::Notice(MISSING_FIELDS));
            }
            Err(StoreError::InvalidAge) => {
                debug!("save rejected: invalid age");
                self.dialog = Some(Dialog::Notice(INVALID_AGE));
            }
            Err(StoreError::IdsExhausted) => {
                warn!("save rejected: no user ids left");
                self.status_message = "No user ids left; the user was not added".to_string();
            }
            Err(e) => {
                warn!(%e, "save failed");
                self.focus = Focus::Table;
            }
        }
    }

    fn finish_draft(&mut self, notice: Notice) {
        self.focus = Focus::Table;
        self.form_focus = FormFocus::Field(DraftField::Name);
        self.status_message.clear();
        self.dialog = Some(Dialog::Notice(notice));
    }

    fn request_delete(&mut self, id: UserId) {
        let Some(user) = self.store.get(id) else {
            warn!(%id, "delete requested for unknown user");
            return;
        };

        self.dialog = Some(Dialog::ConfirmDelete {
            id,
            name: user.name.clone(),
            yes_selected: false,
        });
    }

    fn resolve_delete(&mut self, confirmation: Confirmation) {
        let Some(Dialog::ConfirmDelete { id, .. }) = self.dialog else {
            return;
        };
        self.dialog = None;

        match self.store.delete_record(id, confirmation) {
            Some(user) => {
                info!(id = %user.id, total = self.store.len(), "user deleted");
                self.clamp_selection();
                if !self.is_drafting() {
                    self.focus = Focus::Table;
                }
                self.dialog = Some(Dialog::Notice(USER_DELETED));
            }
            None => debug!(%id, ?confirmation, "delete not applied"),
        }
    }
}
