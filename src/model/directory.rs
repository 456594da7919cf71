//! User directory editor: a person list plus a form that either creates a new
//! record or edits an existing one.

use super::field::TextField;
use super::ids::{IdGen, PersonId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Editor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Editor, Role::Admin];

    pub fn next(self) -> Self {
        match self {
            Role::User => Role::Editor,
            Role::Editor => Role::Admin,
            Role::Admin => Role::User,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Role::User => Role::Admin,
            Role::Editor => Role::User,
            Role::Admin => Role::Editor,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::User => "User",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

/// The editable buffer behind the directory form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: TextField,
    pub email: TextField,
    pub role: Role,
}

impl PersonForm {
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: TextField::from(person.name.as_str()),
            email: TextField::from(person.email.as_str()),
            role: person.role,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_blank() {
            return Err(FormError::MissingName);
        }
        if self.email.is_blank() {
            return Err(FormError::MissingEmail);
        }
        Ok(())
    }

    fn merge_into(&self, person: &mut Person) {
        person.name = self.name.as_str().to_string();
        person.email = self.email.as_str().to_string();
        person.role = self.role;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(PersonId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(PersonId),
    Updated(PersonId),
}

#[derive(Debug)]
pub struct DirectoryEditor {
    people: Vec<Person>,
    pub form: PersonForm,
    mode: EditMode,
    ids: IdGen,
}

impl DirectoryEditor {
    pub fn new(seed: Vec<Person>) -> Self {
        let ids = IdGen::after(seed.iter().map(|p| p.id));
        Self {
            people: seed,
            form: PersonForm::default(),
            mode: EditMode::Create,
            ids,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    pub fn start_edit(&mut self, person: &Person) {
        self.form = PersonForm::from_person(person);
        self.mode = EditMode::Edit(person.id);
        debug!(id = %person.id, "edit started");
    }

    /// Convenience for callers that only hold an id. Unknown ids are ignored.
    pub fn start_edit_by_id(&mut self, id: PersonId) {
        if let Some(person) = self.get(id).cloned() {
            self.start_edit(&person);
        }
    }

    /// Apply the form. A form missing a name or email is rejected and nothing
    /// changes.
    pub fn submit(&mut self) -> Result<Submitted, FormError> {
        self.form.validate()?;
        let outcome = match self.mode {
            EditMode::Edit(id) => {
                if let Some(person) = self.people.iter_mut().find(|p| p.id == id) {
                    self.form.merge_into(person);
                }
                debug!(%id, "person updated");
                Submitted::Updated(id)
            }
            EditMode::Create => {
                let id = self.ids.allocate();
                let mut person = Person {
                    id,
                    name: String::new(),
                    email: String::new(),
                    role: Role::default(),
                };
                self.form.merge_into(&mut person);
                self.people.push(person);
                debug!(%id, "person created");
                Submitted::Created(id)
            }
        };
        self.reset();
        Ok(outcome)
    }

    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.reset();
            debug!("edit cancelled");
        }
    }

    /// Remove a person. Removing the record under edit also leaves edit mode,
    /// otherwise a later submit would target a record that no longer exists.
    pub fn remove(&mut self, id: PersonId) {
        let before = self.people.len();
        self.people.retain(|p| p.id != id);
        if self.people.len() != before {
            debug!(%id, "person removed");
        }
        if self.mode == EditMode::Edit(id) {
            self.reset();
            debug!(%id, "edit cancelled by removal");
        }
    }

    fn reset(&mut self) {
        self.mode = EditMode::Create;
        self.form = PersonForm::default();
    }
}
