use crate::{
    event::Event,
    shared::entity::{Entity, ID},
};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    #[error("The user already has an event named: `{0}`")]
    DuplicateEvent(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    events: BTreeMap<String, Event>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            email: email.into(),
            events: BTreeMap::new(),
        }
    }

    /// Adds an `Event` to the `User`. `Event` names are unique per `User`,
    /// so an `Event` with an already used name is rejected and the existing
    /// one is left as is.
    pub fn add_event(&mut self, event: Event) -> Result<(), UserError> {
        if self.events.contains_key(&event.name) {
            return Err(UserError::DuplicateEvent(event.name));
        }
        self.events.insert(event.name.clone(), event);
        Ok(())
    }

    /// Restores a persisted `Event`
    pub fn restore_event(&mut self, event: Event) {
        self.events.insert(event.name.clone(), event);
    }

    /// Events ordered by name
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    pub fn has_unexecuted_reminders(&self) -> bool {
        self.events.values().any(|e| e.has_unexecuted_reminders())
    }

    /// Returns `false` if the `User` has no such `Reminder`
    pub fn mark_reminder_sent(&mut self, event_name: &str, remind_at: i64) -> bool {
        match self.events.get_mut(event_name) {
            Some(event) => event.mark_reminder_sent(remind_at),
            None => false,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
