use super::IUserRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::RepoError,
};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use spike_reminder_domain::{Event, Reminder, User, ID};

pub struct MongoUserRepo {
    db: Database,
    collection: Collection<UserMongo>,
}

impl MongoUserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection("users"),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for MongoUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        mongo_repo::insert::<_, UserMongo>(&self.collection, user).await
    }

    async fn replace(&self, user: &User) -> anyhow::Result<()> {
        let matched = mongo_repo::replace::<_, UserMongo>(&self.collection, user).await?;
        if !matched {
            return Err(RepoError::UserNotFound(user.id.clone()).into());
        }
        Ok(())
    }

    async fn find_with_pending_reminders(&self) -> anyhow::Result<Vec<User>> {
        // Matches if any reminder in any of the events is unsent
        let filter = doc! {
            "events.reminders.sent": false
        };
        mongo_repo::find_many_by::<_, UserMongo>(&self.collection, filter).await
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        mongo_repo::delete_many_by::<_, UserMongo>(&self.collection, doc! {}).await
    }

    async fn check_connection(&self) -> anyhow::Result<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    remind_at: i64,
    sent: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct EventMongo {
    name: String,
    start_ts: i64,
    reminders: Vec<ReminderMongo>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserMongo {
    _id: String,
    name: String,
    email: String,
    events: Vec<EventMongo>,
}

impl MongoDocument<User> for UserMongo {
    fn to_domain(self) -> anyhow::Result<User> {
        let mut user = User::new(self.name, self.email);
        user.id = self._id.parse::<ID>()?;
        for e in self.events {
            let mut event = Event::new(e.name, e.start_ts);
            for r in e.reminders {
                event.restore_reminder(Reminder::from_parts(r.remind_at, r.sent));
            }
            user.restore_event(event);
        }
        Ok(user)
    }

    fn from_domain(user: &User) -> Self {
        Self {
            _id: user.id.as_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            events: user
                .events()
                .map(|e| EventMongo {
                    name: e.name.clone(),
                    start_ts: e.start_ts,
                    reminders: e
                        .reminders()
                        .map(|r| ReminderMongo {
                            remind_at: r.remind_at(),
                            sent: r.is_sent(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_between_document_and_user() {
        let mut user = User::new("User0", "user@mymail.com");
        let mut event = Event::new("Event0", 1000);
        event.add_reminder(200, 0);
        event.add_reminder(400, 0);
        user.add_event(event).unwrap();
        user.mark_reminder_sent("Event0", 200);

        let raw = UserMongo::from_domain(&user);
        assert_eq!(raw._id, user.id.as_string());
        assert_eq!(raw.events.len(), 1);
        assert_eq!(raw.events[0].reminders.len(), 2);
        assert!(raw.events[0].reminders[0].sent);
        assert!(!raw.events[0].reminders[1].sent);

        let restored = raw.to_domain().expect("To map document to user");
        assert_eq!(restored, user);
    }

    #[test]
    fn rejects_document_with_malformed_id() {
        let raw = UserMongo {
            _id: "malformed".into(),
            name: "User0".into(),
            email: "user@mymail.com".into(),
            events: vec![],
        };
        assert!(raw.to_domain().is_err());
    }
}
