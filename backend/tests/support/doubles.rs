//! Recording doubles for the registration driven ports.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use user_registration::domain::ports::{
    EmailSender, NotificationError, UserPersistenceError, UserRepository,
};
use user_registration::{User, UserId};

/// Stored users plus the last identifier handed out.
#[derive(Default)]
struct Store {
    last_id: u64,
    users: BTreeMap<UserId, User>,
}

/// In-memory repository that records saved candidates and can be told to
/// fail the next save.
#[derive(Clone, Default)]
pub(crate) struct RecordingUserRepository {
    store: Arc<Mutex<Store>>,
    saves: Arc<Mutex<Vec<User>>>,
    save_failure: Arc<Mutex<Option<UserPersistenceError>>>,
}

impl RecordingUserRepository {
    pub(crate) fn saves(&self) -> Vec<User> {
        self.saves.lock().expect("saves lock").clone()
    }

    pub(crate) fn fail_next_save(&self, error: UserPersistenceError) {
        *self.save_failure.lock().expect("save failure lock") = Some(error);
    }

    pub(crate) fn stored(&self) -> Vec<User> {
        self.store
            .lock()
            .expect("store lock")
            .users
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserRepository for RecordingUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        self.saves.lock().expect("saves lock").push(user.clone());
        if let Some(error) = self.save_failure.lock().expect("save failure lock").take() {
            return Err(error);
        }

        let mut store = self.store.lock().expect("store lock");
        store.last_id += 1;
        let saved = user.clone().with_id(UserId::new(store.last_id));
        store.users.insert(saved.id(), saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: UserId) -> Result<User, UserPersistenceError> {
        self.store
            .lock()
            .expect("store lock")
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }
}

/// Configurable success or failure outcome for RecordingEmailSender.
#[derive(Clone)]
pub(crate) enum SendResponse {
    Ok,
    Err(NotificationError),
}

/// Email sender that records every `(address, body)` pair it is handed.
#[derive(Clone)]
pub(crate) struct RecordingEmailSender {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    response: Arc<Mutex<SendResponse>>,
}

impl RecordingEmailSender {
    pub(crate) fn new(response: SendResponse) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("send calls lock").clone()
    }

    pub(crate) fn set_response(&self, response: SendResponse) {
        *self.response.lock().expect("send response lock") = response;
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: &str, content: &str) -> Result<(), NotificationError> {
        self.calls
            .lock()
            .expect("send calls lock")
            .push((email.to_owned(), content.to_owned()));
        match self.response.lock().expect("send response lock").clone() {
            SendResponse::Ok => Ok(()),
            SendResponse::Err(error) => Err(error),
        }
    }
}
