use crate::domain::entities::SongList;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum AppEvent {
    SongListReady(Arc<SongList>),
    StatusUpdate(String),
    SearchFailed(String),
}

type Listener = Box<dyn Fn(&AppEvent) + Send + Sync>;

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn publish(&self, event: AppEvent) {
        match self.listeners.lock() {
            Ok(listeners) => {
                for listener in listeners.iter() {
                    listener(&event);
                }
            }
            Err(e) => tracing::error!("Event bus poisoned, dropping {:?}: {}", event, e),
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
