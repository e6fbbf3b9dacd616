//! Notification center
//!
//! Collects toasts until the front-end drains them. The queue is bounded;
//! once full the oldest toast is dropped.

use pabx_core::models::{Notification, NotificationLevel};
use pabx_core::traits::NotificationEmitter;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct NotificationCenter {
    queue: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take every pending toast, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.lock().drain(..).collect()
    }

    /// Pending toasts without removing them
    pub fn pending(&self) -> Vec<Notification> {
        self.queue.lock().iter().cloned().collect()
    }

    /// Most recent toast, if any
    pub fn last(&self) -> Option<Notification> {
        self.queue.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(50)
    }
}

impl NotificationEmitter for NotificationCenter {
    fn emit(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(title = %notification.title, message = %notification.message, "Notification")
            }
            NotificationLevel::Warning => {
                warn!(title = %notification.title, message = %notification.message, "Notification")
            }
            NotificationLevel::Error => {
                error!(title = %notification.title, message = %notification.message, "Notification")
            }
        }

        let mut queue = self.queue.lock();
        if queue.len() == self.capacity {
            if let Some(dropped) = queue.pop_front() {
                debug!(id = %dropped.id, "Notification queue full, dropping oldest");
            }
        }
        queue.push_back(notification);
    }
}
