use crate::store::Action;

/// Oldest notifications are dropped beyond this
pub const MAX_NOTIFICATIONS: usize = 10;

///
/// A user-visible error message, identified by its message key.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message_key: String,
}

impl Notification {
    pub fn new(message_key: &str) -> Self {
        Notification { message_key: message_key.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertState {
    notifications: Vec<Notification>,
}

impl AlertState {
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

pub fn reducer(mut state: AlertState, action: &Action) -> AlertState {
    match action {
        Action::ErrorOccurred(notification) => {
            state.notifications.push(notification.clone());
            if state.notifications.len() > MAX_NOTIFICATIONS {
                let overflow = state.notifications.len() - MAX_NOTIFICATIONS;
                state.notifications.drain(..overflow);
            }
            state
        }
        Action::ErrorsDismissed => AlertState::default(),
        _ => state,
    }
}

#[cfg(test)]
mod test {
    use crate::store::Action;

    use super::{reducer, AlertState, Notification, MAX_NOTIFICATIONS};

    #[test]
    fn test_errors_queue_and_dismiss() {
        let state = reducer(AlertState::default(), &Action::ErrorOccurred(Notification::new("A")));
        let state = reducer(state, &Action::ErrorOccurred(Notification::new("B")));
        assert_eq!(2, state.notifications().len());
        assert_eq!(Some(&Notification::new("B")), state.latest());

        let state = reducer(state, &Action::ErrorsDismissed);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let state = reducer(AlertState::default(), &Action::ErrorOccurred(Notification::new("A")));
        let next = reducer(state.clone(), &Action::TransactionsLoaded(vec![]));
        assert_eq!(state, next);
    }

    #[test]
    fn test_queue_keeps_newest() {
        let mut state = AlertState::default();
        for i in 0..MAX_NOTIFICATIONS + 3 {
            state = reducer(state, &Action::ErrorOccurred(Notification::new(&format!("ERROR_{}", i))));
        }

        assert_eq!(MAX_NOTIFICATIONS, state.notifications().len());
        assert_eq!(Some(&Notification::new("ERROR_3")), state.notifications().first());
        assert_eq!(Some(&Notification::new(&format!("ERROR_{}", MAX_NOTIFICATIONS + 2))), state.latest());
    }
}
