//! Auth-state change notifications. The client adapter emits the new session
//! (or `None`) on sign-in, sign-out, and session restore; the auth provider
//! subscribes once on mount and unsubscribes when its scope is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use super::types::{AuthUser, Session};

/// `Some` on sign-in and restore, `None` on sign-out.
pub type AuthChange = Option<(AuthUser, Session)>;

type Callback = Rc<dyn Fn(&AuthChange)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Handle returned by [`subscribe`]; dropping it without calling
/// `unsubscribe` keeps the callback alive for the rest of the session.
pub struct AuthSubscription {
    id: u64,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        REGISTRY.with(|cell| {
            cell.borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        });
    }
}

pub fn subscribe(callback: impl Fn(&AuthChange) + 'static) -> AuthSubscription {
    REGISTRY.with(|cell| {
        let mut registry = cell.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, Rc::new(callback)));
        AuthSubscription { id }
    })
}

/// Delivers a change to every live subscriber. The list is snapshotted
/// first, so a callback may itself subscribe or unsubscribe.
pub fn emit(change: &AuthChange) {
    let callbacks: Vec<Callback> = REGISTRY.with(|cell| {
        cell.borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    });

    for callback in callbacks {
        callback(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn change() -> AuthChange {
        Some((
            AuthUser {
                id: "u1".to_string(),
                email: None,
            },
            Session {
                access_token: "tok".to_string(),
                token_type: None,
                expires_in: None,
                refresh_token: None,
            },
        ))
    }

    #[test]
    fn subscriber_receives_emitted_changes() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let subscription = subscribe(move |_| counter.set(counter.get() + 1));

        emit(&change());
        emit(&None);
        assert_eq!(seen.get(), 2);

        subscription.unsubscribe();
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let subscription = subscribe(move |_| counter.set(counter.get() + 1));

        emit(&None);
        subscription.unsubscribe();
        emit(&None);

        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn changes_fan_out_to_every_subscriber() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let first_counter = Rc::clone(&first);
        let second_counter = Rc::clone(&second);

        let a = subscribe(move |_| first_counter.set(first_counter.get() + 1));
        let b = subscribe(move |change| {
            if change.is_none() {
                second_counter.set(second_counter.get() + 1);
            }
        });

        emit(&None);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);

        a.unsubscribe();
        b.unsubscribe();
    }
}
