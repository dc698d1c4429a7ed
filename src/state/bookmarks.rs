use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use yew::functional::Reducible;

use crate::models::Company;
use super::Session;

/// Ids of the companies the current user bookmarked.
/// Loaded from the server after login, then only changed locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSet {
    ids: HashSet<String>,
    /// The server list has arrived
    loaded: bool,
    /// Toggles made before the server list arrived, re-applied on top of it
    pending: HashMap<String, bool>,
}

impl BookmarkSet {
    /// A set loaded from the server
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            loaded: true,
            pending: HashMap::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds or removes `id`; returns whether the set changed
    pub fn set(&mut self, id: &str, bookmarked: bool) -> bool {
        let mut changed = if bookmarked {
            self.ids.insert(id.to_string())
        } else {
            self.ids.remove(id)
        };
        if !self.loaded {
            changed |= self.pending.insert(id.to_string(), bookmarked) != Some(bookmarked);
        }
        changed
    }

    /// Bookmarked companies among `companies`, in list order
    pub fn filter<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies.iter().filter(|c| self.contains(&c.id)).collect()
    }

    fn loaded_with(&self, ids: Vec<String>) -> Self {
        let mut next = BookmarkSet::from_ids(ids);
        for (id, bookmarked) in &self.pending {
            next.set(id, *bookmarked);
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkAction {
    Replace(Vec<String>),
    Clear,
    Set { id: String, bookmarked: bool },
}

impl Reducible for BookmarkSet {
    type Action = BookmarkAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BookmarkAction::Replace(ids) => Rc::new(self.loaded_with(ids)),
            BookmarkAction::Clear => Rc::new(BookmarkSet::default()),
            BookmarkAction::Set { id, bookmarked } => {
                let mut next = (*self).clone();
                if next.set(&id, bookmarked) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

/// What a bookmark click turns into
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// The startup auth check is still running; the click is dropped
    SessionPending,
    LoginRequired,
    Apply(BookmarkAction),
}

/// Bookmarking needs a session; without one the caller shows the login dialog
pub fn gate_toggle(session: &Session, id: &str, bookmarked: bool) -> ToggleOutcome {
    if !session.checked {
        return ToggleOutcome::SessionPending;
    }
    if !session.is_logged_in() {
        return ToggleOutcome::LoginRequired;
    }
    ToggleOutcome::Apply(BookmarkAction::Set {
        id: id.to_string(),
        bookmarked,
    })
}
