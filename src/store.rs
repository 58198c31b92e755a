//! Client-side mirror of the server's post collection.
//!
//! The list is never edited in place. Every reload is issued a ticket and a
//! response replaces the whole list only if its ticket is newer than the last
//! one applied, so reloads that resolve out of order cannot roll the list back.

use crate::api::Post;

/// Sequence number of an issued reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReloadTicket(u64);

impl ReloadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    issued: ReloadTicket,
    applied: ReloadTicket,
}

impl PostStore {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Allocate the ticket for a new reload.
    pub fn issue(&mut self) -> ReloadTicket {
        self.issued = ReloadTicket(self.issued.0 + 1);
        self.issued
    }

    /// Most recently issued ticket.
    pub fn last_issued(&self) -> ReloadTicket {
        self.issued
    }

    /// Ticket of the snapshot currently held.
    pub fn last_applied(&self) -> ReloadTicket {
        self.applied
    }

    /// Replace the list with a loaded snapshot.
    ///
    /// Returns `false` and leaves the list untouched when a newer snapshot
    /// has already been applied.
    pub fn apply(&mut self, ticket: ReloadTicket, posts: Vec<Post>) -> bool {
        if ticket <= self.applied {
            return false;
        }
        self.posts = posts;
        self.applied = ticket;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PostId, PostStatus};

    fn post(id: &str) -> Post {
        Post {
            id: PostId::new(id).unwrap(),
            title: format!("title {id}"),
            content: "body".to_string(),
            status: PostStatus::Draft,
        }
    }

    #[test]
    fn tickets_increase() {
        let mut store = PostStore::default();
        let first = store.issue();
        let second = store.issue();
        assert!(second > first);
        assert_eq!(store.last_issued(), second);
    }

    #[test]
    fn apply_replaces_in_server_order() {
        let mut store = PostStore::default();
        let ticket = store.issue();
        assert!(store.apply(ticket, vec![post("b"), post("a")]));
        let ids: Vec<&str> = store.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn stale_snapshot_is_dropped() {
        let mut store = PostStore::default();
        let older = store.issue();
        let newer = store.issue();
        assert!(store.apply(newer, vec![post("new")]));
        assert!(!store.apply(older, vec![post("old")]));
        assert_eq!(store.posts()[0].id.as_str(), "new");
        assert_eq!(store.last_applied(), newer);
    }

    #[test]
    fn empty_snapshot_clears_list() {
        let mut store = PostStore::default();
        let first = store.issue();
        store.apply(first, vec![post("a")]);
        let second = store.issue();
        assert!(store.apply(second, Vec::new()));
        assert!(store.is_empty());
    }
}
