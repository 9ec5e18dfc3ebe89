//! Canned counterpart replies.

use gighub_core::config::DEFAULT_REPLY_POOL;

/// Fixed, ordered list of stock replies used round-robin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPool {
    replies: Vec<String>,
}

impl ReplyPool {
    /// Creates a pool, falling back to the built-in replies when `replies`
    /// is empty.
    pub fn new(replies: Vec<String>) -> Self {
        if replies.is_empty() {
            tracing::warn!("[Session] Empty reply pool configured, using built-in replies");
            return Self::default();
        }
        Self { replies }
    }

    /// Reply for the given cursor position, wrapping around the pool.
    pub fn reply_at(&self, cursor: usize) -> &str {
        &self.replies[cursor % self.replies.len()]
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

impl Default for ReplyPool {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLY_POOL.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_at_wraps() {
        let pool = ReplyPool::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(pool.reply_at(0), "a");
        assert_eq!(pool.reply_at(1), "b");
        assert_eq!(pool.reply_at(2), "a");
        assert_eq!(pool.reply_at(7), "b");
    }

    #[test]
    fn test_empty_pool_falls_back_to_defaults() {
        let pool = ReplyPool::new(Vec::new());
        assert_eq!(pool.len(), DEFAULT_REPLY_POOL.len());
        assert_eq!(pool.reply_at(0), DEFAULT_REPLY_POOL[0]);
    }
}
