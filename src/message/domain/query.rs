//! Query options for listing messages.

use super::{MessageDomainError, MessageRecord};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Number of messages returned when a query sets no limit.
pub const DEFAULT_LIMIT: usize = 30;

/// Largest limit a query may request.
pub const MAX_LIMIT: usize = 100;

/// Direction of the `createdAt` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = MessageDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(MessageDomainError::UnknownSortOrder(value.to_owned())),
        }
    }
}

/// Criteria a message must satisfy to be listed.
///
/// The default filter matches every message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    text_contains: Option<String>,
    created_before: Option<DateTime<Utc>>,
}

impl MessageFilter {
    /// Creates a filter matching every message.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            text_contains: None,
            created_before: None,
        }
    }

    /// Restricts the filter to messages whose text contains `needle`,
    /// ignoring case.
    #[must_use]
    pub fn with_text_containing(mut self, needle: impl Into<String>) -> Self {
        self.text_contains = Some(needle.into().to_lowercase());
        self
    }

    /// Restricts the filter to messages created strictly before `cutoff`.
    #[must_use]
    pub const fn with_created_before(mut self, cutoff: DateTime<Utc>) -> Self {
        self.created_before = Some(cutoff);
        self
    }

    /// Returns whether `record` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &MessageRecord) -> bool {
        let text_ok = self.text_contains.as_deref().is_none_or(|needle| {
            record.text().as_str().to_lowercase().contains(needle)
        });
        let time_ok = self
            .created_before
            .is_none_or(|cutoff| record.created_at() < cutoff);
        text_ok && time_ok
    }
}

/// Filter, ordering, and limit for a message listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery {
    filter: MessageFilter,
    order: SortOrder,
    limit: usize,
}

impl MessageQuery {
    /// Creates a query matching everything, newest first, limited to
    /// [`DEFAULT_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: MessageFilter::all(),
            order: SortOrder::Descending,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Replaces the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: MessageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the ordering.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the limit, clamped to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    /// Returns the filter.
    #[must_use]
    pub const fn filter(&self) -> &MessageFilter {
        &self.filter
    }

    /// Returns the ordering.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the effective limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Filters, orders, and truncates `records`, which must be supplied in
    /// insertion order.
    ///
    /// Records sharing a timestamp keep insertion order when ascending and
    /// reverse insertion order when descending.
    #[must_use]
    pub fn apply<'a>(
        &self,
        records: impl IntoIterator<Item = &'a MessageRecord>,
    ) -> Vec<MessageRecord> {
        let mut matched: Vec<MessageRecord> = records
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .cloned()
            .collect();
        match self.order {
            SortOrder::Ascending => matched.sort_by_key(MessageRecord::created_at),
            SortOrder::Descending => {
                matched.reverse();
                matched.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
            }
        }
        matched.truncate(self.limit);
        matched
    }
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self::new()
    }
}
