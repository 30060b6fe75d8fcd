// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::ListFilter;
use crate::records::{ChatMessage, ConversationSummary, TeamMember};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// Returns the text a query is matched against.
    fn search_text(&self) -> String;
}

impl Searchable for ConversationSummary {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.last_message_preview)
    }
}

impl Searchable for ChatMessage {
    fn search_text(&self) -> String {
        [
            self.text.as_deref(),
            self.file_name.as_deref(),
            self.file_meta.as_deref(),
            self.link_label.as_deref(),
        ]
        .map(Option::unwrap_or_default)
        .join(" ")
    }
}

impl Searchable for TeamMember {
    fn search_text(&self) -> String {
        self.name.clone()
    }
}

/// Returns whether `item` matches `query`, ignoring case and surrounding spaces.
///
/// A blank query matches everything.
#[must_use]
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle: String = query.trim().to_lowercase();
    needle.is_empty() || item.search_text().to_lowercase().contains(&needle)
}

/// Returns the records matching `query`, in source order.
#[must_use]
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    ListFilter::new()
        .keep(|item: &T| matches_query(item, query))
        .apply(items)
}
