// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paginated calls list with page-local search.
//!
//! The page is fetched from the backend; the search term only narrows the
//! items already loaded for that page and never reaches the server.

use std::fmt;
use std::sync::Arc;

use callboard_core::{Call, CallsApi};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::generation::{GenerationGuard, LoadOutcome};
use crate::policy::{ViewFetch, fatal_message};
use crate::LoadStatus;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Whether `call` matches `term` (case-insensitive substring of the numbers
/// or the call id). An empty term matches everything.
pub fn matches_search(call: &Call, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    call.from_number.to_lowercase().contains(&needle)
        || call.to_number.to_lowercase().contains(&needle)
        || call.id.to_string().contains(&needle)
}

pub fn filter_calls<'a>(items: &'a [Call], term: &str) -> Vec<&'a Call> {
    items.iter().filter(|c| matches_search(c, term)).collect()
}

/// Position of the loaded page within the whole result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based index of the first item on the page, 0 when the page is empty.
    pub first: u64,
    pub last: u64,
    pub total: u64,
    pub page: u32,
    pub page_count: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Derived from the requested page and the server-reported total only.
    pub fn compute(page: u32, page_size: u32, total: u64) -> Self {
        let size = u64::from(page_size.max(1));
        let offset = u64::from(page.max(1) - 1) * size;
        let (first, last) = if offset >= total {
            (0, 0)
        } else {
            (offset + 1, (offset + size).min(total))
        };
        let page_count = u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX);
        Self {
            first,
            last,
            total,
            page,
            page_count,
            has_prev: page > 1,
            has_next: offset + size < total,
        }
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == 0 {
            write!(f, "0 of {}", self.total)
        } else {
            write!(f, "{}–{} of {}", self.first, self.last, self.total)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallsListState {
    pub page: u32,
    pub page_size: u32,
    pub search_term: String,
    /// Items of the loaded page, unfiltered.
    pub items: Vec<Call>,
    pub total: u64,
    pub status: LoadStatus,
}

impl CallsListState {
    fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search_term: String::new(),
            items: Vec::new(),
            total: 0,
            status: LoadStatus::Idle,
        }
    }

    /// Loaded items narrowed by the current search term.
    pub fn visible(&self) -> Vec<&Call> {
        filter_calls(&self.items, &self.search_term)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::compute(self.page, self.page_size, self.total)
    }
}

struct Inner {
    view: CallsListState,
    guard: GenerationGuard,
}

pub struct CallsListController {
    api: Arc<dyn CallsApi>,
    inner: Mutex<Inner>,
}

impl CallsListController {
    pub fn new(api: Arc<dyn CallsApi>, page_size: u32) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                view: CallsListState::new(page_size),
                guard: GenerationGuard::new(),
            }),
        }
    }

    pub async fn snapshot(&self) -> CallsListState {
        self.inner.lock().await.view.clone()
    }

    /// Reloads the current page.
    pub async fn load(&self) -> LoadOutcome {
        let page = self.inner.lock().await.view.page;
        self.go_to_page(page).await
    }

    /// Fetches `page` and replaces the loaded items with it.
    pub async fn go_to_page(&self, page: u32) -> LoadOutcome {
        let (generation, page_size) = {
            let mut inner = self.inner.lock().await;
            inner.view.page = page;
            inner.view.status = LoadStatus::Loading;
            (inner.guard.advance(), inner.view.page_size)
        };

        let result = self.api.list_calls(page, page_size).await;

        let mut inner = self.inner.lock().await;
        if !inner.guard.is_current(generation) {
            debug!(page, "discarding stale calls page");
            return LoadOutcome::Discarded;
        }
        match result {
            Ok(response) => {
                debug!(
                    page,
                    items = response.items.len(),
                    total = response.total,
                    "calls page loaded"
                );
                inner.view.items = response.items;
                inner.view.total = response.total;
                inner.view.status = LoadStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!(page, error = %e, "failed to load calls page");
                inner.view.items.clear();
                inner.view.total = 0;
                inner.view.status = LoadStatus::Failed(fatal_message(ViewFetch::CallsListPage, &e));
                LoadOutcome::Failed
            }
        }
    }

    /// Advances one page when the server reports more items.
    pub async fn next_page(&self) -> Option<LoadOutcome> {
        let pagination = self.inner.lock().await.view.pagination();
        if !pagination.has_next {
            return None;
        }
        Some(self.go_to_page(pagination.page + 1).await)
    }

    pub async fn prev_page(&self) -> Option<LoadOutcome> {
        let pagination = self.inner.lock().await.view.pagination();
        if !pagination.has_prev {
            return None;
        }
        Some(self.go_to_page(pagination.page - 1).await)
    }

    /// Updates the search term. No request is issued.
    pub async fn set_search(&self, term: impl Into<String>) {
        self.inner.lock().await.view.search_term = term.into();
    }
}
