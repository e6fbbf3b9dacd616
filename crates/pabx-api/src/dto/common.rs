//! Common DTOs used across the API

use pabx_core::query::{Page, PageLink, QueryState};
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Create a success response with data and message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// One page of a list view, with everything the pagination bar needs
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// False when there is nothing to page through
    pub show_controls: bool,
    pub links: Vec<PageLink>,
    /// Query state the page was derived from
    pub query: QueryState,
}

impl<T> PageResponse<T> {
    pub fn new(page: Page<T>, query: QueryState) -> Self {
        Self {
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            show_controls: page.has_controls(),
            links: page.links(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            items: page.items,
            query,
        }
    }
}

/// Simple acknowledgement body
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Default for Ack {
    fn default() -> Self {
        Self { ok: true }
    }
}
