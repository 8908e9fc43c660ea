//! Confluence API types.

mod page;

pub use page::{Ancestor, Body, Page, PageResults, Space, Storage, Version};
