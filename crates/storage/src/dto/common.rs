use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Prefix every resource path is mounted under
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    /// Rows to skip, widened so any `u32` page stays in range
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).max(0) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

/// A navigational link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

/// Relation name to link map, rendered as `_links` on every resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rel` pointing at `path`, relative to [`API_PREFIX`]
    pub fn with(mut self, rel: &str, path: impl AsRef<str>) -> Self {
        self.0.insert(
            rel.to_string(),
            Link {
                href: format!("{}{}", API_PREFIX, path.as_ref()),
            },
        );
        self
    }

    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds() {
        let params = PaginationParams {
            page: 3,
            page_size: 20,
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);

        let params = PaginationParams {
            page: 0,
            page_size: 20,
        };
        assert!(params.validate().is_err());

        let params = PaginationParams {
            page: 1,
            page_size: 101,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn far_pages_do_not_overflow_the_offset() {
        let params = PaginationParams {
            page: 50_000_000,
            page_size: 100,
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.offset(), 4_999_999_900);

        let params = PaginationParams {
            page: u32::MAX,
            page_size: 100,
        };
        assert_eq!(params.offset(), (i64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 50, 101).total_pages, 3);
        assert_eq!(PaginationMeta::new(1, 50, 0).total_pages, 0);
    }

    #[test]
    fn links_are_prefixed_and_serialized_as_a_map() {
        let links = Links::new()
            .with("self", "/teams/1")
            .with("participants", "/teams/1/participants");

        assert_eq!(links.get("self"), Some("/api/teams/1"));

        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["participants"]["href"], "/api/teams/1/participants");
    }
}
