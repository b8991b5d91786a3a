//! Offset pagination shared by list endpoints

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// `?skip=&limit=` query parameters
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Number of rows to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum number of rows to return (default 10, max 100)
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageQuery::default();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_clamping() {
        let page = PageQuery {
            skip: Some(-5),
            limit: Some(10_000),
        };
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), MAX_LIMIT);

        let page = PageQuery {
            skip: Some(20),
            limit: Some(0),
        };
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 1);
    }
}
