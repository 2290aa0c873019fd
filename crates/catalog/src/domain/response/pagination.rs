use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Pagination {
    pub page: i32,
    pub limit: i32,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    /// `pages` is `ceil(total / limit)`; zero rows means zero pages.
    pub fn new(page: i32, limit: i32, total: i64) -> Self {
        let limit_wide = i64::from(limit.max(1));
        let pages = (total + limit_wide - 1) / limit_wide;

        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}
