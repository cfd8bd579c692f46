//! Platform search criteria and their translation into a [`StockQuery`].
//!
//! The read API accepts the platform's generic filter-group search request but
//! only one shape is meaningful for stock lookups: a single `eq` or `in` filter
//! on `product_id`. Anything else is rejected with a [`CriteriaError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storehook_core::DomainError;

use crate::query::StockQuery;

/// The only filter field supported by stock item lookups.
pub const PRODUCT_ID_FIELD: &str = "product_id";

/// Page size used when the request leaves it unset (0).
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const CONDITION_EQ: &str = "eq";
const CONDITION_IN: &str = "in";

/// A single filter clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub value: String,
    #[serde(default = "default_condition_type")]
    pub condition_type: String,
}

impl Filter {
    pub fn new(field: impl Into<String>, condition_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            condition_type: condition_type.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, CONDITION_EQ, value)
    }

    pub fn in_list(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, CONDITION_IN, value)
    }
}

fn default_condition_type() -> String {
    CONDITION_EQ.to_string()
}

/// Filters combined with OR semantics by the platform; groups combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

/// Paginated, filter-group search request as sent by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub filter_groups: Vec<FilterGroup>,
    /// 0 means "use the default page size".
    #[serde(default)]
    pub page_size: u32,
    #[serde(default = "default_current_page")]
    pub current_page: u32,
}

fn default_current_page() -> u32 {
    1
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            filter_groups: Vec::new(),
            page_size: 0,
            current_page: default_current_page(),
        }
    }
}

impl SearchCriteria {
    pub fn new(filter_groups: Vec<FilterGroup>) -> Self {
        Self {
            filter_groups,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page_size: u32, current_page: u32) -> Self {
        self.page_size = page_size;
        self.current_page = current_page;
        self
    }
}

/// Rejection reasons for search criteria.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Only filtering by productId is supported")]
    UnsupportedField(String),

    #[error("Only \"eq\" and \"in\" condition types are supported")]
    UnsupportedCondition(String),

    #[error("Please define at least one product filter")]
    NoProductFilter,
}

impl From<CriteriaError> for DomainError {
    fn from(err: CriteriaError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Translate platform search criteria into a stock query.
///
/// Filters are scanned group by group, in order. The first `eq` or `in`
/// filter on `product_id` ends the scan; later filters, including those in
/// later groups, are never inspected.
pub fn translate(criteria: &SearchCriteria) -> Result<StockQuery, CriteriaError> {
    let product_ids = scan_product_ids(&criteria.filter_groups)?;

    if product_ids.is_empty() {
        return Err(CriteriaError::NoProductFilter);
    }

    let page_size = if criteria.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        criteria.page_size
    };
    // Widened so the largest page numbers still give the exact offset.
    let offset = u64::from(page_size) * u64::from(criteria.current_page.saturating_sub(1));

    Ok(StockQuery::new(product_ids, offset, page_size))
}

fn scan_product_ids(groups: &[FilterGroup]) -> Result<Vec<String>, CriteriaError> {
    let mut products: Vec<String> = Vec::new();

    for group in groups {
        for filter in &group.filters {
            if filter.field != PRODUCT_ID_FIELD {
                return Err(CriteriaError::UnsupportedField(filter.field.clone()));
            }

            match filter.condition_type.as_str() {
                CONDITION_EQ => {
                    products.push(filter.value.clone());
                    return Ok(products);
                }
                CONDITION_IN => {
                    // Split values go in front of anything collected so far.
                    let mut merged: Vec<String> =
                        filter.value.split(',').map(str::to_string).collect();
                    merged.append(&mut products);
                    return Ok(merged);
                }
                other => return Err(CriteriaError::UnsupportedCondition(other.to_string())),
            }
        }
    }

    Ok(products)
}
