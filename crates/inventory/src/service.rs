//! Stock item read API: validate criteria, then delegate to the repository.

use thiserror::Error;
use tracing::debug;

use storehook_core::DomainError;

use crate::criteria::{translate, CriteriaError, SearchCriteria};
use crate::item::StockItemPage;
use crate::repository::{RepositoryError, StockItemRepository};

#[derive(Debug, Error)]
pub enum StockItemsError {
    /// Criteria were malformed; the message is meant for the API caller.
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StockItemsError {
    /// Domain view of the failure, if it is one the caller can fix.
    pub fn as_domain(&self) -> Option<DomainError> {
        match self {
            StockItemsError::Criteria(e) => Some(e.clone().into()),
            StockItemsError::Repository(_) => None,
        }
    }
}

/// Paged stock item lookup by product ids.
#[derive(Debug)]
pub struct StockItems<R> {
    repository: R,
}

impl<R> StockItems<R>
where
    R: StockItemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[cfg(test)]
    fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_list(&self, criteria: &SearchCriteria) -> Result<StockItemPage, StockItemsError> {
        let query = translate(criteria)?;
        debug!(
            product_ids = ?query.product_ids(),
            offset = query.offset(),
            limit = query.limit(),
            "looking up stock items"
        );
        Ok(self.repository.get_list(&query)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::criteria::{Filter, FilterGroup};
    use crate::query::StockQuery;

    #[derive(Default)]
    struct RecordingRepository {
        seen: Mutex<Vec<StockQuery>>,
    }

    impl StockItemRepository for RecordingRepository {
        fn get_list(&self, query: &StockQuery) -> Result<StockItemPage, RepositoryError> {
            self.seen.lock().unwrap().push(query.clone());
            Ok(StockItemPage::empty())
        }
    }

    struct FailingRepository;

    impl StockItemRepository for FailingRepository {
        fn get_list(&self, _query: &StockQuery) -> Result<StockItemPage, RepositoryError> {
            Err(RepositoryError::Backend("connection reset".to_string()))
        }
    }

    #[test]
    fn delegates_translated_query() {
        let service = StockItems::new(RecordingRepository::default());
        let criteria = SearchCriteria::new(vec![FilterGroup::new(vec![Filter::in_list(
            "product_id",
            "4,5",
        )])])
        .with_page(10, 2);

        service.get_list(&criteria).unwrap();

        let seen = service.repository().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].product_ids(), ["4", "5"]);
        assert_eq!(seen[0].offset(), 10);
        assert_eq!(seen[0].limit(), 10);
    }

    #[test]
    fn invalid_criteria_never_reach_the_repository() {
        let service = StockItems::new(RecordingRepository::default());

        let err = service.get_list(&SearchCriteria::default()).unwrap_err();
        assert!(matches!(err, StockItemsError::Criteria(CriteriaError::NoProductFilter)));
        assert_eq!(
            err.as_domain(),
            Some(DomainError::validation("Please define at least one product filter"))
        );
        assert!(service.repository().seen.lock().unwrap().is_empty());
    }

    #[test]
    fn repository_failures_propagate() {
        let service = StockItems::new(FailingRepository);
        let criteria =
            SearchCriteria::new(vec![FilterGroup::new(vec![Filter::eq("product_id", "1")])]);

        let err = service.get_list(&criteria).unwrap_err();
        assert!(matches!(err, StockItemsError::Repository(_)));
        assert!(err.as_domain().is_none());
    }
}
