//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        data::NewCategory, errors::CategoriesServiceError, records::CategoryRecord,
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if category.name.trim().is_empty() {
            return Err(CategoriesServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Retrieves all categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::categories::records::CategoryUuid,
        test::{TestContext, helpers::new_category},
    };

    use super::*;

    #[tokio::test]
    async fn create_category_returns_created_record() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = CategoryUuid::new();

        let category = ctx
            .categories
            .create_category(NewCategory {
                uuid,
                name: "Burgers".to_string(),
                addons: Some("cheese, bacon".to_string()),
                removable_items: Some("onion".to_string()),
            })
            .await?;

        assert_eq!(category.uuid, uuid);
        assert_eq!(category.name, "Burgers");
        assert_eq!(category.addons.as_deref(), Some("cheese, bacon"));
        assert_eq!(category.removable_items.as_deref(), Some("onion"));

        Ok(())
    }

    #[tokio::test]
    async fn create_category_duplicate_name_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.categories.create_category(new_category("Pizza")).await?;

        let result = ctx.categories.create_category(new_category("Pizza")).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_category_blank_name_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.create_category(new_category("  ")).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_categories_orders_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.categories.create_category(new_category("Salads")).await?;
        ctx.categories.create_category(new_category("Burgers")).await?;

        let names: Vec<String> = ctx
            .categories
            .list_categories()
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(names, ["Burgers", "Salads"]);

        Ok(())
    }
}
