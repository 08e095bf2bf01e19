//! SeaORM entity modules for every table in the budget tracker.
//!
//! Seven domain families share one shape: a parent row owned by a user via
//! `user_id`, with zero or more child rows (documents, maintenance records,
//! claims, transactions) that cascade on delete. All monetary columns are
//! integer minor currency units; primary keys are server-assigned UUID
//! strings.

pub mod asset;
pub mod asset_document;
pub mod document_attachment;
pub mod expense;
pub mod income;
pub mod income_source;
pub mod insurance_claim;
pub mod insurance_document;
pub mod insurance_policy;
pub mod investment;
pub mod investment_asset;
pub mod investment_goal;
pub mod investment_transaction;
pub mod maintenance_document;
pub mod maintenance_record;
pub mod monthly_income_summary;
pub mod portfolio;
pub mod portfolio_investment;
pub mod tax_deduction;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::asset::Entity as Asset;
    pub use super::asset_document::Entity as AssetDocument;
    pub use super::document_attachment::Entity as DocumentAttachment;
    pub use super::expense::Entity as Expense;
    pub use super::income::Entity as Income;
    pub use super::income_source::Entity as IncomeSource;
    pub use super::insurance_claim::Entity as InsuranceClaim;
    pub use super::insurance_document::Entity as InsuranceDocument;
    pub use super::insurance_policy::Entity as InsurancePolicy;
    pub use super::investment::Entity as Investment;
    pub use super::investment_asset::Entity as InvestmentAsset;
    pub use super::investment_goal::Entity as InvestmentGoal;
    pub use super::investment_transaction::Entity as InvestmentTransaction;
    pub use super::maintenance_document::Entity as MaintenanceDocument;
    pub use super::maintenance_record::Entity as MaintenanceRecord;
    pub use super::monthly_income_summary::Entity as MonthlyIncomeSummary;
    pub use super::portfolio::Entity as Portfolio;
    pub use super::portfolio_investment::Entity as PortfolioInvestment;
    pub use super::tax_deduction::Entity as TaxDeduction;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        ModelTrait, Set,
    };

    use super::*;
    use crate::ownership;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys so cascade deletes fire
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn insert_user(db: &DatabaseConnection, id: &str, email: &str) -> user::Model {
        let now = Utc::now();
        user::ActiveModel {
            id: Set(id.to_string()),
            email: Set(email.to_string()),
            hashed_password: Set("$argon2id$test".to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert user")
    }

    async fn insert_asset(db: &DatabaseConnection, id: &str, user_id: &str) -> asset::Model {
        let now = Utc::now();
        asset::ActiveModel {
            id: Set(id.to_string()),
            user_id: Set(user_id.to_string()),
            name: Set("Family car".to_string()),
            category: Set(asset::AssetCategory::Vehicle),
            purchase_price: Set(1_850_000),
            current_value: Set(1_200_000),
            purchase_date: Set(now),
            warranty_end_date: Set(None),
            description: Set(None),
            location: Set(None),
            brand: Set(Some("Toyota".to_string())),
            model: Set(Some("Corolla".to_string())),
            serial_number: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert asset")
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let now = Utc::now();

        let user1 = insert_user(&db, "user-1", "user1@example.com").await;
        let user2 = insert_user(&db, "user-2", "user2@example.com").await;

        // Tax deduction with an attachment
        let deduction = tax_deduction::ActiveModel {
            id: Set("ded-1".to_string()),
            user_id: Set(user1.id.clone()),
            year: Set(2024),
            deduction_type: Set("Section 80C".to_string()),
            amount: Set(5000),
            description: Set(Some("ELSS investment".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        document_attachment::ActiveModel {
            id: Set("att-1".to_string()),
            user_id: Set(user1.id.clone()),
            tax_deduction_id: Set(deduction.id.clone()),
            file_name: Set("receipt.pdf".to_string()),
            file_type: Set("application/pdf".to_string()),
            file_size: Set(1024),
            file_url: Set(Some("https://files.example.com/receipt.pdf".to_string())),
            file_data: Set(None),
            document_type: Set("Purchase Receipt".to_string()),
            upload_date: Set(now),
        }
        .insert(&db)
        .await?;

        // Income source with an entry
        let source = income_source::ActiveModel {
            id: Set("src-1".to_string()),
            user_id: Set(user2.id.clone()),
            name: Set("Employer Inc.".to_string()),
            source_type: Set(income_source::IncomeSourceType::Salary),
            deduction_category: Set(Some(income_source::DeductionCategory::Section80C)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        income::ActiveModel {
            id: Set("inc-1".to_string()),
            user_id: Set(user2.id.clone()),
            income_source_id: Set(source.id.clone()),
            amount: Set(300_000),
            gross_amount: Set(Some(350_000)),
            net_amount: Set(Some(300_000)),
            date: Set(now),
            month: Set(1),
            year: Set(2024),
            description: Set(None),
            notes: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);

        let attachments = deduction
            .find_related(DocumentAttachment)
            .all(&db)
            .await?;
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].file_name, "receipt.pdf");

        let entries = source.find_related(Income).all(&db).await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, 300_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_owner_scoping() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let now = Utc::now();

        let owner = insert_user(&db, "owner", "owner@example.com").await;
        let intruder = insert_user(&db, "intruder", "intruder@example.com").await;

        tax_deduction::ActiveModel {
            id: Set("ded-owned".to_string()),
            user_id: Set(owner.id.clone()),
            year: Set(2024),
            deduction_type: Set("HRA".to_string()),
            amount: Set(120_000),
            description: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        // The owner sees the row
        let found =
            ownership::find_for_user::<TaxDeduction, _>(&db, &owner.id, "ded-owned").await?;
        assert!(found.is_some());

        // A different user sees nothing, same as for a missing id
        let hidden =
            ownership::find_for_user::<TaxDeduction, _>(&db, &intruder.id, "ded-owned").await?;
        assert!(hidden.is_none());

        let listed = ownership::list_for_user::<TaxDeduction, _>(&db, &intruder.id, 0, 100).await?;
        assert!(listed.is_empty());

        // Deleting through the wrong owner touches nothing
        let removed =
            ownership::delete_for_user::<TaxDeduction, _>(&db, &intruder.id, "ded-owned").await?;
        assert_eq!(removed, 0);
        assert_eq!(TaxDeduction::find().all(&db).await?.len(), 1);

        let removed =
            ownership::delete_for_user::<TaxDeduction, _>(&db, &owner.id, "ded-owned").await?;
        assert_eq!(removed, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_cascade_delete_asset_subtree() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let now = Utc::now();

        let user = insert_user(&db, "user-c", "cascade@example.com").await;
        let asset = insert_asset(&db, "asset-1", &user.id).await;

        asset_document::ActiveModel {
            id: Set("adoc-1".to_string()),
            user_id: Set(user.id.clone()),
            asset_id: Set(asset.id.clone()),
            file_name: Set("invoice.pdf".to_string()),
            file_type: Set("application/pdf".to_string()),
            file_size: Set(2048),
            file_url: Set(None),
            file_data: Set(Some("aGVsbG8=".to_string())),
            document_type: Set("Purchase Receipt".to_string()),
            upload_date: Set(now),
        }
        .insert(&db)
        .await?;

        let record = maintenance_record::ActiveModel {
            id: Set("maint-1".to_string()),
            user_id: Set(user.id.clone()),
            asset_id: Set(asset.id.clone()),
            date: Set(now),
            description: Set("Oil change".to_string()),
            cost: Set(Some(4_500)),
            service_provider: Set(Some("Garage".to_string())),
            next_maintenance_date: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        maintenance_document::ActiveModel {
            id: Set("mdoc-1".to_string()),
            user_id: Set(user.id.clone()),
            maintenance_record_id: Set(record.id.clone()),
            file_name: Set("service-report.pdf".to_string()),
            file_type: Set("application/pdf".to_string()),
            file_size: Set(512),
            file_url: Set(Some("https://files.example.com/report.pdf".to_string())),
            file_data: Set(None),
            document_type: Set("Service Report".to_string()),
            upload_date: Set(now),
        }
        .insert(&db)
        .await?;

        // Deleting the asset removes the whole subtree
        let removed = ownership::delete_for_user::<Asset, _>(&db, &user.id, &asset.id).await?;
        assert_eq!(removed, 1);

        assert!(AssetDocument::find().all(&db).await?.is_empty());
        assert!(MaintenanceRecord::find().all(&db).await?.is_empty());
        assert!(MaintenanceDocument::find().all(&db).await?.is_empty());

        Ok(())
    }
}
