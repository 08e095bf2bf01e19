use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(string(Users::Id).primary_key())
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::HashedPassword))
                    .col(boolean(Users::IsActive).default(true))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .col(timestamp_with_time_zone(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Create tax_deductions table
        manager
            .create_table(
                Table::create()
                    .table(TaxDeductions::Table)
                    .if_not_exists()
                    .col(string(TaxDeductions::Id).primary_key())
                    .col(string(TaxDeductions::UserId))
                    .col(integer(TaxDeductions::Year))
                    .col(string(TaxDeductions::DeductionType))
                    .col(big_integer(TaxDeductions::Amount))
                    .col(text_null(TaxDeductions::Description))
                    .col(timestamp_with_time_zone(TaxDeductions::CreatedAt))
                    .col(timestamp_with_time_zone(TaxDeductions::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tax_deductions_user")
                            .from(TaxDeductions::Table, TaxDeductions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create document_attachments table
        manager
            .create_table(
                Table::create()
                    .table(DocumentAttachments::Table)
                    .if_not_exists()
                    .col(string(DocumentAttachments::Id).primary_key())
                    .col(string(DocumentAttachments::UserId))
                    .col(string(DocumentAttachments::TaxDeductionId))
                    .col(string(DocumentAttachments::FileName))
                    .col(string(DocumentAttachments::FileType))
                    .col(big_integer(DocumentAttachments::FileSize))
                    .col(string_null(DocumentAttachments::FileUrl))
                    .col(text_null(DocumentAttachments::FileData))
                    .col(string(DocumentAttachments::DocumentType))
                    .col(timestamp_with_time_zone(DocumentAttachments::UploadDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_attachments_user")
                            .from(DocumentAttachments::Table, DocumentAttachments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_attachments_tax_deduction")
                            .from(
                                DocumentAttachments::Table,
                                DocumentAttachments::TaxDeductionId,
                            )
                            .to(TaxDeductions::Table, TaxDeductions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create assets table
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(string(Assets::Id).primary_key())
                    .col(string(Assets::UserId))
                    .col(string(Assets::Name))
                    .col(string(Assets::Category))
                    .col(big_integer(Assets::PurchasePrice))
                    .col(big_integer(Assets::CurrentValue))
                    .col(timestamp_with_time_zone(Assets::PurchaseDate))
                    .col(timestamp_with_time_zone_null(Assets::WarrantyEndDate))
                    .col(text_null(Assets::Description))
                    .col(string_null(Assets::Location))
                    .col(string_null(Assets::Brand))
                    .col(string_null(Assets::Model))
                    .col(string_null(Assets::SerialNumber))
                    .col(boolean(Assets::IsActive).default(true))
                    .col(timestamp_with_time_zone(Assets::CreatedAt))
                    .col(timestamp_with_time_zone(Assets::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_user")
                            .from(Assets::Table, Assets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create asset_documents table
        manager
            .create_table(
                Table::create()
                    .table(AssetDocuments::Table)
                    .if_not_exists()
                    .col(string(AssetDocuments::Id).primary_key())
                    .col(string(AssetDocuments::UserId))
                    .col(string(AssetDocuments::AssetId))
                    .col(string(AssetDocuments::FileName))
                    .col(string(AssetDocuments::FileType))
                    .col(big_integer(AssetDocuments::FileSize))
                    .col(string_null(AssetDocuments::FileUrl))
                    .col(text_null(AssetDocuments::FileData))
                    .col(string(AssetDocuments::DocumentType))
                    .col(timestamp_with_time_zone(AssetDocuments::UploadDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_documents_user")
                            .from(AssetDocuments::Table, AssetDocuments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_documents_asset")
                            .from(AssetDocuments::Table, AssetDocuments::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create maintenance_records table
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecords::Table)
                    .if_not_exists()
                    .col(string(MaintenanceRecords::Id).primary_key())
                    .col(string(MaintenanceRecords::UserId))
                    .col(string(MaintenanceRecords::AssetId))
                    .col(timestamp_with_time_zone(MaintenanceRecords::Date))
                    .col(text(MaintenanceRecords::Description))
                    .col(big_integer_null(MaintenanceRecords::Cost))
                    .col(string_null(MaintenanceRecords::ServiceProvider))
                    .col(timestamp_with_time_zone_null(
                        MaintenanceRecords::NextMaintenanceDate,
                    ))
                    .col(timestamp_with_time_zone(MaintenanceRecords::CreatedAt))
                    .col(timestamp_with_time_zone(MaintenanceRecords::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_user")
                            .from(MaintenanceRecords::Table, MaintenanceRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_asset")
                            .from(MaintenanceRecords::Table, MaintenanceRecords::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create maintenance_documents table
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceDocuments::Table)
                    .if_not_exists()
                    .col(string(MaintenanceDocuments::Id).primary_key())
                    .col(string(MaintenanceDocuments::UserId))
                    .col(string(MaintenanceDocuments::MaintenanceRecordId))
                    .col(string(MaintenanceDocuments::FileName))
                    .col(string(MaintenanceDocuments::FileType))
                    .col(big_integer(MaintenanceDocuments::FileSize))
                    .col(string_null(MaintenanceDocuments::FileUrl))
                    .col(text_null(MaintenanceDocuments::FileData))
                    .col(string(MaintenanceDocuments::DocumentType))
                    .col(timestamp_with_time_zone(MaintenanceDocuments::UploadDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_documents_user")
                            .from(MaintenanceDocuments::Table, MaintenanceDocuments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_documents_record")
                            .from(
                                MaintenanceDocuments::Table,
                                MaintenanceDocuments::MaintenanceRecordId,
                            )
                            .to(MaintenanceRecords::Table, MaintenanceRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create expenses table
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(string(Expenses::Id).primary_key())
                    .col(string(Expenses::UserId))
                    .col(big_integer(Expenses::Amount))
                    .col(string(Expenses::Description))
                    .col(string(Expenses::Category))
                    .col(timestamp_with_time_zone(Expenses::Date))
                    .col(boolean(Expenses::IsRecurring).default(false))
                    .col(string_null(Expenses::RecurrenceInterval))
                    .col(timestamp_with_time_zone_null(Expenses::NextDueDate))
                    .col(timestamp_with_time_zone_null(Expenses::EndDate))
                    .col(text_null(Expenses::Tags))
                    .col(text_null(Expenses::Notes))
                    .col(timestamp_with_time_zone(Expenses::CreatedAt))
                    .col(timestamp_with_time_zone(Expenses::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_user")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create income_sources table
        manager
            .create_table(
                Table::create()
                    .table(IncomeSources::Table)
                    .if_not_exists()
                    .col(string(IncomeSources::Id).primary_key())
                    .col(string(IncomeSources::UserId))
                    .col(string(IncomeSources::Name))
                    .col(string(IncomeSources::SourceType))
                    .col(string_null(IncomeSources::DeductionCategory))
                    .col(boolean(IncomeSources::IsActive).default(true))
                    .col(timestamp_with_time_zone(IncomeSources::CreatedAt))
                    .col(timestamp_with_time_zone(IncomeSources::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_sources_user")
                            .from(IncomeSources::Table, IncomeSources::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create incomes table
        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(string(Incomes::Id).primary_key())
                    .col(string(Incomes::UserId))
                    .col(string(Incomes::IncomeSourceId))
                    .col(big_integer(Incomes::Amount))
                    .col(big_integer_null(Incomes::GrossAmount))
                    .col(big_integer_null(Incomes::NetAmount))
                    .col(timestamp_with_time_zone(Incomes::Date))
                    .col(integer(Incomes::Month))
                    .col(integer(Incomes::Year))
                    .col(text_null(Incomes::Description))
                    .col(text_null(Incomes::Notes))
                    .col(timestamp_with_time_zone(Incomes::CreatedAt))
                    .col(timestamp_with_time_zone(Incomes::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_incomes_user")
                            .from(Incomes::Table, Incomes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_incomes_income_source")
                            .from(Incomes::Table, Incomes::IncomeSourceId)
                            .to(IncomeSources::Table, IncomeSources::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create monthly_income_summaries table
        manager
            .create_table(
                Table::create()
                    .table(MonthlyIncomeSummaries::Table)
                    .if_not_exists()
                    .col(string(MonthlyIncomeSummaries::Id).primary_key())
                    .col(string(MonthlyIncomeSummaries::UserId))
                    .col(integer(MonthlyIncomeSummaries::Month))
                    .col(integer(MonthlyIncomeSummaries::Year))
                    .col(big_integer(MonthlyIncomeSummaries::TotalGrossIncome))
                    .col(big_integer(MonthlyIncomeSummaries::TotalNetIncome))
                    .col(big_integer(MonthlyIncomeSummaries::TotalDeductions))
                    .col(text_null(MonthlyIncomeSummaries::IncomeSources))
                    .col(timestamp_with_time_zone(MonthlyIncomeSummaries::CreatedAt))
                    .col(timestamp_with_time_zone(MonthlyIncomeSummaries::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_income_summaries_user")
                            .from(
                                MonthlyIncomeSummaries::Table,
                                MonthlyIncomeSummaries::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One summary row per user and period
        manager
            .create_index(
                Index::create()
                    .name("idx_monthly_income_summaries_user_period")
                    .table(MonthlyIncomeSummaries::Table)
                    .col(MonthlyIncomeSummaries::UserId)
                    .col(MonthlyIncomeSummaries::Month)
                    .col(MonthlyIncomeSummaries::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create insurance_policies table
        manager
            .create_table(
                Table::create()
                    .table(InsurancePolicies::Table)
                    .if_not_exists()
                    .col(string(InsurancePolicies::Id).primary_key())
                    .col(string(InsurancePolicies::UserId))
                    .col(string(InsurancePolicies::PolicyNumber))
                    .col(string(InsurancePolicies::PolicyType))
                    .col(string(InsurancePolicies::InsuranceCompany))
                    .col(big_integer(InsurancePolicies::PremiumAmount))
                    .col(string(InsurancePolicies::PremiumFrequency))
                    .col(big_integer_null(InsurancePolicies::SumAssured))
                    .col(timestamp_with_time_zone(InsurancePolicies::StartDate))
                    .col(timestamp_with_time_zone_null(InsurancePolicies::EndDate))
                    .col(timestamp_with_time_zone_null(
                        InsurancePolicies::NextPremiumDate,
                    ))
                    .col(boolean(InsurancePolicies::IsActive).default(true))
                    .col(text_null(InsurancePolicies::Description))
                    .col(text_null(InsurancePolicies::Notes))
                    .col(timestamp_with_time_zone(InsurancePolicies::CreatedAt))
                    .col(timestamp_with_time_zone(InsurancePolicies::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_policies_user")
                            .from(InsurancePolicies::Table, InsurancePolicies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create insurance_documents table
        manager
            .create_table(
                Table::create()
                    .table(InsuranceDocuments::Table)
                    .if_not_exists()
                    .col(string(InsuranceDocuments::Id).primary_key())
                    .col(string(InsuranceDocuments::UserId))
                    .col(string(InsuranceDocuments::PolicyId))
                    .col(string(InsuranceDocuments::FileName))
                    .col(string(InsuranceDocuments::FileType))
                    .col(big_integer(InsuranceDocuments::FileSize))
                    .col(string_null(InsuranceDocuments::FileUrl))
                    .col(text_null(InsuranceDocuments::FileData))
                    .col(string(InsuranceDocuments::DocumentType))
                    .col(timestamp_with_time_zone(InsuranceDocuments::UploadDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_documents_user")
                            .from(InsuranceDocuments::Table, InsuranceDocuments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_documents_policy")
                            .from(InsuranceDocuments::Table, InsuranceDocuments::PolicyId)
                            .to(InsurancePolicies::Table, InsurancePolicies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create insurance_claims table
        manager
            .create_table(
                Table::create()
                    .table(InsuranceClaims::Table)
                    .if_not_exists()
                    .col(string(InsuranceClaims::Id).primary_key())
                    .col(string(InsuranceClaims::UserId))
                    .col(string(InsuranceClaims::PolicyId))
                    .col(string(InsuranceClaims::ClaimNumber))
                    .col(big_integer(InsuranceClaims::ClaimAmount))
                    .col(big_integer_null(InsuranceClaims::ApprovedAmount))
                    .col(timestamp_with_time_zone(InsuranceClaims::ClaimDate))
                    .col(string(InsuranceClaims::Status))
                    .col(text(InsuranceClaims::Description))
                    .col(text_null(InsuranceClaims::Notes))
                    .col(timestamp_with_time_zone(InsuranceClaims::CreatedAt))
                    .col(timestamp_with_time_zone(InsuranceClaims::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_claims_user")
                            .from(InsuranceClaims::Table, InsuranceClaims::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_claims_policy")
                            .from(InsuranceClaims::Table, InsuranceClaims::PolicyId)
                            .to(InsurancePolicies::Table, InsurancePolicies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create investment_assets table
        manager
            .create_table(
                Table::create()
                    .table(InvestmentAssets::Table)
                    .if_not_exists()
                    .col(string(InvestmentAssets::Id).primary_key())
                    .col(string(InvestmentAssets::UserId))
                    .col(string(InvestmentAssets::Name))
                    .col(string(InvestmentAssets::AssetType))
                    .col(string_null(InvestmentAssets::Category))
                    .col(big_integer(InvestmentAssets::CurrentPrice))
                    .col(string(InvestmentAssets::RiskLevel))
                    .col(boolean(InvestmentAssets::IsActive).default(true))
                    .col(string_null(InvestmentAssets::Symbol))
                    .col(string_null(InvestmentAssets::FundHouse))
                    .col(string_null(InvestmentAssets::SchemeCode))
                    .col(double_null(InvestmentAssets::ExpenseRatio))
                    .col(double_null(InvestmentAssets::InterestRate))
                    .col(timestamp_with_time_zone_null(
                        InvestmentAssets::MaturityDate,
                    ))
                    .col(string_null(InvestmentAssets::Purity))
                    .col(string_null(InvestmentAssets::Exchange))
                    .col(timestamp_with_time_zone(InvestmentAssets::CreatedAt))
                    .col(timestamp_with_time_zone(InvestmentAssets::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investment_assets_user")
                            .from(InvestmentAssets::Table, InvestmentAssets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create investments table
        manager
            .create_table(
                Table::create()
                    .table(Investments::Table)
                    .if_not_exists()
                    .col(string(Investments::Id).primary_key())
                    .col(string(Investments::UserId))
                    .col(string(Investments::AssetId))
                    .col(string(Investments::InvestmentType))
                    .col(big_integer(Investments::Amount))
                    .col(double(Investments::Units))
                    .col(big_integer(Investments::PurchasePrice))
                    .col(timestamp_with_time_zone(Investments::PurchaseDate))
                    .col(integer_null(Investments::SipDate))
                    .col(timestamp_with_time_zone_null(Investments::MaturityDate))
                    .col(integer_null(Investments::LockInPeriod))
                    .col(boolean(Investments::IsActive).default(true))
                    .col(text_null(Investments::Notes))
                    .col(timestamp_with_time_zone(Investments::CreatedAt))
                    .col(timestamp_with_time_zone(Investments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investments_user")
                            .from(Investments::Table, Investments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investments_asset")
                            .from(Investments::Table, Investments::AssetId)
                            .to(InvestmentAssets::Table, InvestmentAssets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create investment_transactions table
        manager
            .create_table(
                Table::create()
                    .table(InvestmentTransactions::Table)
                    .if_not_exists()
                    .col(string(InvestmentTransactions::Id).primary_key())
                    .col(string(InvestmentTransactions::UserId))
                    .col(string(InvestmentTransactions::InvestmentId))
                    .col(string(InvestmentTransactions::TransactionType))
                    .col(big_integer(InvestmentTransactions::Amount))
                    .col(double(InvestmentTransactions::Units))
                    .col(big_integer(InvestmentTransactions::PricePerUnit))
                    .col(timestamp_with_time_zone(InvestmentTransactions::Date))
                    .col(text_null(InvestmentTransactions::Notes))
                    .col(timestamp_with_time_zone(InvestmentTransactions::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investment_transactions_user")
                            .from(
                                InvestmentTransactions::Table,
                                InvestmentTransactions::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investment_transactions_investment")
                            .from(
                                InvestmentTransactions::Table,
                                InvestmentTransactions::InvestmentId,
                            )
                            .to(Investments::Table, Investments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create portfolios table
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(string(Portfolios::Id).primary_key())
                    .col(string(Portfolios::UserId))
                    .col(string(Portfolios::Name))
                    .col(text_null(Portfolios::Description))
                    .col(text_null(Portfolios::TargetAllocation))
                    .col(timestamp_with_time_zone(Portfolios::CreatedAt))
                    .col(timestamp_with_time_zone(Portfolios::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_user")
                            .from(Portfolios::Table, Portfolios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create portfolio_investments table (join table)
        manager
            .create_table(
                Table::create()
                    .table(PortfolioInvestments::Table)
                    .if_not_exists()
                    .col(string(PortfolioInvestments::PortfolioId))
                    .col(string(PortfolioInvestments::InvestmentId))
                    .col(double_null(PortfolioInvestments::Weight))
                    .primary_key(
                        Index::create()
                            .name("pk_portfolio_investments")
                            .col(PortfolioInvestments::PortfolioId)
                            .col(PortfolioInvestments::InvestmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_investments_portfolio")
                            .from(
                                PortfolioInvestments::Table,
                                PortfolioInvestments::PortfolioId,
                            )
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_investments_investment")
                            .from(
                                PortfolioInvestments::Table,
                                PortfolioInvestments::InvestmentId,
                            )
                            .to(Investments::Table, Investments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create investment_goals table
        manager
            .create_table(
                Table::create()
                    .table(InvestmentGoals::Table)
                    .if_not_exists()
                    .col(string(InvestmentGoals::Id).primary_key())
                    .col(string(InvestmentGoals::UserId))
                    .col(string(InvestmentGoals::Name))
                    .col(big_integer(InvestmentGoals::TargetAmount))
                    .col(big_integer(InvestmentGoals::CurrentAmount).default(0))
                    .col(timestamp_with_time_zone(InvestmentGoals::TargetDate))
                    .col(text_null(InvestmentGoals::Description))
                    .col(timestamp_with_time_zone(InvestmentGoals::CreatedAt))
                    .col(timestamp_with_time_zone(InvestmentGoals::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investment_goals_user")
                            .from(InvestmentGoals::Table, InvestmentGoals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(InvestmentGoals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioInvestments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(InvestmentTransactions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Investments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InvestmentAssets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InsuranceClaims::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InsuranceDocuments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InsurancePolicies::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(MonthlyIncomeSummaries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(IncomeSources::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceDocuments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRecords::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AssetDocuments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DocumentAttachments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TaxDeductions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    HashedPassword,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TaxDeductions {
    Table,
    Id,
    UserId,
    Year,
    DeductionType,
    Amount,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DocumentAttachments {
    Table,
    Id,
    UserId,
    TaxDeductionId,
    FileName,
    FileType,
    FileSize,
    FileUrl,
    FileData,
    DocumentType,
    UploadDate,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    UserId,
    Name,
    Category,
    PurchasePrice,
    CurrentValue,
    PurchaseDate,
    WarrantyEndDate,
    Description,
    Location,
    Brand,
    Model,
    SerialNumber,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssetDocuments {
    Table,
    Id,
    UserId,
    AssetId,
    FileName,
    FileType,
    FileSize,
    FileUrl,
    FileData,
    DocumentType,
    UploadDate,
}

#[derive(DeriveIden)]
enum MaintenanceRecords {
    Table,
    Id,
    UserId,
    AssetId,
    Date,
    Description,
    Cost,
    ServiceProvider,
    NextMaintenanceDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MaintenanceDocuments {
    Table,
    Id,
    UserId,
    MaintenanceRecordId,
    FileName,
    FileType,
    FileSize,
    FileUrl,
    FileData,
    DocumentType,
    UploadDate,
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    UserId,
    Amount,
    Description,
    Category,
    Date,
    IsRecurring,
    RecurrenceInterval,
    NextDueDate,
    EndDate,
    Tags,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum IncomeSources {
    Table,
    Id,
    UserId,
    Name,
    SourceType,
    DeductionCategory,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Incomes {
    Table,
    Id,
    UserId,
    IncomeSourceId,
    Amount,
    GrossAmount,
    NetAmount,
    Date,
    Month,
    Year,
    Description,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MonthlyIncomeSummaries {
    Table,
    Id,
    UserId,
    Month,
    Year,
    TotalGrossIncome,
    TotalNetIncome,
    TotalDeductions,
    IncomeSources,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InsurancePolicies {
    Table,
    Id,
    UserId,
    PolicyNumber,
    PolicyType,
    InsuranceCompany,
    PremiumAmount,
    PremiumFrequency,
    SumAssured,
    StartDate,
    EndDate,
    NextPremiumDate,
    IsActive,
    Description,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InsuranceDocuments {
    Table,
    Id,
    UserId,
    PolicyId,
    FileName,
    FileType,
    FileSize,
    FileUrl,
    FileData,
    DocumentType,
    UploadDate,
}

#[derive(DeriveIden)]
enum InsuranceClaims {
    Table,
    Id,
    UserId,
    PolicyId,
    ClaimNumber,
    ClaimAmount,
    ApprovedAmount,
    ClaimDate,
    Status,
    Description,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvestmentAssets {
    Table,
    Id,
    UserId,
    Name,
    AssetType,
    Category,
    CurrentPrice,
    RiskLevel,
    IsActive,
    Symbol,
    FundHouse,
    SchemeCode,
    ExpenseRatio,
    InterestRate,
    MaturityDate,
    Purity,
    Exchange,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Investments {
    Table,
    Id,
    UserId,
    AssetId,
    InvestmentType,
    Amount,
    Units,
    PurchasePrice,
    PurchaseDate,
    SipDate,
    MaturityDate,
    LockInPeriod,
    IsActive,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvestmentTransactions {
    Table,
    Id,
    UserId,
    InvestmentId,
    TransactionType,
    Amount,
    Units,
    PricePerUnit,
    Date,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    Name,
    Description,
    TargetAllocation,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PortfolioInvestments {
    Table,
    PortfolioId,
    InvestmentId,
    Weight,
}

#[derive(DeriveIden)]
enum InvestmentGoals {
    Table,
    Id,
    UserId,
    Name,
    TargetAmount,
    CurrentAmount,
    TargetDate,
    Description,
    CreatedAt,
    UpdatedAt,
}
