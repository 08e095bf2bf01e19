use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{assets, auth, expenses, health, income, insurance, investments, tax_deductions};
use crate::schemas::{ApiDoc, AppState};

/// Build the application router. Static segments (e.g. `/sources`,
/// `/summaries`) are registered alongside `/:id` routes; the router matches
/// static paths first.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Tax deductions
        .route(
            "/api/tax-deductions",
            post(tax_deductions::create_tax_deduction).get(tax_deductions::get_tax_deductions),
        )
        .route(
            "/api/tax-deductions/:id",
            get(tax_deductions::get_tax_deduction)
                .put(tax_deductions::update_tax_deduction)
                .delete(tax_deductions::delete_tax_deduction),
        )
        // Assets and maintenance
        .route("/api/assets", post(assets::create_asset).get(assets::get_assets))
        .route(
            "/api/assets/:id",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route(
            "/api/assets/:asset_id/maintenance",
            post(assets::create_maintenance_record).get(assets::get_maintenance_records),
        )
        .route(
            "/api/assets/:asset_id/maintenance/:id",
            get(assets::get_maintenance_record)
                .put(assets::update_maintenance_record)
                .delete(assets::delete_maintenance_record),
        )
        // Expenses
        .route(
            "/api/expenses",
            post(expenses::create_expense).get(expenses::get_expenses),
        )
        .route(
            "/api/expenses/:id",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        // Income sources, entries and summaries
        .route(
            "/api/income/sources",
            post(income::create_income_source).get(income::get_income_sources),
        )
        .route(
            "/api/income/sources/:id",
            get(income::get_income_source)
                .put(income::update_income_source)
                .delete(income::delete_income_source),
        )
        .route("/api/income/summaries", get(income::get_income_summaries))
        .route("/api/income", post(income::create_income).get(income::get_incomes))
        .route(
            "/api/income/:id",
            get(income::get_income)
                .put(income::update_income)
                .delete(income::delete_income),
        )
        // Insurance policies and claims
        .route(
            "/api/insurance",
            post(insurance::create_policy).get(insurance::get_policies),
        )
        .route(
            "/api/insurance/:id",
            get(insurance::get_policy)
                .put(insurance::update_policy)
                .delete(insurance::delete_policy),
        )
        .route(
            "/api/insurance/:policy_id/claims",
            post(insurance::create_claim).get(insurance::get_claims),
        )
        .route(
            "/api/insurance/:policy_id/claims/:id",
            get(insurance::get_claim)
                .put(insurance::update_claim)
                .delete(insurance::delete_claim),
        )
        // Investment assets, holdings, transactions, portfolios and goals
        .route(
            "/api/investments/assets",
            post(investments::create_investment_asset).get(investments::get_investment_assets),
        )
        .route(
            "/api/investments/assets/:id",
            get(investments::get_investment_asset)
                .put(investments::update_investment_asset)
                .delete(investments::delete_investment_asset),
        )
        .route(
            "/api/investments/portfolios",
            post(investments::create_portfolio).get(investments::get_portfolios),
        )
        .route(
            "/api/investments/portfolios/:id",
            get(investments::get_portfolio)
                .put(investments::update_portfolio)
                .delete(investments::delete_portfolio),
        )
        .route(
            "/api/investments/goals",
            post(investments::create_investment_goal).get(investments::get_investment_goals),
        )
        .route(
            "/api/investments/goals/:id",
            get(investments::get_investment_goal)
                .put(investments::update_investment_goal)
                .delete(investments::delete_investment_goal),
        )
        .route(
            "/api/investments",
            post(investments::create_investment).get(investments::get_investments),
        )
        .route(
            "/api/investments/:id",
            get(investments::get_investment)
                .put(investments::update_investment)
                .delete(investments::delete_investment),
        )
        .route(
            "/api/investments/:id/transactions",
            post(investments::create_investment_transaction)
                .get(investments::get_investment_transactions),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
