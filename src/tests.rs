#[cfg(test)]
mod tests {
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{register_and_login, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Budget App API is running!");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = json!({ "email": "alice@example.com", "password": "correct-horse" });
        let response = server.post("/api/auth/register").json(&request).await;
        response.assert_status_ok();

        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["email"], "alice@example.com");
        assert!(body.data.get("hashed_password").is_none());

        let response = server.post("/api/auth/register").json(&request).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Email already registered");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "email": "not-an-email", "password": "short" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["email"].is_array());
        assert!(body["field_errors"]["password"].is_array());
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        server
            .post("/api/auth/register")
            .json(&json!({ "email": "bob@example.com", "password": "correct-horse" }))
            .await
            .assert_status_ok();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "bob@example.com", "password": "wrong-horse" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Incorrect email or password");

        // Unknown email fails the same way
        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "nobody@example.com", "password": "correct-horse" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "carol@example.com").await;

        let response = server.get("/api/auth/me").authorization_bearer(&token).await;
        response.assert_status_ok();

        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["email"], "carol@example.com");
        assert_eq!(body.data["is_active"], true);
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/expenses").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .get("/api/expenses")
            .authorization_bearer("garbage-token")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tax_deduction_crud_with_attachments() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "dave@example.com").await;

        let response = server
            .post("/api/tax-deductions")
            .authorization_bearer(&token)
            .json(&json!({
                "year": 2025,
                "deduction_type": "Section 80C",
                "amount": 150000_00,
                "description": "ELSS investment",
                "attachments": [
                    {
                        "file_name": "receipt.pdf",
                        "file_type": "application/pdf",
                        "file_size": 1024,
                        "file_url": "https://files.example.com/receipt.pdf",
                        "document_type": "Receipt"
                    },
                    {
                        "file_name": "statement.pdf",
                        "file_type": "application/pdf",
                        "file_size": 2048,
                        "file_data": "JVBERi0xLjQ=",
                        "document_type": "Statement"
                    }
                ]
            }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<serde_json::Value> = response.json();
        let id = body.data["id"].as_str().unwrap().to_string();
        let attachments = body.data["attachments"].as_array().unwrap();
        assert_eq!(attachments.len(), 2);
        assert_eq!(
            attachments[0]["file_url"],
            "https://files.example.com/receipt.pdf"
        );
        assert!(attachments[0].get("file_data").is_none());
        assert_eq!(attachments[1]["file_data"], "JVBERi0xLjQ=");

        // Attachments come back on reads too
        let response = server
            .get(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["attachments"].as_array().unwrap().len(), 2);

        // Explicit null clears the description; omitted fields stay put
        let response = server
            .put(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .json(&json!({ "amount": 120000_00, "description": null }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["amount"], 120000_00);
        assert!(body.data["description"].is_null());
        assert_eq!(body.data["year"], 2025);

        let response = server
            .delete(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();

        let response = server
            .get(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_rejects_out_of_range_values() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "olga@example.com").await;

        let response = server
            .post("/api/tax-deductions")
            .authorization_bearer(&token)
            .json(&json!({
                "year": 2025,
                "deduction_type": "Section 80C",
                "amount": 5000_00
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let id = body.data["id"].as_str().unwrap().to_string();

        // The same rules that guard create apply to partial updates
        let response = server
            .put(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .json(&json!({ "amount": -500, "year": 99999 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["amount"].is_array());
        assert!(body["field_errors"]["year"].is_array());

        // Nothing was persisted
        let response = server
            .get(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["amount"], 5000_00);
        assert_eq!(body.data["year"], 2025);

        let response = server
            .post("/api/expenses")
            .authorization_bearer(&token)
            .json(&json!({
                "amount": 800,
                "description": "Bus pass",
                "category": "Transport",
                "date": "2025-08-01T08:00:00Z"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let expense_id = body.data["id"].as_str().unwrap().to_string();

        let response = server
            .put(&format!("/api/expenses/{expense_id}"))
            .authorization_bearer(&token)
            .json(&json!({ "amount": -1 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["amount"].is_array());
    }

    #[tokio::test]
    async fn test_repeated_partial_update_is_idempotent() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "pat@example.com").await;

        let response = server
            .post("/api/tax-deductions")
            .authorization_bearer(&token)
            .json(&json!({
                "year": 2025,
                "deduction_type": "HRA",
                "amount": 24000_00,
                "description": "Rent"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let id = body.data["id"].as_str().unwrap().to_string();

        let patch = json!({ "amount": 20000_00, "description": "Revised rent" });
        let response = server
            .put(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .json(&patch)
            .await;
        response.assert_status_ok();
        let first: ApiResponse<serde_json::Value> = response.json();

        let response = server
            .put(&format!("/api/tax-deductions/{id}"))
            .authorization_bearer(&token)
            .json(&patch)
            .await;
        response.assert_status_ok();
        let second: ApiResponse<serde_json::Value> = response.json();

        // Replaying the same patch changes nothing but the touch timestamp
        let mut first = first.data;
        let mut second = second.data;
        first.as_object_mut().unwrap().remove("updated_at");
        second.as_object_mut().unwrap().remove("updated_at");
        assert_eq!(first, second);
        assert_eq!(first["amount"], 20000_00);
        assert_eq!(first["description"], "Revised rent");
        assert_eq!(first["year"], 2025);
    }

    #[tokio::test]
    async fn test_records_are_invisible_across_users() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token_a = register_and_login(&server, "owner@example.com").await;
        let token_b = register_and_login(&server, "other@example.com").await;

        let response = server
            .post("/api/expenses")
            .authorization_bearer(&token_a)
            .json(&json!({
                "amount": 4500,
                "description": "Groceries",
                "category": "Food",
                "date": "2025-08-01T10:00:00Z"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let id = body.data["id"].as_str().unwrap().to_string();

        // Another user's row reads as absent, not forbidden
        let response = server
            .get(&format!("/api/expenses/{id}"))
            .authorization_bearer(&token_b)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server
            .delete(&format!("/api/expenses/{id}"))
            .authorization_bearer(&token_b)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/api/expenses").authorization_bearer(&token_b).await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 0);

        // The owner still sees it
        let response = server
            .get(&format!("/api/expenses/{id}"))
            .authorization_bearer(&token_a)
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_expense_tags_round_trip() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "erin@example.com").await;

        let response = server
            .post("/api/expenses")
            .authorization_bearer(&token)
            .json(&json!({
                "amount": 1200,
                "description": "Team lunch",
                "category": "Food",
                "date": "2025-08-02T13:00:00Z",
                "tags": ["work", "reimbursable"]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["tags"], json!(["work", "reimbursable"]));

        let response = server
            .put(&format!("/api/expenses/{id}"))
            .authorization_bearer(&token)
            .json(&json!({ "tags": null }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.data["tags"].is_null());
    }

    #[tokio::test]
    async fn test_asset_delete_removes_maintenance_subtree() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "frank@example.com").await;

        let response = server
            .post("/api/assets")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "City flat",
                "category": "Real Estate",
                "purchase_price": 45000000_00i64,
                "current_value": 52000000_00i64,
                "purchase_date": "2020-01-15T00:00:00Z",
                "location": "Pune",
                "documents": [{
                    "file_name": "deed.pdf",
                    "file_type": "application/pdf",
                    "file_size": 4096,
                    "file_url": "https://files.example.com/deed.pdf",
                    "document_type": "Purchase Deed"
                }]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let asset_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["documents"].as_array().unwrap().len(), 1);

        let response = server
            .post(&format!("/api/assets/{asset_id}/maintenance"))
            .authorization_bearer(&token)
            .json(&json!({
                "date": "2025-03-10T00:00:00Z",
                "description": "Waterproofing",
                "cost": 25000_00,
                "service_provider": "FixIt Ltd",
                "documents": [{
                    "file_name": "invoice.pdf",
                    "file_type": "application/pdf",
                    "file_size": 512,
                    "file_data": "aW52b2ljZQ==",
                    "document_type": "Invoice"
                }]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let record_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["documents"].as_array().unwrap().len(), 1);

        let response = server
            .delete(&format!("/api/assets/{asset_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();

        // The whole subtree is gone with the asset
        let response = server
            .get(&format!("/api/assets/{asset_id}/maintenance/{record_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_income_summary_write_through() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "grace@example.com").await;

        let response = server
            .post("/api/income/sources")
            .authorization_bearer(&token)
            .json(&json!({ "name": "Acme Corp", "source_type": "Salary" }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let source_id = body.data["id"].as_str().unwrap().to_string();

        let response = server
            .post("/api/income")
            .authorization_bearer(&token)
            .json(&json!({
                "income_source_id": source_id,
                "amount": 90000_00,
                "gross_amount": 100000_00,
                "net_amount": 90000_00,
                "date": "2025-08-28T00:00:00Z",
                "month": 8,
                "year": 2025
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let income_id = body.data["id"].as_str().unwrap().to_string();

        let response = server
            .post("/api/income")
            .authorization_bearer(&token)
            .json(&json!({
                "income_source_id": source_id,
                "amount": 15000_00,
                "date": "2025-08-30T00:00:00Z",
                "month": 8,
                "year": 2025
            }))
            .await;
        response.assert_status_ok();

        let response = server
            .get("/api/income/summaries?year=2025&month=8")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let summaries = body.data.as_array().unwrap();
        assert_eq!(summaries.len(), 1);
        // Entry without explicit gross/net counts at its amount
        assert_eq!(summaries[0]["total_gross_income"], 115000_00);
        assert_eq!(summaries[0]["total_net_income"], 105000_00);
        assert_eq!(summaries[0]["total_deductions"], 10000_00);
        assert_eq!(summaries[0]["income_sources"][&source_id], 105000_00);

        // Deleting an entry refreshes the rollup
        let response = server
            .delete(&format!("/api/income/{income_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();

        let response = server
            .get("/api/income/summaries?year=2025&month=8")
            .authorization_bearer(&token)
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        let summaries = body.data.as_array().unwrap();
        assert_eq!(summaries[0]["total_gross_income"], 15000_00);
        assert_eq!(summaries[0]["total_deductions"], 0);
    }

    #[tokio::test]
    async fn test_income_source_delete_drops_empty_summaries() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "heidi@example.com").await;

        let response = server
            .post("/api/income/sources")
            .authorization_bearer(&token)
            .json(&json!({ "name": "Side gig", "source_type": "Freelance" }))
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        let source_id = body.data["id"].as_str().unwrap().to_string();

        server
            .post("/api/income")
            .authorization_bearer(&token)
            .json(&json!({
                "income_source_id": source_id,
                "amount": 20000_00,
                "date": "2025-07-05T00:00:00Z",
                "month": 7,
                "year": 2025
            }))
            .await
            .assert_status_ok();

        let response = server
            .delete(&format!("/api/income/sources/{source_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();

        // The cascade removed the entries and the empty rollup with them
        let response = server.get("/api/income").authorization_bearer(&token).await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 0);

        let response = server
            .get("/api/income/summaries?year=2025&month=7")
            .authorization_bearer(&token)
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_income_rejects_bad_month() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "ivan@example.com").await;

        let response = server
            .post("/api/income/sources")
            .authorization_bearer(&token)
            .json(&json!({ "name": "Rent", "source_type": "Rental" }))
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        let source_id = body.data["id"].as_str().unwrap().to_string();

        let response = server
            .post("/api/income")
            .authorization_bearer(&token)
            .json(&json!({
                "income_source_id": source_id,
                "amount": 1000,
                "date": "2025-08-01T00:00:00Z",
                "month": 13,
                "year": 2025
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["month"].is_array());
    }

    #[tokio::test]
    async fn test_insurance_policy_and_claim_lifecycle() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "judy@example.com").await;

        let response = server
            .post("/api/insurance")
            .authorization_bearer(&token)
            .json(&json!({
                "policy_number": "LIC-12345",
                "policy_type": "Life Insurance",
                "insurance_company": "LIC",
                "premium_amount": 25000_00,
                "premium_frequency": "Half Yearly",
                "sum_assured": 5000000_00,
                "start_date": "2024-04-01T00:00:00Z",
                "documents": [{
                    "file_name": "policy.pdf",
                    "file_type": "application/pdf",
                    "file_size": 8192,
                    "file_url": "https://files.example.com/policy.pdf",
                    "document_type": "Policy Document"
                }]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let policy_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["policy_type"], "Life Insurance");
        assert_eq!(body.data["premium_frequency"], "Half Yearly");
        assert_eq!(body.data["documents"].as_array().unwrap().len(), 1);

        let response = server
            .post(&format!("/api/insurance/{policy_id}/claims"))
            .authorization_bearer(&token)
            .json(&json!({
                "claim_number": "CLM-001",
                "claim_amount": 120000_00,
                "claim_date": "2025-06-15T00:00:00Z",
                "description": "Hospitalization"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let claim_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["status"], "pending");
        assert!(body.data["approved_amount"].is_null());

        // Settlement
        let response = server
            .put(&format!("/api/insurance/{policy_id}/claims/{claim_id}"))
            .authorization_bearer(&token)
            .json(&json!({ "status": "approved", "approved_amount": 100000_00 }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "approved");
        assert_eq!(body.data["approved_amount"], 100000_00);

        // A claim is only reachable through its own policy
        let response = server
            .get(&format!("/api/insurance/{policy_id}/claims"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_investment_holding_and_transactions() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "kim@example.com").await;

        let response = server
            .post("/api/investments/assets")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "Nifty 50 Index Fund",
                "asset_type": "Mutual Fund",
                "current_price": 245_50,
                "risk_level": "Moderate",
                "fund_house": "UTI",
                "expense_ratio": 0.2
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let asset_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["asset_type"], "Mutual Fund");

        let response = server
            .post("/api/investments")
            .authorization_bearer(&token)
            .json(&json!({
                "asset_id": asset_id,
                "investment_type": "SIP",
                "amount": 10000_00,
                "units": 40.73,
                "purchase_price": 245_50,
                "purchase_date": "2025-08-05T00:00:00Z",
                "sip_date": 5
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let investment_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["investment_type"], "SIP");

        let response = server
            .post(&format!("/api/investments/{investment_id}/transactions"))
            .authorization_bearer(&token)
            .json(&json!({
                "transaction_type": "buy",
                "amount": 10000_00,
                "units": 40.73,
                "price_per_unit": 245_50,
                "date": "2025-08-05T00:00:00Z"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["transaction_type"], "buy");

        let response = server
            .get(&format!("/api/investments/{investment_id}/transactions"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 1);

        // Holdings cannot reference someone else's asset
        let token_other = register_and_login(&server, "leo@example.com").await;
        let response = server
            .post("/api/investments")
            .authorization_bearer(&token_other)
            .json(&json!({
                "asset_id": asset_id,
                "investment_type": "Lumpsum",
                "amount": 500_00,
                "units": 2.0,
                "purchase_price": 245_50,
                "purchase_date": "2025-08-06T00:00:00Z"
            }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_portfolio_replaces_holdings_wholesale() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "mallory@example.com").await;

        let response = server
            .post("/api/investments/assets")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "Gold ETF",
                "asset_type": "Gold",
                "current_price": 6200_00,
                "risk_level": "Low"
            }))
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        let asset_id = body.data["id"].as_str().unwrap().to_string();

        let mut holding_ids = Vec::new();
        for _ in 0..2 {
            let response = server
                .post("/api/investments")
                .authorization_bearer(&token)
                .json(&json!({
                    "asset_id": asset_id,
                    "investment_type": "One-time Purchase",
                    "amount": 6200_00,
                    "units": 1.0,
                    "purchase_price": 6200_00,
                    "purchase_date": "2025-08-01T00:00:00Z"
                }))
                .await;
            let body: ApiResponse<serde_json::Value> = response.json();
            holding_ids.push(body.data["id"].as_str().unwrap().to_string());
        }

        let response = server
            .post("/api/investments/portfolios")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "Safety net",
                "target_allocation": { "Gold": 100 },
                "investments": [{ "investment_id": holding_ids[0], "weight": 1.0 }]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let portfolio_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["investments"].as_array().unwrap().len(), 1);
        assert_eq!(body.data["target_allocation"]["Gold"], 100);

        // Supplying a new list replaces the old links entirely
        let response = server
            .put(&format!("/api/investments/portfolios/{portfolio_id}"))
            .authorization_bearer(&token)
            .json(&json!({
                "investments": [{ "investment_id": holding_ids[1], "weight": 0.5 }]
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let linked = body.data["investments"].as_array().unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0]["investment_id"], holding_ids[1].as_str());
        assert_eq!(linked[0]["weight"], 0.5);
    }

    #[tokio::test]
    async fn test_investment_goal_crud() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();
        let token = register_and_login(&server, "nina@example.com").await;

        let response = server
            .post("/api/investments/goals")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "House down payment",
                "target_amount": 2000000_00,
                "target_date": "2028-01-01T00:00:00Z"
            }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        let goal_id = body.data["id"].as_str().unwrap().to_string();
        assert_eq!(body.data["current_amount"], 0);

        let response = server
            .put(&format!("/api/investments/goals/{goal_id}"))
            .authorization_bearer(&token)
            .json(&json!({ "current_amount": 250000_00 }))
            .await;
        response.assert_status_ok();
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["current_amount"], 250000_00);
        assert_eq!(body.data["target_amount"], 2000000_00);

        let response = server
            .delete(&format!("/api/investments/goals/{goal_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();

        let response = server
            .get("/api/investments/goals")
            .authorization_bearer(&token)
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data.as_array().unwrap().len(), 0);
    }
}
