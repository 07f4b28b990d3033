use reqwest::StatusCode;

use crate::client::{Client, Query};
use crate::errors::Result;
use crate::models::{AccountDetails, CreateAccountRequest, CreateAccountResponse};

impl Client {
    /// Create a new account and accept the terms of service.
    ///
    /// Pass an empty `password` to have one generated; it is returned in
    /// [`CreateAccountResponse::password`].
    pub async fn create_account(&self, email: &str, password: &str) -> Result<CreateAccountResponse> {
        let request = CreateAccountRequest::new(email, password);
        self.post_json("account", &request, StatusCode::OK).await
    }

    /// Fetch plan, usage and mode of the account owning the API key.
    pub async fn get_account(&self) -> Result<AccountDetails> {
        self.get_json("account", Query::new()).await
    }

    /// Switch the account to integration mode: jobs are free test jobs.
    pub async fn set_integration_mode(&self) -> Result<()> {
        self.put_no_body("account/integration").await
    }

    /// Switch the account back to live mode.
    pub async fn set_live_mode(&self) -> Result<()> {
        self.put_no_body("account/live").await
    }
}
