use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AccountDetails {
    /// "active", "suspended", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_included: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_mode: Option<bool>,
}

/// Body of `POST account`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreateAccountRequest {
    pub email: String,
    /// Always "1": creating an account accepts the terms of service.
    pub terms_of_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
}

impl CreateAccountRequest {
    /// A request for `email`; an empty `password` lets the API generate one.
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        let password = (!password.is_empty()).then(|| password.to_string());
        Self {
            email: email.into(),
            terms_of_service: "1".to_string(),
            password_confirmation: password.clone(),
            password,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreateAccountResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Set when the API generated the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
