//! Blocking client for the pilab REST API.

use std::collections::BTreeMap;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{AlgorithmSummary, Estimation, FormulaInfo, User};
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the environment (`PILAB_SERVER_URL`, `.env` honored).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("PILAB_SERVER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/health`.
    pub fn health(&self) -> Result<(), AppError> {
        let resp = self.get("/api/health")?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AppError::runtime(format!(
                "Server health check failed with status {}.",
                resp.status()
            )))
        }
    }

    /// `GET /api/v1/estimations/basic`.
    pub fn fetch_estimations(&self) -> Result<Vec<Estimation>, AppError> {
        let resp = self.get("/api/v1/estimations/basic")?;
        let body: V1Response<EstimationsData> = parse_json(self.check(resp)?)?;
        Ok(body.data.estimations)
    }

    /// `GET /api/v1/formulas`.
    pub fn fetch_formulas(&self) -> Result<Vec<FormulaInfo>, AppError> {
        let resp = self.get("/api/v1/formulas")?;
        let body: V1Response<FormulasData> = parse_json(self.check(resp)?)?;
        Ok(body.data.formulas.into_values().collect())
    }

    /// `GET /api/v1/algorithms`.
    ///
    /// The endpoint keys entries by wire name; the key is folded back into
    /// each summary so callers get a flat list.
    pub fn fetch_algorithms(&self) -> Result<Vec<AlgorithmSummary>, AppError> {
        let resp = self.get("/api/v1/algorithms")?;
        let body: V1Response<AlgorithmsData> = parse_json(self.check(resp)?)?;
        Ok(body
            .data
            .algorithms
            .into_iter()
            .map(|(name, mut summary)| {
                summary.name = name;
                summary
            })
            .collect())
    }

    /// `GET /api/usuarios`.
    pub fn list_users(&self) -> Result<Vec<User>, AppError> {
        let resp = self.get("/api/usuarios")?;
        let body: UserListResponse = parse_json(self.check(resp)?)?;
        Ok(body.data)
    }

    /// `POST /api/usuarios`.
    pub fn create_user(&self, name: &str, email: &str) -> Result<User, AppError> {
        let url = format!("{}/api/usuarios", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "name": name, "email": email }))
            .send()
            .map_err(|e| AppError::runtime(format!("Request to {url} failed: {e}")))?;
        let body: UserResponse = parse_json(self.check(resp)?)?;
        Ok(body.data)
    }

    /// `PUT /api/usuarios/{id}`. Absent fields keep their server-side values.
    pub fn update_user(
        &self,
        id: u64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, AppError> {
        let url = format!("{}/api/usuarios/{id}", self.base_url);
        let mut body = serde_json::Map::new();
        if let Some(name) = name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(email) = email {
            body.insert("email".to_string(), json!(email));
        }
        let resp = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .map_err(|e| AppError::runtime(format!("Request to {url} failed: {e}")))?;
        let parsed: UserResponse = parse_json(self.check(resp)?)?;
        Ok(parsed.data)
    }

    /// `DELETE /api/usuarios/{id}`. Returns the removed record.
    pub fn delete_user(&self, id: u64) -> Result<User, AppError> {
        let url = format!("{}/api/usuarios/{id}", self.base_url);
        let resp = self
            .client
            .delete(&url)
            .send()
            .map_err(|e| AppError::runtime(format!("Request to {url} failed: {e}")))?;
        let parsed: UserResponse = parse_json(self.check(resp)?)?;
        Ok(parsed.data)
    }

    fn get(&self, path: &str) -> Result<Response, AppError> {
        let url = format!("{}{path}", self.base_url);
        self.client
            .get(&url)
            .send()
            .map_err(|e| AppError::runtime(format!("Request to {url} failed: {e}")))
    }

    /// Convert an error-status response into the server's error message.
    fn check(&self, resp: Response) -> Result<Response, AppError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .ok()
            .map(|b| b.error)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Err(AppError::runtime(format!("Server error ({status}): {message}")))
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    resp.json::<T>()
        .map_err(|e| AppError::runtime(format!("Failed to parse server response: {e}")))
}

#[derive(Debug, Deserialize)]
struct V1Response<T> {
    #[allow(dead_code)]
    status: String,
    data: T,
}

#[derive(Debug, Deserialize)]
struct EstimationsData {
    estimations: Vec<Estimation>,
}

#[derive(Debug, Deserialize)]
struct FormulasData {
    formulas: BTreeMap<String, FormulaInfo>,
}

#[derive(Debug, Deserialize)]
struct AlgorithmsData {
    algorithms: BTreeMap<String, AlgorithmSummary>,
}

#[derive(Debug, Deserialize)]
struct UserListResponse {
    #[allow(dead_code)]
    success: bool,
    data: Vec<User>,
    #[allow(dead_code)]
    total: usize,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[allow(dead_code)]
    success: bool,
    data: User,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::with_base_url("http://localhost:5000///");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn envelopes_deserialize() {
        let body: V1Response<EstimationsData> = serde_json::from_str(
            r#"{"status":"success","data":{"estimations":[{
                "id":1,"algorithm":"monte-carlo","class":"probability",
                "pi_estimate":3.14064,"correct_digits":3,"iterations":50000,
                "time_seconds":0.017259,"iterations_per_second":2897039.0,
                "absolute_error":0.000953}]}}"#,
        )
        .unwrap();
        assert_eq!(body.data.estimations.len(), 1);
        assert_eq!(
            body.data.estimations[0].algorithm,
            crate::domain::AlgorithmKind::MonteCarlo
        );

        let users: UserListResponse = serde_json::from_str(
            r#"{"success":true,"data":[{"id":1,"name":"Ana García","email":"ana@example.com"}],"total":1}"#,
        )
        .unwrap();
        assert_eq!(users.data[0].name, "Ana García");
        assert!(users.data[0].created_at.is_none());
    }
}
