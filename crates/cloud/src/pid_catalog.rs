use std::sync::RwLock;

use log::info;
use serde_json::Value;

use crate::{CatalogConfig, CatalogError};
use device_link_core::resolve_lang;

/// Path of the supported-model listing on the catalog service.
const MODEL_LIST_PATH: &str = "/api/v2/device_product/model";

/// Client for the device-product catalog.
///
/// Holds the list of supported PIDs fetched from the cloud. The list is
/// fetched once per instance: after the first successful [`refresh`],
/// further refreshes short-circuit to the cached value, and the synchronous
/// [`pid_list`] read serves contexts that can't do network I/O at all.
///
/// [`refresh`]: PidCatalog::refresh
/// [`pid_list`]: PidCatalog::pid_list
pub struct PidCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
    cache: RwLock<Vec<Value>>,
}

impl PidCatalog {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Cached PID list: whatever the last successful refresh stored, or an
    /// empty list when none has happened yet. Never touches the network.
    ///
    /// The language argument exists for parity with [`refresh`] and is
    /// ignored on this path.
    ///
    /// [`refresh`]: PidCatalog::refresh
    pub fn pid_list(&self, _lang: Option<&str>) -> Vec<Value> {
        self.cache.read().unwrap().clone()
    }

    /// Fetch the PID list from the catalog service, populating the cache on
    /// first success.
    ///
    /// Any failure — unreachable service, timeout, non-200 status, bad JSON,
    /// unexpected shape — resolves to an empty list with the cache left
    /// untouched. Callers see an empty list as "no known products yet", not
    /// an error.
    pub async fn refresh(&self, lang: Option<&str>) -> Vec<Value> {
        match self.try_refresh(lang).await {
            Ok(list) => list,
            Err(e) => {
                info!("pid list refresh failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Like [`refresh`], but surfaces why the fetch produced no data.
    ///
    /// Note the emptiness pre-check does not serialize concurrent callers:
    /// two first refreshes in flight at once may both fetch. The last write
    /// wins, and both writers replace the whole value, so the cache never
    /// holds a torn list.
    ///
    /// [`refresh`]: PidCatalog::refresh
    pub async fn try_refresh(&self, lang: Option<&str>) -> Result<Vec<Value>, CatalogError> {
        {
            let cached = self.cache.read().unwrap();
            if !cached.is_empty() {
                return Ok(cached.clone());
            }
        }

        let lang = resolve_lang(lang.unwrap_or(&self.config.lang));
        let url = format!("http://{}{}", self.config.api_domain, MODEL_LIST_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[("lang", lang)])
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(CatalogError::Transport(format!(
                "unexpected HTTP status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let envelope: Value = serde_json::from_str(&body)?;
        let list = extract_pid_list(&envelope)?;

        *self.cache.write().unwrap() = list.clone();
        Ok(list)
    }
}

impl Default for PidCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the PID array out of a catalog response, checking each nesting level
/// before trusting it. The service marks success with the string "1" in
/// `ret`; a numeric 1 does not count.
fn extract_pid_list(envelope: &Value) -> Result<Vec<Value>, CatalogError> {
    let ret = match envelope.get("ret") {
        None | Some(Value::Null) => return Err(CatalogError::Schema("ret field is missing")),
        Some(ret) => ret,
    };
    if *ret != "1" {
        return Err(CatalogError::Schema("ret is not \"1\""));
    }
    let info = envelope
        .get("info")
        .and_then(Value::as_object)
        .ok_or(CatalogError::Schema("info is not an object"))?;
    let list = info
        .get("list")
        .and_then(Value::as_array)
        .ok_or(CatalogError::Schema("info.list is not an array"))?;
    Ok(list.clone())
}
