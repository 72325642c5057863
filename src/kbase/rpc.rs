use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Value};
use uuid::Uuid;

/// Minimal JSON-RPC 1.1 client for the SDK callback services. Requests
/// carry a single-element params array and responses a single-element
/// result array, per the KBase convention.
pub struct RpcClient {
    url: String,
    token: Option<String>,
}

impl RpcClient {
    pub fn new(url: &str, token: Option<&str>) -> Self {
        RpcClient {
            url: url.to_string(),
            token: token.map(str::to_string),
        }
    }

    pub fn call(&self, method: &str, params: Value) -> Result<Value> {
        let body = envelope(method, params);
        let mut request = ureq::post(&self.url);
        if let Some(token) = &self.token {
            request = request.set("Authorization", token);
        }
        // Callback services answer JSON-RPC errors with a 500, so keep the
        // body around either way and let the error field decide.
        let response = match request.send_json(body) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(e).with_context(|| format!("calling {method}")),
        };
        let response: Value = response
            .into_json()
            .with_context(|| format!("decoding {method} response"))?;

        if let Some(err) = response.get("error") {
            let message = err
                .get("message")
                .or_else(|| err.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("unknown server error");
            bail!("{method} failed: {message}");
        }
        response
            .get("result")
            .and_then(|result| result.get(0))
            .cloned()
            .ok_or_else(|| anyhow!("{method} returned no result"))
    }
}

fn envelope(method: &str, params: Value) -> Value {
    json!({
        "version": "1.1",
        "id": Uuid::new_v4().to_string(),
        "method": method,
        "params": [params],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_the_jsonrpc_11_shape() {
        let body = envelope(
            "AssemblyUtil.save_assembly_from_fasta",
            json!({"workspace_name": "my_workspace"}),
        );
        assert_eq!(body["version"], "1.1");
        assert_eq!(body["method"], "AssemblyUtil.save_assembly_from_fasta");
        assert!(body["id"].is_string());
        let params = body["params"].as_array().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0]["workspace_name"], "my_workspace");
    }
}
