use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::bindings::{
    reconstruct, DashboardStatistics, ExecutableLink, LoggedGame, Node, StoredLog,
};
use crate::error::BridgeError;
use crate::log_form::{LogData, LogUpdateData};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddLogArgs<'a> {
    log_data: &'a LogData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateLogArgs<'a> {
    log_data: &'a LogUpdateData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetLogsArgs<'a> {
    sort_by: &'a str,
    sort_order: &'a str,
    filter: &'a [&'a str],
}

#[derive(Serialize)]
struct RecentLogsArgs<'a> {
    amount: u32,
    filter: &'a [&'a str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardStatisticsArgs<'a> {
    start_date: &'a str,
    end_date: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddExecutableDetailsArgs<'a> {
    executable_details: &'a ExecutableLink,
}

// -- Typed invoke helpers --

/// Call a backend command and reconstruct its response as `T`.
pub async fn invoke_shape<T, A>(cmd: &str, args: &A) -> Result<Node<T>, BridgeError>
where
    T: DeserializeOwned,
    A: Serialize,
{
    let result = invoke_raw(cmd, args).await?;
    debug!("Reconstructing response of {}", cmd);
    Ok(reconstruct(result))
}

/// Call a backend command that answers with the id of the row it touched.
pub async fn invoke_row_id<A: Serialize>(cmd: &str, args: &A) -> Result<i64, BridgeError> {
    row_id(invoke_raw(cmd, args).await?)
}

async fn invoke_raw<A: Serialize>(cmd: &str, args: &A) -> Result<Value, BridgeError> {
    let args =
        serde_wasm_bindgen::to_value(args).map_err(|e| BridgeError::Payload(e.to_string()))?;

    let result = invoke(cmd, args).await.map_err(|e| {
        let message = e.as_string().unwrap_or_else(|| "Unknown error".to_string());
        warn!("Command {} failed: {}", cmd, message);
        BridgeError::Invoke(message)
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Payload(e.to_string()))
}

fn row_id(value: Value) -> Result<i64, BridgeError> {
    value
        .as_i64()
        .ok_or_else(|| BridgeError::Payload(format!("Expected a row id, got {}", value)))
}

pub async fn add_log(log_data: &LogData) -> Result<i64, String> {
    Ok(invoke_row_id("add_log", &AddLogArgs { log_data }).await?)
}

pub async fn update_log(log_data: &LogUpdateData) -> Result<i64, String> {
    Ok(invoke_row_id("update_log", &UpdateLogArgs { log_data }).await?)
}

pub async fn delete_log(id: i64) -> Result<i64, String> {
    Ok(invoke_row_id("delete_log", &IdArgs { id }).await?)
}

pub async fn get_log_by_id(id: i64) -> Result<Node<StoredLog>, String> {
    Ok(invoke_shape("get_log_by_id", &IdArgs { id }).await?)
}

pub async fn get_logs(
    sort_by: &str,
    sort_order: &str,
    filter: &[&str],
) -> Result<Node<StoredLog>, String> {
    let args = GetLogsArgs {
        sort_by,
        sort_order,
        filter,
    };
    Ok(invoke_shape("get_logs", &args).await?)
}

/// Latest logs first. An empty filter returns every status.
pub async fn get_recent_logs(amount: u32, filter: &[&str]) -> Result<Node<StoredLog>, String> {
    Ok(invoke_shape("get_recent_logs", &RecentLogsArgs { amount, filter }).await?)
}

pub async fn get_logged_game(id: i64) -> Result<Node<LoggedGame>, String> {
    Ok(invoke_shape("get_logged_game", &IdArgs { id }).await?)
}

pub async fn get_dashboard_statistics(
    start_date: &str,
    end_date: &str,
) -> Result<Node<DashboardStatistics>, String> {
    let args = DashboardStatisticsArgs {
        start_date,
        end_date,
    };
    Ok(invoke_shape("get_dashboard_statistics", &args).await?)
}

pub async fn add_executable_details(executable_details: &ExecutableLink) -> Result<i64, String> {
    let args = AddExecutableDetailsArgs { executable_details };
    Ok(invoke_row_id("add_executable_details", &args).await?)
}
