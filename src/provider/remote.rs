//! Remote transport for quiz generation. Wasm builds only; native builds
//! sample the built-in bank instead.

use gloo_net::http::Request;

use super::WireQuestion;
use crate::shared::Grade;

/// Proxy worker that holds the model API key and returns the question
/// array as JSON.
const WORKER_URL: &str = "https://scholar-clickers-worker.workers.dev/api/quiz";

/// POST the prompt to the worker and parse the question array.
///
/// Every failure path is a String so the caller can decide between
/// surfacing it and falling back to the bank.
pub async fn fetch_quiz(
    topic: &str,
    grade: Grade,
    prompt: &str,
) -> Result<Vec<WireQuestion>, String> {
    let payload = serde_json::json!({
        "topic": topic,
        "gradeLevel": grade.display_name(),
        "prompt": prompt,
    });

    let request = Request::post(WORKER_URL)
        .json(&payload)
        .map_err(|e| format!("could not build generation request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("generation request failed: {}", e))?;

    if response.status() != 200 {
        return Err(format!(
            "generation endpoint returned status {}",
            response.status()
        ));
    }

    response
        .json::<Vec<WireQuestion>>()
        .await
        .map_err(|e| format!("could not parse generation response: {}", e))
}
