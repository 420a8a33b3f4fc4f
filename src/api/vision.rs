use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::VisionConfig;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Ask the vision model how many instances of `label` appear in the image.
///
/// The image bytes travel inline (base64) next to a counting prompt; the
/// reply is free text, so the count is the first integer found in it. There
/// is no retry and no validation of the model's answer beyond that parse.
pub async fn count_objects(
    client: &Client,
    vision: &VisionConfig,
    image_path: &Path,
    label: &str,
) -> Result<u64> {
    let api_key = std::env::var(&vision.api_key_env)
        .map_err(|_| anyhow!("{} environment variable not set", vision.api_key_env))?;

    let bytes = std::fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;
    let mime = image::guess_format(&bytes)
        .with_context(|| format!("{} is not a recognized image", image_path.display()))?
        .to_mime_type();

    let prompt = format!(
        "Count the number of {} visible in this image. \
         Reply with the count as a single integer.",
        label
    );

    let url = format!("{}/{}:generateContent", BASE_URL, vision.model);
    let response = client
        .post(&url)
        .query(&[("key", api_key.as_str())])
        .json(&json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": prompt },
                    { "inline_data": { "mime_type": mime, "data": STANDARD.encode(&bytes) } },
                ],
            }],
        }))
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        bail!("vision request failed with {}: {}", status, body);
    }

    let answer = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| anyhow!("unexpected response from {}: {}", vision.model, body))?;

    parse_count(answer)
}

/// Pull the first integer out of the model's reply.
fn parse_count(answer: &str) -> Result<u64> {
    let re = Regex::new(r"\d+")?;
    let digits = re
        .find(answer)
        .ok_or_else(|| anyhow!("no count in model reply: {:?}", answer))?;

    Ok(digits.as_str().parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_integer() {
        assert_eq!(parse_count("7").unwrap(), 7);
    }

    #[test]
    fn test_parse_integer_in_prose() {
        assert_eq!(
            parse_count("I can see 12 bottles in the image.").unwrap(),
            12
        );
    }

    #[test]
    fn test_parse_takes_first_integer() {
        assert_eq!(parse_count("3 apples and 2 pears").unwrap(), 3);
    }

    #[test]
    fn test_parse_no_integer_is_an_error() {
        assert!(parse_count("several").is_err());
    }
}
