//! Projects the extraction service's loosely typed answer onto `ResolvedVideo`.
//!
//! Nothing past this module sees the upstream JSON shape.

use serde_json::Value;
use url::Url;

use super::error::DownloadError;
use super::models::ResolvedVideo;
use crate::kernel::UpstreamResult;

/// Author shown when the upstream has no nickname.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

pub fn normalize(upstream: UpstreamResult) -> Result<ResolvedVideo, DownloadError> {
    let UpstreamResult {
        source,
        code,
        msg,
        data,
    } = upstream;

    let data = match data {
        Some(data @ Value::Object(_)) => data,
        _ => {
            let cause = match (msg.filter(|m| !m.is_empty()), code) {
                (Some(msg), _) => msg,
                (None, Some(code)) => format!("no video data in response (code {code})"),
                (None, None) => "no video data in response".to_string(),
            };
            return Err(DownloadError::UpstreamMiss(cause));
        }
    };

    let play = non_empty_str(&data, "play")
        .ok_or_else(|| DownloadError::UpstreamMiss("response has no play address".to_string()))?;
    let url = absolutize(play, &source).ok_or_else(|| {
        DownloadError::UpstreamMalformed(format!("play address {play:?} is not a valid URL"))
    })?;

    let title = data
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let author = data
        .get("author")
        .and_then(|a| non_empty_str(a, "nickname"))
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string();

    let cover = non_empty_str(&data, "cover").and_then(|c| absolutize(c, &source));
    let duration = data.get("duration").and_then(Value::as_u64);

    Ok(ResolvedVideo {
        url,
        title,
        author,
        cover,
        duration,
    })
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Absolute http(s) addresses pass through verbatim; paths like
/// `/video/media/play/1.mp4` are joined onto the answering endpoint.
fn absolutize(raw: &str, source: &Url) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(raw.to_string()),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            source.join(raw).ok().map(|u| u.to_string())
        }
        Err(_) => None,
    }
}
