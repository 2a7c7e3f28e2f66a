//! Canned extraction-service payloads and request bodies.

use serde_json::{json, Value};

pub const LINK: &str = "https://www.tiktok.com/@alice/video/7301234567890";
pub const PLAY_URL: &str = "https://cdn.example/video.mp4";

/// Request body for the download endpoint.
pub fn download_body(url: &str) -> String {
    json!({ "url": url }).to_string()
}

/// Successful TikWM envelope without an author object.
pub fn tikwm_video(play: &str, title: &str) -> Value {
    json!({
        "code": 0,
        "msg": "success",
        "processed_time": 0.12,
        "data": {
            "id": "7301234567890",
            "region": "US",
            "title": title,
            "play": play,
            "wmplay": "https://cdn.example/video-wm.mp4",
            "size": 1048576,
            "play_count": 42
        }
    })
}

/// Successful TikWM envelope with an author nickname.
pub fn tikwm_video_by(play: &str, title: &str, nickname: &str) -> Value {
    let mut envelope = tikwm_video(play, title);
    envelope["data"]["author"] = json!({
        "id": "6800000000000000000",
        "unique_id": nickname,
        "nickname": nickname,
        "avatar": "https://cdn.example/avatar.jpg"
    });
    envelope
}

/// TikWM envelope for a link it could not resolve.
pub fn tikwm_miss() -> Value {
    json!({
        "code": -1,
        "msg": "Url parsing is failed! Please check url.",
        "processed_time": 0.05
    })
}
