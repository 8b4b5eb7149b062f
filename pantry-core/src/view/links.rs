use url::form_urlencoded;

const VIDEO_SEARCH_BASE: &str = "https://www.youtube.com/results";

/// Video search for "<title> recipe".
pub fn video_search_url(title: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("{}?search_query={}+recipe", VIDEO_SEARCH_BASE, encoded)
}
