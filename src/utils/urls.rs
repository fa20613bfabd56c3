use serde_json::Value;

/// The public site hands out uploads as `/uploads/<file>`; the dashboard runs
/// on another origin and needs them absolute.
pub fn absolutize_upload(value: &str, base: &str) -> String {
    if value.starts_with("/uploads/") {
        format!("{base}{value}")
    } else {
        value.to_string()
    }
}

/// Any root-relative path, used for the URL the upload endpoint returns.
pub fn absolutize_path(value: &str, base: &str) -> String {
    if value.starts_with('/') {
        format!("{base}{value}")
    } else {
        value.to_string()
    }
}

/// Rewrites every `/uploads/...` string anywhere inside `value`.
pub fn absolutize_tree(value: &mut Value, base: &str) {
    match value {
        Value::String(s) => {
            if s.starts_with("/uploads/") {
                *s = absolutize_upload(s, base);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|item| absolutize_tree(item, base)),
        Value::Object(map) => map.values_mut().for_each(|item| absolutize_tree(item, base)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rewrites_nested_upload_references() {
        let mut tree = json!({
            "ru": {
                "hero": { "slides": [{ "image": "/uploads/a.png", "href": "/tours" }] },
                "gallery": { "images": ["/uploads/b.png", "https://x.test/c.png"] },
                "count": 3
            }
        });
        absolutize_tree(&mut tree, "http://site.test");
        assert_eq!(tree["ru"]["hero"]["slides"][0]["image"], "http://site.test/uploads/a.png");
        assert_eq!(tree["ru"]["hero"]["slides"][0]["href"], "/tours");
        assert_eq!(tree["ru"]["gallery"]["images"][0], "http://site.test/uploads/b.png");
        assert_eq!(tree["ru"]["gallery"]["images"][1], "https://x.test/c.png");
        assert_eq!(tree["ru"]["count"], 3);
    }

    #[test]
    fn upload_url_uses_any_root_relative_path() {
        assert_eq!(absolutize_path("/media/x.jpg", "http://s.test"), "http://s.test/media/x.jpg");
        assert_eq!(absolutize_path("http://a/x.jpg", "http://s.test"), "http://a/x.jpg");
    }
}
