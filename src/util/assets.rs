use std::{borrow::Cow, collections::HashMap, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const LOCALE_DIR: &str = "locales/";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static LOCALE_BUNDLES: OnceLock<HashMap<String, String>> = OnceLock::new();
static IMAGE_DATA_URIS: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg").unwrap_or_default())
        .as_str()
}

/// Raw JSON message bundle for a locale code, e.g. `en`.
pub fn locale_bundle(code: &str) -> Option<&'static str> {
    LOCALE_BUNDLES
        .get_or_init(|| {
            EmbeddedAssets::iter()
                .filter_map(|path| {
                    let code = path.strip_prefix(LOCALE_DIR)?.strip_suffix(".json")?.to_string();
                    let text = load_text(&path)?;
                    Some((code, text))
                })
                .collect()
        })
        .get(code)
        .map(String::as_str)
}

/// Resolves an image reference for display. Local paths that point at an
/// embedded image become data URIs; anything else is returned untouched.
pub fn resolve_image(link: &str) -> Cow<'_, str> {
    let images = IMAGE_DATA_URIS.get_or_init(|| {
        EmbeddedAssets::iter()
            .filter(|path| path.starts_with("images/"))
            .filter_map(|path| load_data_uri(&path).map(|uri| (path.into_owned(), uri)))
            .collect()
    });

    if link.starts_with('/') {
        if let Some(uri) = images.get(&canonical_asset_path(link)) {
            return Cow::Owned(uri.clone());
        }
    }
    Cow::Borrowed(link)
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            warn!("embedded asset {path} is not valid UTF-8");
            None
        }
    }
}

fn load_data_uri(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    Some(format!("data:{mime};base64,{encoded}"))
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        warn!("failed to locate embedded asset: {path}");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".webp") {
        "image/webp"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        output.push(match chunk.len() {
            1 => '=',
            _ => TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char,
        });
        output.push(match chunk.len() {
            3 => TABLE[(b2 & 0b0011_1111) as usize] as char,
            _ => '=',
        });
    }

    output
}
