use web_sys::UrlSearchParams;

use valentine_card_core::{default_variant, SiteVariant};

const VARIANT_KEY: &str = "variant";

/// Variant picked from `#variant=<slug>`, then `?variant=<slug>`, then the
/// build-time default.
pub(crate) fn load_variant() -> &'static SiteVariant {
    if let Some(raw) = location_variant() {
        match SiteVariant::parse(&raw) {
            Ok(variant) => return variant,
            Err(err) => gloo::console::warn!("ignoring variant from url", err.to_string()),
        }
    }
    build_default_variant()
}

fn build_default_variant() -> &'static SiteVariant {
    let configured = option_env!("CARD_VARIANT")
        .or(option_env!("TRUNK_PUBLIC_CARD_VARIANT"))
        .map(str::trim)
        .filter(|raw| !raw.is_empty());
    match configured.map(SiteVariant::parse) {
        Some(Ok(variant)) => variant,
        Some(Err(err)) => {
            gloo::console::warn!("ignoring build variant", err.to_string());
            default_variant()
        }
        None => default_variant(),
    }
}

fn location_variant() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    if let Some(slug) = location
        .hash()
        .ok()
        .and_then(|hash| parse_variant_from_hash(&hash))
    {
        return Some(slug);
    }
    let search = location.search().ok()?;
    parse_variant_from_query(&search)
}

pub(crate) fn apply_metadata(variant: &SiteVariant) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(variant.title);
    let existing = document
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten();
    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Ok(meta) = document.create_element("meta") else {
                return;
            };
            let _ = meta.set_attribute("name", "description");
            let Some(head) = document.head() else {
                return;
            };
            if head.append_child(&meta).is_err() {
                gloo::console::warn!("failed to append description meta");
                return;
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", variant.description);
}

fn parse_variant_from_hash(hash: &str) -> Option<String> {
    let raw = hash.trim().trim_start_matches('#').trim();
    if raw.is_empty() {
        return None;
    }
    let mut slug = None;
    for chunk in raw.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let mut iter = chunk.splitn(2, '=');
        let key = iter.next().unwrap_or("").trim();
        let value = iter.next().unwrap_or("").trim();
        if key.eq_ignore_ascii_case(VARIANT_KEY) && !value.is_empty() {
            slug = Some(value.to_string());
        }
    }
    slug
}

fn parse_variant_from_query(search: &str) -> Option<String> {
    let search = search.trim();
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(search).ok()?;
    let value = params.get(VARIANT_KEY)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return None;
    }
    Some(value)
}
