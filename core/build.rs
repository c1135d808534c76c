use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const ORNAMENT_IMAGE_COUNT: usize = 6;

#[derive(Deserialize)]
struct CardFile {
    default_variant: Option<String>,
    ornament_images: Vec<String>,
    variants: Vec<VariantEntry>,
}

#[derive(Deserialize)]
struct VariantEntry {
    slug: String,
    title: String,
    description: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=CARD_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let config_path = resolve_config_path(workspace_root);
    println!("cargo:rerun-if-changed={}", config_path.display());

    let contents = fs::read_to_string(&config_path).unwrap_or_else(|err| {
        panic!(
            "failed to read card config at {}: {err}",
            config_path.display()
        )
    });

    let card: CardFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse card config at {}: {err}",
            config_path.display()
        )
    });

    if card.variants.is_empty() {
        panic!("card config {} has no variants", config_path.display());
    }
    validate_variants(&card.variants, &config_path);
    validate_images(&card.ornament_images, &config_path);

    let default_slug = card
        .default_variant
        .as_deref()
        .unwrap_or(card.variants[0].slug.as_str());
    if !card.variants.iter().any(|entry| entry.slug == default_slug) {
        panic!(
            "default_variant '{}' not found in {}",
            default_slug,
            config_path.display()
        );
    }

    let output = site_config_source(&card, default_slug);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("site_config.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

/// Renders `site_config.rs`, which `core/src/site.rs` includes verbatim:
/// `DEFAULT_VARIANT_SLUG`, the fixed-size `ORNAMENT_IMAGES` table in
/// `card.toml` order, and one `SiteVariant` literal per `[[variants]]` entry.
fn site_config_source(card: &CardFile, default_slug: &str) -> String {
    let images: String = card
        .ornament_images
        .iter()
        .map(|image| format!("    {},\n", rust_string(image)))
        .collect();
    let variants: String = card
        .variants
        .iter()
        .map(|entry| {
            format!(
                "    SiteVariant {{ slug: {}, title: {}, description: {} }},\n",
                rust_string(&entry.slug),
                rust_string(&entry.title),
                rust_string(&entry.description),
            )
        })
        .collect();
    format!(
        "pub const DEFAULT_VARIANT_SLUG: &str = {default};\n\n\
         pub const ORNAMENT_IMAGES: [&str; {ORNAMENT_IMAGE_COUNT}] = [\n{images}];\n\n\
         pub const SITE_VARIANTS: &[SiteVariant] = &[\n{variants}];\n",
        default = rust_string(default_slug),
    )
}

fn resolve_config_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("CARD_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("card.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_variants(entries: &[VariantEntry], config_path: &Path) {
    let mut slugs = HashSet::new();
    for entry in entries {
        let slug = entry.slug.trim();
        if slug.is_empty() {
            panic!("variant slug cannot be empty in {}", config_path.display());
        }
        if !slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            panic!(
                "variant slug '{}' must be lowercase ascii, digits or '-' in {}",
                entry.slug,
                config_path.display()
            );
        }
        if entry.title.trim().is_empty() {
            panic!(
                "variant '{}' has an empty title in {}",
                entry.slug,
                config_path.display()
            );
        }
        if !slugs.insert(entry.slug.clone()) {
            panic!(
                "duplicate variant slug '{}' in {}",
                entry.slug,
                config_path.display()
            );
        }
    }
}

fn validate_images(images: &[String], config_path: &Path) {
    if images.len() != ORNAMENT_IMAGE_COUNT {
        panic!(
            "card config {} must list exactly {} ornament images, found {}",
            config_path.display(),
            ORNAMENT_IMAGE_COUNT,
            images.len()
        );
    }
    let mut seen = HashSet::new();
    for image in images {
        if image.trim().is_empty() {
            panic!("ornament image cannot be empty in {}", config_path.display());
        }
        if image.starts_with("http://") || image.starts_with("https://") {
            panic!(
                "ornament image '{}' cannot be a URL in {}",
                image,
                config_path.display()
            );
        }
        if image.starts_with("data:") {
            panic!(
                "ornament image '{}' cannot be a data URL in {}",
                image,
                config_path.display()
            );
        }
        if !seen.insert(image.clone()) {
            panic!(
                "duplicate ornament image '{}' in {}",
                image,
                config_path.display()
            );
        }
    }
}
