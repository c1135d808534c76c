use std::fmt;

/// Page metadata for one deployment of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteVariant {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/site_config.rs"));

pub fn default_variant() -> &'static SiteVariant {
    variant_by_slug(DEFAULT_VARIANT_SLUG).unwrap_or(&SITE_VARIANTS[0])
}

pub fn variant_by_slug(slug: &str) -> Option<&'static SiteVariant> {
    let trimmed = slug.trim();
    SITE_VARIANTS
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

impl SiteVariant {
    pub fn parse(value: &str) -> Result<&'static SiteVariant, VariantError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VariantError::Empty);
        }
        variant_by_slug(trimmed).ok_or_else(|| VariantError::Unknown {
            slug: trimmed.to_string(),
        })
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    Empty,
    Unknown { slug: String },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::Empty => write!(f, "variant slug is empty"),
            VariantError::Unknown { slug } => {
                let known: Vec<&str> = SITE_VARIANTS.iter().map(|entry| entry.slug).collect();
                write!(f, "unknown variant '{slug}', expected one of {}", known.join(", "))
            }
        }
    }
}

impl std::error::Error for VariantError {}
