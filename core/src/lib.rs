pub mod bouquet;
pub mod celebration;
pub mod motion;
pub mod ornament;
pub mod placement;
pub mod response;
pub mod site;

pub use celebration::{opening_burst, Burst, CelebrationSchedule, Origin, Tick};
pub use ornament::{generate, OrnamentDescriptor, OrnamentKind, FLOATERS_COUNT};
pub use placement::{relocate, Size, ViewportPosition, EVADE_PADDING_PX};
pub use response::{AcceptOutcome, CardContent, CardState, NoControl};
pub use site::{default_variant, variant_by_slug, SiteVariant, VariantError};
