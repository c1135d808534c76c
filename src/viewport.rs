use js_sys::{Date, Math};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::HtmlElement;
use yew::NodeRef;

use valentine_card_core::Size;

pub(crate) fn window_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width.floor() as i32, height.floor() as i32))
}

/// Layout size of a mounted element, `None` before the first layout.
pub(crate) fn element_size(node: &NodeRef) -> Option<Size> {
    let element = node.cast::<HtmlElement>()?;
    Size::measured(element.offset_width() as f64, element.offset_height() as f64)
}

pub(crate) fn seeded_rng() -> SmallRng {
    let entropy = (Math::random() * (1u64 << 53) as f64) as u64;
    let clock = (Date::now() as u64).rotate_left(21);
    SmallRng::seed_from_u64(entropy ^ clock)
}
