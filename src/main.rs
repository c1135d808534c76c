mod app;
mod celebration_runtime;
mod icons;
mod site_router;
mod viewport;

fn main() {
    console_error_panic_hook::set_once();
    let variant = site_router::load_variant();
    gloo::console::log!("valentine card boot", variant.slug);
    yew::Renderer::<app::App>::with_props(app::AppProps { variant }).render();
}
