use yew::prelude::*;

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";
const SPARKLE_PATH: &str = "M12 0L14.59 9.41L24 12L14.59 14.59L12 24L9.41 14.59L0 12L9.41 9.41L12 0Z";
const CLOUD_PATH: &str = "M19.35 10.04C18.67 6.59 15.64 4 12 4 9.11 4 6.6 5.64 5.35 8.04 2.34 8.36 0 10.91 0 14c0 3.31 2.69 6 6 6h13c2.76 0 5-2.24 5-5 0-2.64-2.05-4.78-4.65-4.96z";

const TULIP_PETAL_LEFT: &str = "M30 80 C 10 70, 0 40, 30 20 C 40 40, 45 60, 50 80";
const TULIP_PETAL_RIGHT: &str = "M70 80 C 90 70, 100 40, 70 20 C 60 40, 55 60, 50 80";
const TULIP_PETAL_CENTER: &str = "M50 80 C 30 50, 30 20, 50 5 C 70 20, 70 50, 50 80";

fn icon(path: &'static str, class: Classes) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="currentColor" class={class} xmlns="http://www.w3.org/2000/svg">
            <path d={path} />
        </svg>
    }
}

pub(crate) fn heart(class: impl Into<Classes>) -> Html {
    icon(HEART_PATH, class.into())
}

pub(crate) fn sparkle(class: impl Into<Classes>) -> Html {
    icon(SPARKLE_PATH, class.into())
}

pub(crate) fn cloud(class: impl Into<Classes>) -> Html {
    icon(CLOUD_PATH, class.into())
}

pub(crate) fn tulip_flower(class: Classes) -> Html {
    html! {
        <svg width="60" height="60" viewBox="0 0 100 100" class={class} fill="currentColor">
            <path d={TULIP_PETAL_LEFT} opacity="0.9" />
            <path d={TULIP_PETAL_RIGHT} opacity="0.9" />
            <path d={TULIP_PETAL_CENTER} />
        </svg>
    }
}
