use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use web_sys::MouseEvent;
use yew::prelude::*;

use valentine_card_core::bouquet::{roll_bouquet, TulipMotion, TulipStyle, FOOTER_DELAY_MS};
use valentine_card_core::motion::{Transition, Tween};
use valentine_card_core::placement::evade_transition;
use valentine_card_core::response::hero_pop_transition;
use valentine_card_core::{
    generate, relocate, AcceptOutcome, CardContent, CardState, NoControl, OrnamentDescriptor,
    OrnamentKind, SiteVariant, ViewportPosition, EVADE_PADDING_PX, FLOATERS_COUNT,
};

use crate::celebration_runtime::{self, CelebrationSlot};
use crate::icons;
use crate::site_router;
use crate::viewport;

const HERO_QUESTION_SRC: &str = "images/cinna.png";
const HERO_ACCEPTED_SRC: &str = "images/Cinnamoroll.png";

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub(crate) variant: &'static SiteVariant,
}

/// Card state as rendered plus a live copy, so handlers firing between
/// renders see the latest transition.
#[derive(Clone)]
struct CardStore {
    state: UseStateHandle<CardState>,
    live: Rc<RefCell<CardState>>,
}

impl CardStore {
    fn new(state: UseStateHandle<CardState>, live: Rc<RefCell<CardState>>) -> Self {
        Self { state, live }
    }

    fn accept(&self) -> AcceptOutcome {
        let (outcome, next) = {
            let mut live = self.live.borrow_mut();
            (live.accept(), *live)
        };
        self.state.set(next);
        outcome
    }

    fn evade(&self, position: ViewportPosition) -> bool {
        let (moved, next) = {
            let mut live = self.live.borrow_mut();
            (live.evade(position), *live)
        };
        if moved {
            self.state.set(next);
        }
        moved
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let variant = props.variant;
    let is_client = use_state(|| false);
    let card = use_state(CardState::new);
    let card_live = use_mut_ref(CardState::new);
    let store = CardStore::new(card.clone(), card_live);
    let no_ref = use_node_ref();
    let rng = use_mut_ref(viewport::seeded_rng);
    let celebration: CelebrationSlot = use_mut_ref(|| None);

    use_effect_with(variant, |variant| {
        site_router::apply_metadata(variant);
        || ()
    });

    {
        let is_client = is_client.clone();
        let celebration = celebration.clone();
        use_effect_with((), move |_| {
            console::log!("card mounted");
            is_client.set(true);
            move || celebration_runtime::stop(&celebration)
        });
    }

    let floaters = {
        let rng = rng.clone();
        use_memo(*is_client, move |is_client| {
            if *is_client {
                generate(FLOATERS_COUNT, &mut *rng.borrow_mut())
            } else {
                Vec::new()
            }
        })
    };

    let on_evade = {
        let store = store.clone();
        let no_ref = no_ref.clone();
        let rng = rng.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(window_size) = viewport::window_size() else {
                return;
            };
            let control = viewport::element_size(&no_ref);
            let position = relocate(
                window_size,
                control,
                EVADE_PADDING_PX,
                &mut *rng.borrow_mut(),
            );
            if store.evade(position) {
                console::log!("no button moved", position.x, position.y);
            }
        })
    };

    let on_accept = {
        let store = store.clone();
        let celebration = celebration.clone();
        Callback::from(move |_: MouseEvent| match store.accept() {
            AcceptOutcome::Started => {
                console::log!("proposal accepted");
                celebration_runtime::start(&celebration);
            }
            AcceptOutcome::AlreadyAccepted => {}
        })
    };

    let state = *card;
    let content = state.content();
    let accepted = state.accepted();

    let buttons = if accepted {
        html! {}
    } else {
        let inline_no = if state.no_control() == NoControl::Inline {
            html! {
                <button class="no-button" onmouseenter={on_evade.clone()}>{ "No" }</button>
            }
        } else {
            html! {}
        };
        html! {
            <div class="button-row">
                <button class="yes-button" onclick={on_accept}>
                    <span class="yes-gloss" />
                    <span class="yes-label">
                        { "YES" }
                        { icons::heart("yes-heart") }
                    </span>
                </button>
                {inline_no}
            </div>
        }
    };

    let floating_no = match state.no_control() {
        NoControl::Floating(position) => {
            let style = format!(
                "position: fixed; left: 0; top: 0; z-index: 9999; transform: translate({}px, {}px); transition: {};",
                position.x,
                position.y,
                evade_transition().css_transition("transform"),
            );
            html! {
                <button
                    ref={no_ref}
                    class="no-button"
                    style={style}
                    onmouseenter={on_evade.clone()}
                    onclick={on_evade}
                >
                    { "No" }
                </button>
            }
        }
        NoControl::Inline | NoControl::Hidden => html! {},
    };

    let subtitle = match content.subtitle() {
        Some(text) => html! { <p class="card-subtitle">{ text }</p> },
        None => html! {},
    };

    let success = if accepted {
        html! { <Bouquet /> }
    } else {
        html! {}
    };

    html! {
        <div class="page">
            <FloatingBackground floaters={floaters} />
            <div class="card-shell">
                <div class="card">
                    <div class="sparkle sparkle-top">{ icons::sparkle(Classes::new()) }</div>
                    <div class="sparkle sparkle-bottom">{ icons::sparkle(Classes::new()) }</div>
                    <div class="card-body">
                        <Hero content={content} />
                        <div class="card-text">
                            <div class="card-badge">
                                { icons::sparkle("badge-sparkle") }
                                { content.badge() }
                                { icons::sparkle("badge-sparkle") }
                            </div>
                            <h1 class="card-heading">{ content.heading() }</h1>
                            {subtitle}
                        </div>
                        {buttons}
                        {success}
                    </div>
                </div>
            </div>
            {floating_no}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FloatingBackgroundProps {
    floaters: Rc<Vec<OrnamentDescriptor>>,
}

#[function_component(FloatingBackground)]
fn floating_background(props: &FloatingBackgroundProps) -> Html {
    html! {
        <div class="floaters" aria-hidden="true">
            { for props.floaters.iter().map(ornament_view) }
        </div>
    }
}

fn ornament_view(ornament: &OrnamentDescriptor) -> Html {
    let motion = ornament.motion();
    let style = format!(
        "left: {:.3}%; top: {:.3}%; width: {:.1}px; --rise: {}px; --sway: {:.2}px; --peak-opacity: {}; animation: {};",
        ornament.left_percent,
        ornament.top_percent,
        ornament.size_px,
        motion.rise_px,
        motion.sway_px,
        motion.opacity[1],
        motion.transition.css_animation("ornament-float"),
    );
    let body = match (ornament.kind, ornament.image) {
        (OrnamentKind::Branded, Some(src)) => html! {
            <img src={src} alt="floating cinna" class="floater-img" />
        },
        (OrnamentKind::Cloud, _) => icons::cloud(Classes::new()),
        _ => icons::heart(Classes::new()),
    };
    html! {
        <div key={ornament.id} class="floater" style={style}>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    content: CardContent,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    match props.content {
        CardContent::Question => html! {
            <div key="question-img" class="hero hero-question">
                <div class="hero-bob">
                    <img src={HERO_QUESTION_SRC} alt="Cinnamoroll Asking" width="240" height="240" />
                </div>
                <div class="hero-heart">{ icons::heart(Classes::new()) }</div>
            </div>
        },
        CardContent::Celebration => {
            let pop = hero_pop_transition().css_animation("hero-pop");
            html! {
                <div key="success-img" class="hero hero-success" style={format!("animation: {pop};")}>
                    <img src={HERO_ACCEPTED_SRC} alt="Happy Cinnamoroll" width="280" height="280" />
                    <div class="hero-badge hero-badge-top" style="animation-delay: 200ms;">
                        { icons::heart(Classes::new()) }
                    </div>
                    <div class="hero-badge hero-badge-bottom" style="animation-delay: 400ms;">
                        { icons::heart(Classes::new()) }
                    </div>
                </div>
            }
        }
    }
}

#[function_component(Bouquet)]
fn bouquet() -> Html {
    let tulips = use_memo((), |_| roll_bouquet(&mut viewport::seeded_rng()));
    let footer = Transition::from(Tween::once(600.0).delayed(FOOTER_DELAY_MS))
        .css_animation("fade-in");
    html! {
        <div class="bouquet">
            <div class="tulip-row">
                { for tulips.iter().map(|(style, motion)| tulip_view(style, motion)) }
            </div>
            <div class="bouquet-footer" style={format!("animation: {footer};")}>
                <p>{ "Forever & Always" }</p>
                <div class="footer-hearts">
                    { icons::heart("footer-heart-sky") }
                    { icons::heart("footer-heart-blue") }
                    { icons::heart("footer-heart-indigo") }
                </div>
            </div>
        </div>
    }
}

fn tulip_view(style: &TulipStyle, motion: &TulipMotion) -> Html {
    let pop = format!("animation: {};", motion.pop.css_animation("tulip-pop"));
    let sway = format!(
        "--sway-from: {:.2}deg; --sway-to: {:.2}deg; animation: {};",
        motion.sway_from_deg,
        motion.sway_to_deg,
        motion.sway.css_animation("tulip-sway"),
    );
    let left_leaf = format!("animation: {};", motion.left_leaf.css_animation("leaf-grow-left"));
    let right_leaf = format!("animation: {};", motion.right_leaf.css_animation("leaf-grow-right"));
    html! {
        <div class="tulip" style={pop}>
            <div class="tulip-head" style={sway}>
                { icons::tulip_flower(classes!("tulip-flower", style.color)) }
            </div>
            <div class={classes!("tulip-stem", style.leaf_color)} />
            <div class={classes!("tulip-leaf", "tulip-leaf-left", style.leaf_color)} style={left_leaf} />
            <div class={classes!("tulip-leaf", "tulip-leaf-right", style.leaf_color)} style={right_leaf} />
        </div>
    }
}
