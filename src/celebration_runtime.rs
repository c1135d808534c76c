use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Interval;
use js_sys::{Date, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use valentine_card_core::celebration::EMISSION_INTERVAL_MS;
use valentine_card_core::{opening_burst, Burst, CelebrationSchedule, Tick};

use crate::viewport;

/// Slot holding the repeating emission timer. Dropping the interval cancels it.
pub(crate) type CelebrationSlot = Rc<RefCell<Option<Interval>>>;

thread_local! {
    static MISSING_WARNED: Cell<bool> = Cell::new(false);
}

/// Fires the opening burst and schedules the decaying side bursts. Returns
/// `false` without touching the slot when a celebration is already running.
pub(crate) fn start(slot: &CelebrationSlot) -> bool {
    if slot.borrow().is_some() {
        console::warn!("celebration already running");
        return false;
    }
    console::log!("celebration started");
    fire(&opening_burst());
    run(slot, CelebrationSchedule::start(Date::now()));
    true
}

fn run(slot: &CelebrationSlot, mut schedule: CelebrationSchedule) {
    let mut rng = viewport::seeded_rng();
    let slot_for_tick = slot.clone();
    let interval = Interval::new(EMISSION_INTERVAL_MS, move || {
        match schedule.tick(Date::now(), &mut rng) {
            Tick::Emit(bursts) => {
                for burst in &bursts {
                    fire(burst);
                }
            }
            Tick::Finished => {
                console::log!("celebration finished");
                slot_for_tick.borrow_mut().take();
            }
        }
    });
    *slot.borrow_mut() = Some(interval);
    #[cfg(test)]
    record_started_slot(slot);
}

#[cfg(test)]
thread_local! {
    static LAST_STARTED_SLOT: RefCell<Option<CelebrationSlot>> = RefCell::new(None);
}

#[cfg(test)]
fn record_started_slot(slot: &CelebrationSlot) {
    LAST_STARTED_SLOT.with(|last| {
        *last.borrow_mut() = Some(slot.clone());
    });
}

#[cfg(test)]
pub(crate) fn take_started_slot() -> Option<CelebrationSlot> {
    LAST_STARTED_SLOT.with(|last| last.borrow_mut().take())
}

/// Cancels a running emission, used when the card unmounts.
pub(crate) fn stop(slot: &CelebrationSlot) {
    if slot.borrow_mut().take().is_some() {
        console::log!("celebration cancelled");
    }
}

fn fire(burst: &Burst) {
    let Some(confetti) = confetti_fn() else {
        let warned = MISSING_WARNED.with(|flag| flag.replace(true));
        if !warned {
            console::warn!("confetti script not loaded, skipping celebration bursts");
        }
        return;
    };
    let options = burst_options(burst);
    if let Err(err) = confetti.call1(&JsValue::NULL, &options) {
        console::warn!("confetti call failed", err);
    }
}

fn confetti_fn() -> Option<Function> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("confetti")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Function>().ok()
}

fn burst_options(burst: &Burst) -> JsValue {
    let options = Object::new();
    set(&options, "particleCount", JsValue::from(burst.particle_count));
    set(&options, "spread", JsValue::from_f64(burst.spread_deg));
    let origin = Object::new();
    set(&origin, "x", JsValue::from_f64(burst.origin.x));
    set(&origin, "y", JsValue::from_f64(burst.origin.y));
    set(&options, "origin", origin.into());
    if let Some(velocity) = burst.start_velocity {
        set(&options, "startVelocity", JsValue::from_f64(velocity));
    }
    if let Some(ticks) = burst.ticks {
        set(&options, "ticks", JsValue::from(ticks));
    }
    if let Some(z_index) = burst.z_index {
        set(&options, "zIndex", JsValue::from(z_index));
    }
    options.into()
}

fn set(target: &Object, key: &str, value: JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), &value);
}
