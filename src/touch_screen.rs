use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, TouchEvent};
use yew::prelude::*;

use chooser_core::{
    hit_test, key_touch_id, slot_centers, slot_for_key, GameConfig, HoldGate, TouchId, TouchMap,
    Viewport, HOLD_DURATION_MS, HOLD_TICK_MS, TOUCH_TARGET_RADIUS,
};

use crate::device;
use crate::overlays::OrientationGate;

pub(crate) const TOUCH_VIBRATE_MS: u32 = 100;
pub(crate) const ADVANCE_VIBRATE_MS: u32 = 200;

const RING_RADIUS: f32 = 45.0;

#[derive(Properties, PartialEq)]
pub(crate) struct TouchProps {
    pub(crate) config: GameConfig,
    pub(crate) on_ready: Callback<GameConfig>,
}

struct TouchTracking {
    map: TouchMap,
    gate: HoldGate,
}

/// Everything the input handlers need to push a touch-map change through
/// the hold gate and back into render state.
#[derive(Clone)]
struct HoldSync {
    config: GameConfig,
    tracking: Rc<RefCell<TouchTracking>>,
    hold_timer: Rc<RefCell<Option<Interval>>>,
    held: UseStateHandle<Vec<bool>>,
    progress_ms: UseStateHandle<u32>,
    holding: UseStateHandle<bool>,
    on_ready: Callback<GameConfig>,
}

impl HoldSync {
    fn apply(&self) {
        let (flags, was_holding, now_holding) = {
            let mut state = self.tracking.borrow_mut();
            let was = state.gate.is_holding();
            let all = state.map.all_held();
            state.gate.set_all_held(all);
            (state.map.held_flags(), was, state.gate.is_holding())
        };
        self.held.set(flags);
        self.holding.set(now_holding);
        if !now_holding {
            // Any released slot voids the countdown entirely.
            self.hold_timer.borrow_mut().take();
            self.progress_ms.set(0);
            return;
        }
        if was_holding {
            return;
        }
        self.progress_ms.set(0);
        let sync = self.clone();
        *self.hold_timer.borrow_mut() = Some(Interval::new(HOLD_TICK_MS, move || {
            let fired = sync.tracking.borrow_mut().gate.tick();
            sync.progress_ms.set(sync.tracking.borrow().gate.progress_ms());
            if fired {
                sync.hold_timer.borrow_mut().take();
                device::vibrate(ADVANCE_VIBRATE_MS);
                sync.on_ready.emit(sync.config);
            }
        }));
    }
}

#[function_component(TouchScreen)]
pub(crate) fn touch_screen(props: &TouchProps) -> Html {
    let config = props.config;
    let slot_count = config.players as usize;

    let held = use_state(|| vec![false; slot_count]);
    let progress_ms = use_state(|| 0u32);
    let holding = use_state(|| false);
    let viewport = use_state(device::viewport_size);
    let portrait = use_state(device::is_portrait);

    let tracking = use_mut_ref(|| TouchTracking {
        map: TouchMap::new(slot_count),
        gate: HoldGate::new(),
    });
    let hold_timer = use_mut_ref(|| None::<Interval>);
    // Live mirror of the viewport for the mount-time event closures.
    let viewport_live = use_mut_ref(device::viewport_size);

    let sync = HoldSync {
        config,
        tracking: tracking.clone(),
        hold_timer: hold_timer.clone(),
        held: held.clone(),
        progress_ms: progress_ms.clone(),
        holding: holding.clone(),
        on_ready: props.on_ready.clone(),
    };

    {
        let sync = sync.clone();
        let viewport = viewport.clone();
        let viewport_live = viewport_live.clone();
        let portrait = portrait.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");

            let start_listener = {
                let sync = sync.clone();
                let viewport_live = viewport_live.clone();
                EventListener::new_with_options(
                    &window,
                    "touchstart",
                    EventListenerOptions {
                        phase: EventListenerPhase::Capture,
                        passive: false,
                    },
                    move |event: &Event| {
                        let Some(event) = event.dyn_ref::<TouchEvent>() else {
                            return;
                        };
                        event.prevent_default();
                        let (width, height) = *viewport_live.borrow();
                        let view = Viewport::new(width, height);
                        let touches = event.changed_touches();
                        let mut pressed_any = false;
                        for index in 0..touches.length() {
                            let Some(touch) = touches.item(index) else {
                                continue;
                            };
                            // Touches over no target are ignored outright.
                            let Some(slot) = hit_test(
                                sync.config.players,
                                view,
                                touch.client_x() as f32,
                                touch.client_y() as f32,
                            ) else {
                                continue;
                            };
                            if sync
                                .tracking
                                .borrow_mut()
                                .map
                                .press(touch.identifier() as TouchId, slot)
                            {
                                pressed_any = true;
                            }
                        }
                        if pressed_any {
                            device::vibrate(TOUCH_VIBRATE_MS);
                            sync.apply();
                        }
                    },
                )
            };

            let release_handler = |sync: HoldSync| {
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<TouchEvent>() else {
                        return;
                    };
                    let touches = event.changed_touches();
                    let mut released_any = false;
                    for index in 0..touches.length() {
                        let Some(touch) = touches.item(index) else {
                            continue;
                        };
                        if sync
                            .tracking
                            .borrow_mut()
                            .map
                            .release(touch.identifier() as TouchId)
                            .is_some()
                        {
                            released_any = true;
                        }
                    }
                    if released_any {
                        sync.apply();
                    }
                }
            };

            let end_listener = EventListener::new_with_options(
                &window,
                "touchend",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                release_handler(sync.clone()),
            );

            let cancel_listener = EventListener::new_with_options(
                &window,
                "touchcancel",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                release_handler(sync.clone()),
            );

            let key_down_listener = {
                let sync = sync.clone();
                EventListener::new_with_options(
                    &window,
                    "keydown",
                    EventListenerOptions {
                        phase: EventListenerPhase::Capture,
                        passive: false,
                    },
                    move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.repeat() {
                            return;
                        }
                        let Some(slot) =
                            slot_for_key(&event.key(), sync.config.players as usize)
                        else {
                            return;
                        };
                        if sync.tracking.borrow_mut().map.press(key_touch_id(slot), slot) {
                            sync.apply();
                        }
                    },
                )
            };

            let key_up_listener = {
                let sync = sync.clone();
                EventListener::new_with_options(
                    &window,
                    "keyup",
                    EventListenerOptions {
                        phase: EventListenerPhase::Capture,
                        passive: false,
                    },
                    move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let Some(slot) =
                            slot_for_key(&event.key(), sync.config.players as usize)
                        else {
                            return;
                        };
                        if sync
                            .tracking
                            .borrow_mut()
                            .map
                            .release(key_touch_id(slot))
                            .is_some()
                        {
                            sync.apply();
                        }
                    },
                )
            };

            // Orientation changes are cosmetic for tracking: the layout and
            // the advisory re-resolve, held state stays put.
            let on_viewport_change = Rc::new(move || {
                let size = device::viewport_size();
                *viewport_live.borrow_mut() = size;
                viewport.set(size);
                portrait.set(device::is_portrait());
            });
            let resize_listener = {
                let on_viewport_change = on_viewport_change.clone();
                EventListener::new(&window, "resize", move |_| on_viewport_change())
            };
            let orientation_listener = {
                let on_viewport_change = on_viewport_change.clone();
                EventListener::new(&window, "orientationchange", move |_| on_viewport_change())
            };

            move || {
                drop(start_listener);
                drop(end_listener);
                drop(cancel_listener);
                drop(key_down_listener);
                drop(key_up_listener);
                drop(resize_listener);
                drop(orientation_listener);
                sync.hold_timer.borrow_mut().take();
                let mut state = sync.tracking.borrow_mut();
                state.map.clear();
                state.gate.reset();
            }
        });
    }

    let (view_width, view_height) = *viewport;
    let view = Viewport::new(view_width, view_height);
    let targets: Html = slot_centers(config.players, view)
        .into_iter()
        .enumerate()
        .map(|(slot, (cx, cy))| {
            let is_held = held.get(slot).copied().unwrap_or(false);
            let style = format!(
                "left: {}px; top: {}px;",
                cx - TOUCH_TARGET_RADIUS,
                cy - TOUCH_TARGET_RADIUS
            );
            html! {
                <div class="touch-slot" {style}>
                    <div class="touch-slot-number">{ slot + 1 }</div>
                    <div class={classes!("touch-target", is_held.then_some("held"))}></div>
                </div>
            }
        })
        .collect();

    let header = if *holding {
        let fraction = (*progress_ms as f32 / HOLD_DURATION_MS as f32).min(1.0);
        let circumference = std::f32::consts::PI * 2.0 * RING_RADIUS;
        let offset = circumference * (1.0 - fraction);
        let fill_style =
            format!("stroke-dasharray: {circumference}; stroke-dashoffset: {offset};");
        html! {
            <div class="hold-progress">
                <svg viewBox="0 0 100 100">
                    <circle class="ring-track" r={RING_RADIUS.to_string()} cx="50" cy="50" />
                    <circle
                        class="ring-fill"
                        r={RING_RADIUS.to_string()}
                        cx="50"
                        cy="50"
                        style={fill_style}
                    />
                </svg>
                <div class="hold-percent">
                    { format!("{}%", (fraction * 100.0).round() as u32) }
                </div>
            </div>
        }
    } else {
        let active_count = held.iter().filter(|flag| **flag).count();
        html! {
            <>
                <h1>{ "Put your fingers on the screen" }</h1>
                <p>{ format!("Waiting for players: {} / {}", active_count, config.players) }</p>
            </>
        }
    };

    let advisory = if !*portrait && device::is_handheld() {
        html! { <OrientationGate /> }
    } else {
        html! {}
    };

    html! {
        <div class="touch-screen">
            { advisory }
            <div class="touch-header">{ header }</div>
            <div class="touch-field">{ targets }</div>
        </div>
    }
}
