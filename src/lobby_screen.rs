use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use chooser_core::GameConfig;

pub(crate) const LOBBY_JOIN_TICK_MS: u32 = 1000;
pub(crate) const LOBBY_HANDOFF_MS: u32 = 1000;

#[derive(Properties, PartialEq)]
pub(crate) struct LobbyProps {
    pub(crate) config: GameConfig,
    pub(crate) on_ready: Callback<GameConfig>,
}

/// Legacy join simulation: one player "connects" per tick, then a short
/// pause before handing the config to the touch screen.
#[function_component(LobbyScreen)]
pub(crate) fn lobby_screen(props: &LobbyProps) -> Html {
    let config = props.config;
    let connected = use_state(|| 0u8);

    {
        let connected = connected.clone();
        let on_ready = props.on_ready.clone();
        use_effect_with((), move |_| {
            let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let handoff_slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let interval_handle = interval_slot.clone();
            let handoff_handle = handoff_slot.clone();
            let mut joined = 0u8;
            let interval = Interval::new(LOBBY_JOIN_TICK_MS, move || {
                if joined >= config.players {
                    return;
                }
                joined += 1;
                connected.set(joined);
                if joined >= config.players {
                    interval_handle.borrow_mut().take();
                    let on_ready = on_ready.clone();
                    *handoff_handle.borrow_mut() = Some(Timeout::new(LOBBY_HANDOFF_MS, move || {
                        on_ready.emit(config);
                    }));
                }
            });
            *interval_slot.borrow_mut() = Some(interval);
            move || {
                interval_slot.borrow_mut().take();
                handoff_slot.borrow_mut().take();
            }
        });
    }

    let dots: Html = (0..config.players)
        .map(|index| {
            let joined = index < *connected;
            html! {
                <div class={classes!("lobby-dot", joined.then_some("joined"))}></div>
            }
        })
        .collect();

    html! {
        <div class="lobby">
            <h2>{ "Waiting for players..." }</h2>
            <p>
                { "Connected: " }
                <b>{ *connected }</b>
                { format!(" / {}", config.players) }
            </p>
            <div class="lobby-row">{ dots }</div>
        </div>
    }
}
