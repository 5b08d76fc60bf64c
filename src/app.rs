use yew::prelude::*;

use chooser_core::GameConfig;

use crate::app_router;
use crate::game_screen::GameScreen;
use crate::lobby_screen::LobbyScreen;
use crate::overlays::InfoPopup;
use crate::settings_screen::SettingsScreen;
use crate::touch_screen::TouchScreen;

/// Strictly forward flow; restart is the only way back.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Settings,
    Lobby(GameConfig),
    Touch(GameConfig),
    Game(GameConfig),
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let screen = use_state(|| Screen::Settings);
    let show_info = use_state(|| false);

    let on_start = {
        let screen = screen.clone();
        Callback::from(move |config: GameConfig| {
            let next = if app_router::init_config().legacy_lobby {
                Screen::Lobby(config)
            } else {
                Screen::Touch(config)
            };
            screen.set(next);
        })
    };

    let on_lobby_full = {
        let screen = screen.clone();
        Callback::from(move |config: GameConfig| screen.set(Screen::Touch(config)))
    };

    let on_checked_in = {
        let screen = screen.clone();
        Callback::from(move |config: GameConfig| screen.set(Screen::Game(config)))
    };

    let on_restart = {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.set(Screen::Settings))
    };

    let on_info_open = {
        let show_info = show_info.clone();
        Callback::from(move |_: ()| show_info.set(true))
    };

    let on_info_close = {
        let show_info = show_info.clone();
        Callback::from(move |_: ()| show_info.set(false))
    };

    let body = match &*screen {
        Screen::Settings => html! {
            <SettingsScreen on_start={on_start} on_info={on_info_open} />
        },
        Screen::Lobby(config) => html! {
            <LobbyScreen config={*config} on_ready={on_lobby_full} />
        },
        Screen::Touch(config) => html! {
            <TouchScreen config={*config} on_ready={on_checked_in} />
        },
        Screen::Game(config) => html! {
            <GameScreen config={*config} on_restart={on_restart} />
        },
    };

    let info = if *show_info {
        html! { <InfoPopup on_close={on_info_close} /> }
    } else {
        html! {}
    };

    html! {
        <main class="app">
            {body}
            {info}
        </main>
    }
}
