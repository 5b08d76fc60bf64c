use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use chooser_core::{
    Difficulty, GameConfig, GameType, DIFFICULTIES, PLAYER_COUNT_MAX, PLAYER_COUNT_MIN,
};

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub(crate) on_start: Callback<GameConfig>,
    pub(crate) on_info: Callback<()>,
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Normal => "Normal",
        Difficulty::Hard => "Hard",
    }
}

#[function_component(SettingsScreen)]
pub(crate) fn settings_screen(props: &SettingsProps) -> Html {
    let players = use_state(|| PLAYER_COUNT_MIN);
    let elimination = use_state(|| false);
    let game_type = use_state(|| GameType::Simple);
    let use_ai = use_state(|| false);
    let difficulty = use_state(|| Difficulty::Normal);

    let count_buttons: Html = (PLAYER_COUNT_MIN..=PLAYER_COUNT_MAX)
        .map(|count| {
            let players = players.clone();
            let selected = *players == count;
            let onclick = Callback::from(move |_: MouseEvent| players.set(count));
            html! {
                <button
                    class={classes!("choice", selected.then_some("selected"))}
                    {onclick}
                >
                    { count }
                </button>
            }
        })
        .collect();

    let mode_button = |label: &str, value: bool| {
        let elimination = elimination.clone();
        let selected = *elimination == value;
        let onclick = Callback::from(move |_: MouseEvent| elimination.set(value));
        html! {
            <button
                class={classes!("choice", selected.then_some("selected"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let type_button = |label: &str, value: GameType| {
        let game_type = game_type.clone();
        let selected = *game_type == value;
        let onclick = Callback::from(move |_: MouseEvent| game_type.set(value));
        html! {
            <button
                class={classes!("choice", selected.then_some("selected"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let on_ai_change = {
        let use_ai = use_ai.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            use_ai.set(input.checked());
        })
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            if let Ok(parsed) = select.value().parse::<Difficulty>() {
                difficulty.set(parsed);
            }
        })
    };

    let difficulty_options: Html = DIFFICULTIES
        .iter()
        .map(|option| {
            html! {
                <option
                    value={option.as_str()}
                    selected={*difficulty == *option}
                >
                    { difficulty_label(*option) }
                </option>
            }
        })
        .collect();

    let task_options = if *game_type == GameType::Tasks {
        html! {
            <section class="task-options">
                <label class="check-row">
                    <input type="checkbox" checked={*use_ai} onchange={on_ai_change} />
                    { " Use AI tasks" }
                </label>
                <label for="difficulty">{ "Difficulty" }</label>
                <select id="difficulty" onchange={on_difficulty_change}>
                    { difficulty_options }
                </select>
            </section>
        }
    } else {
        html! {}
    };

    let on_start = {
        let players = players.clone();
        let elimination = elimination.clone();
        let game_type = game_type.clone();
        let use_ai = use_ai.clone();
        let difficulty = difficulty.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| {
            on_start.emit(GameConfig {
                players: *players,
                elimination: *elimination,
                game_type: *game_type,
                use_ai: *use_ai,
                difficulty: *difficulty,
            });
        })
    };

    let on_info = {
        let on_info = props.on_info.clone();
        Callback::from(move |_: MouseEvent| on_info.emit(()))
    };

    html! {
        <div class="settings">
            <h1>{ "Game setup" }</h1>
            <section>
                <label>{ "Players" }</label>
                <div class="choice-row">{ count_buttons }</div>
            </section>
            <section>
                <label>{ "Mode" }</label>
                <div class="choice-row">
                    { mode_button("No elimination", false) }
                    { mode_button("Elimination", true) }
                </div>
            </section>
            <section>
                <label>{ "Game type" }</label>
                <div class="choice-row">
                    { type_button("Simple", GameType::Simple) }
                    { type_button("With tasks", GameType::Tasks) }
                </div>
            </section>
            { task_options }
            <button class="start wide" onclick={on_start}>{ "Start" }</button>
            <button class="link wide" onclick={on_info}>{ "How to play" }</button>
        </div>
    }
}
