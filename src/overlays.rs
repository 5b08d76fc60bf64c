use yew::prelude::*;

/// Blocking advisory shown on handheld devices in landscape. Purely visual;
/// touch tracking keeps whatever state it had.
#[function_component(OrientationGate)]
pub(crate) fn orientation_gate() -> Html {
    html! {
        <div class="overlay orientation-gate">
            <div class="overlay-card">
                <h2>{ "Please rotate your phone" }</h2>
                <p>{ "The game needs portrait orientation" }</p>
                <div class="overlay-glyph">{ "\u{21BB} \u{1F4F1} \u{21BB}" }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct InfoPopupProps {
    pub(crate) on_close: Callback<()>,
}

#[function_component(InfoPopup)]
pub(crate) fn info_popup(props: &InfoPopupProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    html! {
        <div class="overlay info-popup">
            <div class="overlay-card">
                <h3>{ "How to play" }</h3>
                <p>
                    <b>{ "Simple mode: " }</b>
                    { "the app works as a roulette that picks a random player." }
                </p>
                <p>
                    <b>{ "Task mode: " }</b>
                    { "every spin hands the picked player a task to perform." }
                </p>
                <p>
                    <b>{ "Elimination: " }</b>
                    { "a picked player (or one who fails their task) is out of \
                       later spins, until a single winner remains." }
                </p>
                <p>
                    <b>{ "AI tasks: " }</b>
                    { "tasks are generated on the fly instead of drawn from the task list." }
                </p>
                <button class="wide" onclick={on_close}>{ "Close" }</button>
            </div>
        </div>
    }
}
