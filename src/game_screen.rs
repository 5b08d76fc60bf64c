use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use chooser_core::{
    GameConfig, GameSession, GameType, Player, PlayerId, TaskSource, TaskVerdict, SPIN_FRAMES,
    SPIN_TICK_MS,
};

use crate::app_router;
use crate::device;
use crate::tasks;

pub(crate) const PICK_VIBRATE_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub(crate) struct GameProps {
    pub(crate) config: GameConfig,
    pub(crate) on_restart: Callback<()>,
}

/// Handles shared by the spin timer, the task fetch and the verdict prompt.
/// The session itself lives in `session` for the screen's lifetime; the
/// use_state fields only mirror it for rendering.
#[derive(Clone)]
struct RoundState {
    session: Rc<RefCell<GameSession>>,
    players: UseStateHandle<Vec<Player>>,
    chosen: UseStateHandle<Option<PlayerId>>,
    highlight: UseStateHandle<Option<PlayerId>>,
    task: UseStateHandle<Option<String>>,
    task_loading: UseStateHandle<bool>,
    choosing: UseStateHandle<bool>,
    awaiting_verdict: UseStateHandle<Option<PlayerId>>,
    winner: UseStateHandle<Option<PlayerId>>,
    spin_timer: Rc<RefCell<Option<Interval>>>,
    round_seq: Rc<RefCell<u64>>,
    alive: Rc<RefCell<bool>>,
}

impl RoundState {
    fn refresh_players(&self) {
        self.players
            .set(self.session.borrow().roster().players().to_vec());
    }

    fn check_winner(&self) {
        if let Some(winner) = self.session.borrow_mut().take_winner() {
            self.winner.set(Some(winner));
        }
    }

    /// Ends the round unless a verdict gate stands between the pick and the
    /// elimination step.
    fn conclude(&self, pick: PlayerId) {
        if self.session.borrow().needs_verdict() {
            self.awaiting_verdict.set(Some(pick));
            return;
        }
        self.session
            .borrow_mut()
            .settle(pick, TaskVerdict::NotRequired);
        self.refresh_players();
        self.check_winner();
        self.choosing.set(false);
    }

    fn finish_pick(&self, pick: PlayerId, round: u64) {
        let config = self.session.borrow().config();
        if config.game_type != GameType::Tasks {
            self.conclude(pick);
            return;
        }
        self.task_loading.set(true);
        let source = TaskSource::from_use_ai(config.use_ai);
        let base = app_router::init_config().task_base;
        let state = self.clone();
        spawn_local(async move {
            let text = tasks::fetch_task(&base, source, config.difficulty).await;
            // The screen may be gone, or a newer round may own the state by
            // the time the request resolves; a stale result is discarded.
            if !*state.alive.borrow() || *state.round_seq.borrow() != round {
                return;
            }
            state.task.set(Some(text));
            state.task_loading.set(false);
            state.conclude(pick);
        });
    }

    fn settle_verdict(&self, completed: bool) {
        let Some(pick) = *self.awaiting_verdict else {
            return;
        };
        self.awaiting_verdict.set(None);
        let verdict = if completed {
            TaskVerdict::Completed
        } else {
            TaskVerdict::Failed
        };
        self.session.borrow_mut().settle(pick, verdict);
        self.refresh_players();
        self.check_winner();
        self.choosing.set(false);
    }
}

#[function_component(GameScreen)]
pub(crate) fn game_screen(props: &GameProps) -> Html {
    let config = props.config;
    let session = use_mut_ref(move || GameSession::new(config));
    let players = use_state(|| {
        (0..config.players as usize)
            .map(|id| Player { id, active: true })
            .collect::<Vec<_>>()
    });
    let chosen = use_state(|| None::<PlayerId>);
    let highlight = use_state(|| None::<PlayerId>);
    let task = use_state(|| None::<String>);
    let task_loading = use_state(|| false);
    let choosing = use_state(|| false);
    let awaiting_verdict = use_state(|| None::<PlayerId>);
    let winner = use_state(|| None::<PlayerId>);
    let spin_timer = use_mut_ref(|| None::<Interval>);
    let round_seq = use_mut_ref(|| 0u64);
    let alive = use_mut_ref(|| true);

    let state = RoundState {
        session,
        players: players.clone(),
        chosen: chosen.clone(),
        highlight: highlight.clone(),
        task: task.clone(),
        task_loading: task_loading.clone(),
        choosing: choosing.clone(),
        awaiting_verdict: awaiting_verdict.clone(),
        winner: winner.clone(),
        spin_timer,
        round_seq,
        alive,
    };

    {
        let alive = state.alive.clone();
        let spin_timer = state.spin_timer.clone();
        use_effect_with((), move |_| {
            move || {
                *alive.borrow_mut() = false;
                spin_timer.borrow_mut().take();
            }
        });
    }

    let on_choose = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            // One selection at a time; the live timer slot backs up the
            // busy flag against double taps inside a single frame.
            if *state.choosing || state.spin_timer.borrow().is_some() {
                return;
            }
            if !state.session.borrow().can_select() {
                return;
            }
            let round = {
                let mut seq = state.round_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            state.choosing.set(true);
            state.chosen.set(None);
            state.task.set(None);
            state.task_loading.set(false);
            state.awaiting_verdict.set(None);

            let mut frames_left = SPIN_FRAMES;
            let spin_slot = state.spin_timer.clone();
            let tick_state = state.clone();
            *spin_slot.borrow_mut() = Some(Interval::new(SPIN_TICK_MS, move || {
                if frames_left > 0 {
                    frames_left -= 1;
                    let frame = tick_state.session.borrow().draw(&mut rand::thread_rng());
                    tick_state.highlight.set(frame);
                    return;
                }
                tick_state.spin_timer.borrow_mut().take();
                tick_state.highlight.set(None);
                // The final pick is independent of every spin frame.
                let pick = tick_state.session.borrow().draw(&mut rand::thread_rng());
                let Some(pick) = pick else {
                    tick_state.choosing.set(false);
                    return;
                };
                tick_state.chosen.set(Some(pick));
                device::vibrate(PICK_VIBRATE_MS);
                tick_state.finish_pick(pick, round);
            }));
        })
    };

    let on_restart = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    let tokens: Html = players
        .iter()
        .map(|player| {
            let mut class = classes!("player-token");
            if !player.active {
                class.push("out");
            } else if *chosen == Some(player.id) {
                class.push("picked");
            } else if *highlight == Some(player.id) {
                class.push("spinning");
            }
            html! { <div class={class}>{ player.id + 1 }</div> }
        })
        .collect();

    let task_area = if *task_loading {
        html! {
            <div class="task">
                <p class="task-loading">{ "Fetching a task..." }</p>
            </div>
        }
    } else if let Some(text) = (*task).as_ref() {
        html! {
            <div class="task">
                <p class="task-label">{ "Task:" }</p>
                <p class="task-text">{ text.clone() }</p>
            </div>
        }
    } else {
        html! {}
    };

    let verdict_prompt = if let Some(pick) = *awaiting_verdict {
        let completed = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.settle_verdict(true))
        };
        let failed = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.settle_verdict(false))
        };
        html! {
            <div class="verdict">
                <p>{ format!("Did player {} complete the task?", pick + 1) }</p>
                <div class="choice-row">
                    <button class="choice" onclick={completed}>{ "Completed" }</button>
                    <button class="choice danger" onclick={failed}>{ "Failed" }</button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let winner_overlay = if let Some(id) = *winner {
        html! {
            <div class="overlay winner">
                <div class="overlay-card">
                    <h2>{ format!("Player {} wins!", id + 1) }</h2>
                    <p>{ "Game over, the winner is found." }</p>
                    <button class="wide" onclick={on_restart.clone()}>{ "Back to setup" }</button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let active_count = players.iter().filter(|player| player.active).count();
    let choose_disabled = *choosing || active_count <= 1;

    html! {
        <div class="game">
            <h2>{ "Pick a player" }</h2>
            <div class="token-row">{ tokens }</div>
            { task_area }
            { verdict_prompt }
            <div class="game-actions">
                <button class="start" onclick={on_choose} disabled={choose_disabled}>
                    { "Make the pick" }
                </button>
                <button class="danger" onclick={on_restart}>{ "Restart" }</button>
            </div>
            { winner_overlay }
        </div>
    }
}
