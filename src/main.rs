mod app;
mod app_router;
mod device;
mod game_screen;
mod lobby_screen;
mod overlays;
mod settings_screen;
mod tasks;
mod touch_screen;

use app::App;

fn main() {
    app_router::set_init_config(app_router::load_init_config());
    yew::Renderer::<App>::new().render();
}
