mod args;
mod backend;
mod config;
mod logger;
mod state;

use admin_ui::theme::Theme;
use args::{config_path, parse_args};
use backend::MockBackend;
use config::Config;
use iced::{Pixels, Settings, Task};
use state::{Msg, State};
use std::error::Error;
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let config = Config::load(config_path(&args))?;

    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level)?;

    let inviter = config.inviter();
    let mut users = vec![inviter.clone()];
    users.extend(config.users());
    info!(users = users.len(), "starting admin console");
    let backend = MockBackend::new(users);

    let settings = Settings {
        default_font: admin_ui::font::REGULAR,
        default_text_size: Pixels(16.0),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: iced::Size::new(1000.0, 700.0),
        ..Default::default()
    };

    iced::application(AdminConsole::title, AdminConsole::update, AdminConsole::view)
        .theme(|_| Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || AdminConsole::new(State::new(Box::new(backend), inviter)))
        .inspect_err(|e| error!("admin console stopped: {}", e))?;

    Ok(())
}

pub struct AdminConsole {
    state: State,
}

impl AdminConsole {
    pub fn new(state: State) -> (Self, Task<Msg>) {
        (Self { state }, Task::none())
    }

    pub fn title(&self) -> String {
        "Admin console".to_string()
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    pub fn view(&self) -> admin_ui::widget::Element<Msg> {
        self.state.view()
    }
}
