//! Phishing Awareness Simulator - Main Entry Point

mod logic;
mod ui;
pub mod constants;

use rand::seq::SliceRandom;

use logic::presenter;
use logic::scenario::ScenarioRepository;
use logic::session::{Phase, SessionState};
use ui::UserAction;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let source = constants::get_scenarios_source();
    let repo = match ScenarioRepository::load(&source) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Scenario load failed: {}", e);
            ui::show_load_failure(&source, &e);
            ScenarioRepository::empty()
        }
    };

    let title = constants::START_TITLES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(constants::APP_NAME);

    let mut session = SessionState::new();
    run(&repo, &mut session, title);

    log::info!("Exiting");
}

/// Controller loop: one user action per iteration, dispatched by phase.
fn run(repo: &ScenarioRepository, session: &mut SessionState, title: &str) {
    loop {
        match session.phase() {
            Phase::Idle => {
                ui::show_start_screen(title, repo.len());
                match ui::read_action("[s]tart / [q]uit:") {
                    UserAction::Start => {
                        if let Err(e) = session.start(repo.pool()) {
                            println!("{}", e);
                        }
                    }
                    UserAction::Quit => return,
                    _ => {}
                }
            }

            Phase::InRound => {
                let view = match session.current_scenario() {
                    Ok(scenario) => presenter::describe_scenario(scenario),
                    Err(e) => {
                        log::error!("Render failed: {}", e);
                        return;
                    }
                };
                ui::render_scenario(
                    session.round_number(),
                    session.total_rounds(),
                    session.score(),
                    &view,
                );

                let guess = match ui::read_action("[p]hish / [l]egit / [q]uit:") {
                    UserAction::GuessPhish => true,
                    UserAction::GuessSafe => false,
                    UserAction::Quit => return,
                    _ => continue,
                };

                match session.submit(guess) {
                    Ok(verdict) => {
                        let feedback = presenter::describe_feedback(verdict.correct, &verdict.reasons);
                        ui::render_feedback(&feedback);
                    }
                    Err(e) => log::error!("Submit rejected: {}", e),
                }
            }

            Phase::AwaitingNext => {
                match ui::read_action("[n]ext / [q]uit:") {
                    UserAction::Next => {
                        if let Err(e) = session.advance() {
                            log::error!("Advance rejected: {}", e);
                        }
                    }
                    UserAction::Quit => return,
                    _ => {}
                }
            }

            Phase::Finished => {
                match session.results() {
                    Ok(results) => ui::render_results(&presenter::describe_results(&results)),
                    Err(e) => log::error!("Results unavailable: {}", e),
                }

                match ui::read_action("[r]eplay / [q]uit:") {
                    UserAction::Replay => session.reset(),
                    UserAction::Quit => return,
                    _ => {}
                }
            }
        }
    }
}
