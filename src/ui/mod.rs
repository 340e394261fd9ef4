//! Terminal Surface
//!
//! Thin glue between the logic engines and stdin/stdout: renders presenter
//! views and reads the user's actions. No game state lives here.

use std::io::{self, BufRead, Write};

use crate::logic::presenter::{FeedbackView, ResultsView, ScenarioView};
use crate::logic::scenario::LoadError;

/// The five user actions plus quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Start,
    GuessPhish,
    GuessSafe,
    Next,
    Replay,
    Quit,
}

/// Read one action from stdin. Unrecognized input re-prompts; EOF quits.
pub fn read_action(prompt: &str) -> UserAction {
    let stdin = io::stdin();
    loop {
        print!("{} ", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return UserAction::Quit,
            Ok(_) => {}
        }

        match line.trim().to_lowercase().as_str() {
            "s" | "start" => return UserAction::Start,
            "p" | "phish" => return UserAction::GuessPhish,
            "l" | "safe" | "legit" => return UserAction::GuessSafe,
            "n" | "next" | "" => return UserAction::Next,
            "r" | "replay" => return UserAction::Replay,
            "q" | "quit" => return UserAction::Quit,
            other => println!("Unrecognized input '{}'", other),
        }
    }
}

pub fn show_start_screen(title: &str, pool_len: usize) {
    println!();
    println!("=== {} ===", title);
    if pool_len == 0 {
        println!("No scenarios available. The quiz cannot start.");
    } else {
        println!("{} scenarios loaded.", pool_len);
    }
}

pub fn show_load_failure(source: &str, err: &LoadError) {
    println!();
    println!("Could not load scenarios from '{}': {}", source, err);
    println!("Continuing with an empty pool.");
}

pub fn render_scenario(round: usize, total: usize, score: u32, view: &ScenarioView) {
    println!();
    println!("--- Scenario {}/{} | score {} ---", round, total, score);

    match view {
        ScenarioView::Email {
            from_display,
            from_email,
            subject,
            body,
            links,
        } => {
            println!("From:    {} <{}>", from_display, from_email);
            if let Some(subject) = subject {
                println!("Subject: {}", subject);
            }
            println!("Message: {}", body);
            for link in links {
                println!("Link:    {} -> {}", link.text, link.href);
            }
        }
        ScenarioView::Sms { from_display, body } => {
            println!("From:    {}", from_display);
            println!("Message: {}", body);
        }
        ScenarioView::Generic { dump } => {
            println!("Details:");
            println!("{}", dump);
        }
    }
}

pub fn render_feedback(view: &FeedbackView) {
    println!();
    println!("{}", view.headline);
    for reason in &view.reasons {
        println!("  - {}", reason);
    }
}

pub fn render_results(view: &ResultsView) {
    println!();
    println!("=== Results ===");
    println!("Final score: {}/{}", view.score, view.total);
    if let Some(badge) = &view.badge {
        println!("Badge: {}", badge.label());
    }
    if let Some(secs) = view.duration_secs {
        println!("Completed in {}s", secs);
    }

    println!("Top blind spots:");
    for spot in &view.blind_spots {
        match spot.misses {
            Some(count) => println!("  - {} (missed {} time(s))", spot.label, count),
            None => println!("  - {}", spot.label),
        }
    }

    println!("Share: {}", view.share_url);
}
