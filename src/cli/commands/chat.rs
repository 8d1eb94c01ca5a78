use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::responder;
use crate::core::state::{Action, AppState, Outcome};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::chat::{ChatMessage, Role};
use crate::ui::messages::{chat_line, error, info, query_block, rule, success, warning};
use crate::utils::date::clock;
use crate::utils::formatting::strip_markup;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const HELP: &str = "Commands: /fresh  /history  /watch ID  /export FILE [--force]  /help  /quit\n\
                    (FILE must be an absolute path, e.g. /tmp/chat.json)";

/// Handle the `chat` command: one-shot when a message is given, REPL otherwise.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Chat { message, json } = &cli.command {
        let delay = if cli.no_delay {
            Duration::ZERO
        } else {
            cfg.response_delay()
        };

        if message.is_empty() {
            let stdin = io::stdin();
            let mut state = AppState::from_names(&cfg.watchlist);
            return run_session(&mut state, &mut stdin.lock(), cfg, delay);
        }

        let text = message.join(" ");

        if *json {
            let mut reply = responder::respond(&text);
            reply.narrative = strip_markup(&reply.narrative);
            println!("{}", serde_json::to_string_pretty(&reply)?);
            return Ok(());
        }

        let mut state = AppState::from_names(&cfg.watchlist);
        match state.apply(Action::Send(text))? {
            Outcome::Reply(msg) => {
                pause(delay);
                print_message(&msg, cfg);
            }
            _ => warning("Nothing to send: the message is blank."),
        }
    }
    Ok(())
}

/// Interactive loop; ends on `/quit` or end of input.
pub fn run_session<R: BufRead>(
    state: &mut AppState,
    input: &mut R,
    cfg: &Config,
    delay: Duration,
) -> AppResult<()> {
    if let Some(greeting) = state.messages.first() {
        print_message(greeting, cfg);
    }
    info(HELP);

    loop {
        print!("\n> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if let Some(cmd) = line.strip_prefix('/') {
            let mut parts = cmd.split_whitespace();
            match parts.next().unwrap_or("") {
                "quit" | "exit" | "q" => break,
                "help" => info(HELP),
                "fresh" => {
                    state.apply(Action::FreshChat)?;
                    success("Started a fresh chat.");
                    if let Some(greeting) = state.messages.first() {
                        print_message(greeting, cfg);
                    }
                }
                "history" => {
                    for msg in &state.messages {
                        print_message(msg, cfg);
                    }
                }
                "watch" => match parts.next() {
                    Some(id) => match state.apply(Action::ToggleWatch(id.to_string())) {
                        Ok(Outcome::Watch { id, watched }) => {
                            let verb = if watched { "added to" } else { "removed from" };
                            success(format!("Ocean {id} {verb} the watchlist."));
                        }
                        Ok(_) => {}
                        Err(e) => error(e),
                    },
                    None => warning("Usage: /watch ID"),
                },
                "export" => {
                    let args: Vec<&str> = parts.collect();
                    let force = args.contains(&"--force");
                    match args.iter().find(|a| !a.starts_with("--")) {
                        Some(file) => {
                            if let Err(e) =
                                ExportLogic::export_transcript(&state.messages, file, force, input)
                            {
                                error(e);
                            }
                        }
                        None => warning("Usage: /export FILE [--force]"),
                    }
                }
                other => warning(format!("Unknown command '/{other}'. {HELP}")),
            }
            continue;
        }

        if let Outcome::Reply(msg) = state.apply(Action::Send(line.to_string()))? {
            pause(delay);
            print_message(&msg, cfg);
        }
    }

    Ok(())
}

fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    print!("FloatChat is thinking…");
    io::stdout().flush().ok();
    thread::sleep(delay);
    println!();
}

fn print_message(msg: &ChatMessage, cfg: &Config) {
    println!();
    chat_line(
        msg.role == Role::User,
        &clock(msg.timestamp),
        &msg.text,
        cfg.wrap_width,
    );
    if let Some(sql) = &msg.query {
        query_block(sql);
    }
    if msg.role == Role::Assistant && msg.has_query() {
        rule(&cfg.separator_char, 40);
    }
}
