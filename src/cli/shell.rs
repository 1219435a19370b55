use crate::activity::{ActivityType, Emotion};
use crate::app::{AppController, ModuleKind};
use crate::render::{ViewOptions, render_frame};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info, warn};

pub const HELP: &str = "\
Commands:
  login <name>              log in as a student
  go <screen>               home | emotion-data | challenges | zen-room | events
  open <module>             smart-break | zen-room | emotion-map | mission-5 | happy-week | statistics
  close                     close the open module
  feel <emotion>            very-happy | happy | neutral | sad | stressed
  data                      show everyone's emotion check-ins
  do <activity> [details]   record smart-break | zen-room | emotion | mission | happy-week
  points                    collect 10 happy points
  clear                     dismiss notifications
  log                       print the activity log as JSON
  help                      show this list
  quit                      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login(String),
    Go(String),
    Open(ModuleKind),
    Close,
    Feel(Emotion),
    Data,
    Do(ActivityType, Option<String>),
    Points,
    Clear,
    Log,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((trimmed, ""));

        let command = match verb.to_lowercase().as_str() {
            "login" => {
                if rest.is_empty() {
                    bail!("Usage: login <name>");
                }
                ShellCommand::Login(rest.to_string())
            }
            // Unknown screens are accepted here and fall back to home.
            "go" => ShellCommand::Go(rest.to_string()),
            "open" => ShellCommand::Open(rest.parse()?),
            "close" => ShellCommand::Close,
            "feel" => ShellCommand::Feel(rest.parse()?),
            "data" => ShellCommand::Data,
            "do" => {
                let (kind, details) = rest
                    .split_once(char::is_whitespace)
                    .map(|(kind, details)| (kind, details.trim()))
                    .unwrap_or((rest, ""));
                let details = (!details.is_empty()).then(|| details.to_string());
                match kind.parse::<ActivityType>()? {
                    ActivityType::StudentLogin => bail!("Use `login <name>` to log in."),
                    ActivityType::EmotionRecord => {
                        bail!("Use `feel <emotion>` to record an emotion.")
                    }
                    kind => ShellCommand::Do(kind, details),
                }
            }
            "points" => ShellCommand::Points,
            "clear" => ShellCommand::Clear,
            "log" => ShellCommand::Log,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => bail!("Unknown command: {verb}. Type `help` for the list."),
        };

        Ok(command)
    }

    fn allowed_before_login(&self) -> bool {
        matches!(
            self,
            ShellCommand::Login(_) | ShellCommand::Help | ShellCommand::Quit
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Print(String),
    Quit,
}

pub fn execute(controller: &mut AppController, command: ShellCommand) -> Result<Outcome> {
    if !controller.session().is_active() && !command.allowed_before_login() {
        return Ok(Outcome::Print("Please log in first: login <name>".to_string()));
    }

    let outcome = match command {
        ShellCommand::Login(name) => {
            controller.login(&name);
            Outcome::Render
        }
        ShellCommand::Go(screen) => {
            controller.navigate_to(&screen);
            Outcome::Render
        }
        ShellCommand::Open(module) => {
            controller.open_module(module);
            Outcome::Render
        }
        ShellCommand::Close => {
            controller.close_module();
            Outcome::Render
        }
        ShellCommand::Feel(emotion) => {
            controller.record_emotion(emotion);
            Outcome::Render
        }
        ShellCommand::Data => {
            controller.view_emotion_data();
            Outcome::Render
        }
        ShellCommand::Do(kind, details) => {
            controller.record_activity(kind, details);
            Outcome::Render
        }
        ShellCommand::Points => {
            controller.award_happy_points();
            Outcome::Render
        }
        ShellCommand::Clear => {
            controller.dismiss_notifications();
            Outcome::Render
        }
        ShellCommand::Log => {
            let json = serde_json::to_string_pretty(controller.log().records())
                .context("Failed to serialize activity log")?;
            Outcome::Print(json)
        }
        ShellCommand::Help => Outcome::Print(HELP.to_string()),
        ShellCommand::Quit => Outcome::Quit,
    };

    Ok(outcome)
}

pub async fn run_shell(controller: &mut AppController, options: &ViewOptions) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_frame(controller, options);

    loop {
        prompt()?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        };

        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            print_frame(controller, options);
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                warn!(error = %error, "rejected shell input");
                println!("! {error}");
                continue;
            }
        };

        match execute(controller, command)? {
            Outcome::Render => print_frame(controller, options),
            Outcome::Print(text) => println!("{text}"),
            Outcome::Quit => break,
        }
    }

    controller.shutdown();
    println!("Goodbye! Take care of yourself.");
    Ok(())
}

fn print_frame(controller: &AppController, options: &ViewOptions) {
    debug!(screen = %controller.screen(), module = ?controller.module(), "rendering frame");
    println!("{}", render_frame(&controller.view(), options));
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ").context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush stdout")
}
