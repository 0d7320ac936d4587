use crate::console::Console;
use crate::error::CommandError;
use crate::overlay;
use crate::session::Session;
use crate::simulation::Simulation;

/// One parsed console line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Pause,
    Reset,
    Train,
}

impl Verb {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "p" | "pause" => Some(Self::Pause),
            "r" | "reset" => Some(Self::Reset),
            "t" | "train" => Some(Self::Train),
            _ => None,
        }
    }
}

/// Input boundary: echo the line, run it and report any failure as a single
/// line. The session is left untouched by failed commands.
pub fn handle_input(input: &str, session: &mut Session, console: &mut impl Console) {
    console.println("");
    console.println(&format!("$ {input}"));

    if let Err(err) = execute(input, session, console) {
        log::warn!("command {input:?} failed: {err}");
        console.println(&format!("  ^ error: {err}"));
    }
}

/// Parse and run one line.
pub fn execute(
    input: &str,
    session: &mut Session,
    console: &mut impl Console,
) -> Result<(), CommandError> {
    if input.contains(&['[', ']'][..]) {
        return Err(CommandError::IllustrativeBrackets);
    }

    let mut tokens = input.split_whitespace();
    let verb = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match Verb::parse(verb) {
        Some(Verb::Pause) => pause(&args, session),
        Some(Verb::Reset) => reset(&args, session),
        Some(Verb::Train) => train(&args, session, console),
        None => Err(CommandError::UnknownCommand(verb.to_string())),
    }
}

fn pause(args: &[&str], session: &mut Session) -> Result<(), CommandError> {
    if !args.is_empty() {
        return Err(CommandError::UnexpectedParameters);
    }

    let running = session.toggle_pause();
    log::info!("simulation {}", if running { "resumed" } else { "paused" });
    Ok(())
}

fn reset(args: &[&str], session: &mut Session) -> Result<(), CommandError> {
    let config = overlay::build(&Simulation::default_config(), args.iter().copied())?;
    session.reset(config)?;

    log::info!("simulation reset: {:?}", session.simulation().config());
    Ok(())
}

fn train(
    args: &[&str],
    session: &mut Session,
    console: &mut impl Console,
) -> Result<(), CommandError> {
    let generations = match args {
        [] => 1,
        [count] => count.parse::<usize>().map_err(|_| CommandError::InvalidValue {
            name: "generations".into(),
            value: count.to_string(),
            expected: "a non-negative integer",
        })?,
        _ => return Err(CommandError::TooManyArguments(args.len())),
    };

    log::info!("training {generations} generation(s)");
    for i in 0..generations {
        if i > 0 {
            console.println("");
        }
        let stats = session.simulation_mut().train();
        console.println(&stats.to_string());
    }
    log::info!("training done, now at generation {}", session.simulation().generation());

    Ok(())
}
