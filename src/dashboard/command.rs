//! Text commands typed into the terminal dashboard.

use std::str::FromStr;

use crate::navigator::{InvalidLayer, Layer};
use crate::render::ComprehensiveTab;

/// Errors raised while parsing or applying a command. None of these reach
/// the navigator; the session carries on after reporting them.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs an argument: {expected}")]
    MissingArgument { command: &'static str, expected: &'static str },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("layer must be a number: `{0}`")]
    LayerNotANumber(String),

    #[error(transparent)]
    InvalidLayer(#[from] InvalidLayer),

    #[error("unknown tab `{0}` (analysis, research, technical, correlations, trends)")]
    UnknownTab(String),

    #[error("no insight with id `{0}`")]
    UnknownInsight(String),

    #[error("no immediate action with id `{0}`")]
    UnknownAction(String),

    #[error("no insight category `{0}`")]
    UnknownCategory(String),

    #[error("`{command}` is only available on layer {layer}")]
    WrongLayer { command: &'static str, layer: Layer },

    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(Layer),
    Back,
    Show,
    Action(String),
    Expand(String),
    Filter(String),
    Tab(ComprehensiveTab),
    Download,
    Book,
    Stats,
    Export,
    Help,
    Quit,
}

fn required<'a>(arg: Option<&'a str>, command: &'static str, expected: &'static str) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

fn parse_layer(raw: &str) -> Result<Layer, CommandError> {
    let number: u64 = raw
        .parse()
        .map_err(|_| CommandError::LayerNotANumber(raw.to_owned()))?;
    let small = u8::try_from(number).map_err(|_| InvalidLayer(number))?;
    Ok(Layer::try_from(small)?)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim_start())),
            None => (line, None),
        };
        let name = name.to_ascii_lowercase();
        // Commands that take no argument reject anything after the name.
        let bare = |command: Self| match arg {
            None => Ok(command),
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_owned())),
        };

        match name.as_str() {
            "1" | "snapshot" => bare(Self::Go(Layer::Snapshot)),
            "2" | "insights" => bare(Self::Go(Layer::Insights)),
            "3" | "comprehensive" => bare(Self::Go(Layer::Comprehensive)),
            "goto" | "go" => parse_layer(required(arg, "goto", "a layer 1-3")?).map(Self::Go),
            "back" => bare(Self::Back),
            "show" | "view" => bare(Self::Show),
            "action" => Ok(Self::Action(required(arg, "action", "an action id")?.to_owned())),
            "expand" => Ok(Self::Expand(required(arg, "expand", "an insight id")?.to_owned())),
            "filter" => Ok(Self::Filter(required(arg, "filter", "a category or `all`")?.to_owned())),
            "tab" => {
                let raw = required(arg, "tab", "a tab name")?;
                ComprehensiveTab::parse(raw)
                    .map(Self::Tab)
                    .ok_or_else(|| CommandError::UnknownTab(raw.to_owned()))
            }
            "download" | "pdf" => bare(Self::Download),
            "book" => bare(Self::Book),
            "stats" => bare(Self::Stats),
            "export" => bare(Self::Export),
            "help" | "?" => bare(Self::Help),
            "quit" | "exit" | "q" => bare(Self::Quit),
            _ => Err(CommandError::Unknown(line.to_owned())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  snapshot | insights | comprehensive   switch layer (or 1, 2, 3, goto <n>)
  back                                  return to the health snapshot
  show                                  redraw the current layer
  action <id>                           choose an immediate action (layer 1)
  expand <id>                           expand or collapse an insight (layer 2)
  filter <category>                     filter insights by category (layer 2)
  tab <name>                            switch comprehensive tab (layer 3)
  download | book                       PDF report / consultation (layer 3)
  stats                                 journey, session time, achievements
  export                                session state as JSON
  quit";
