use phake_core::{Mode, Msg};

pub const HELP: &str = "\
commands:
  <link>                 analyze a link in the current mode (same as `analyze <link>`)
  analyze <link>         set the input and submit
  submit                 submit the current input again
  mode educational|prank select a mode
  toggle                 flip between modes
  close                  close the result or error view (also: esc, dismiss)
  retry                  close the error view
  help                   show this text
  quit                   leave";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Vec::new()),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "analyze" | "generate" | "a" => submit(rest),
        "submit" => Command::Dispatch(vec![Msg::SubmitClicked]),
        "toggle" => Command::Dispatch(vec![Msg::ModeToggled]),
        "close" | "esc" | "dismiss" => Command::Dispatch(vec![Msg::Dismissed]),
        "retry" => Command::Dispatch(vec![Msg::RetryClicked]),
        "mode" => match parse_mode(rest) {
            Some(mode) => Command::Dispatch(vec![Msg::ModeSelected(mode)]),
            None => Command::Help,
        },
        // Anything else is a link, like pressing Enter in the input box.
        _ => submit(line),
    }
}

fn submit(link: &str) -> Command {
    Command::Dispatch(vec![
        Msg::InputChanged(link.to_string()),
        Msg::SubmitClicked,
    ])
}

fn parse_mode(value: &str) -> Option<Mode> {
    match value.to_ascii_lowercase().as_str() {
        "educational" | "edu" => Some(Mode::Educational),
        "prank" => Some(Mode::Prank),
        _ => None,
    }
}
