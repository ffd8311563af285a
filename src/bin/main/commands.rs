use anyhow::{Context, Result, bail};
use panelview_core::input::RawInput;

/// One stdin line of the driver protocol.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Command {
    Input(RawInput),
    List,
    Show,
    Quit,
}

pub(super) fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match (verb, args.as_slice()) {
        ("next", []) => Command::Input(RawInput::NextButton),
        ("prev", []) => Command::Input(RawInput::PrevButton),
        ("episodes", []) => Command::Input(RawInput::ShowEpisodes),
        ("status", []) => Command::Input(RawInput::StatusActivated),
        ("key", [name]) => Command::Input(RawInput::Key((*name).to_owned())),
        ("hash", [raw]) => Command::Input(RawInput::FragmentChanged((*raw).to_owned())),
        ("hash", []) => Command::Input(RawInput::FragmentChanged(String::new())),
        ("click", [x, width]) => Command::Input(RawInput::Click {
            x: number(x)?,
            width: number(width)?,
        }),
        ("touchstart", [x, y]) => Command::Input(RawInput::TouchStart {
            x: number(x)?,
            y: number(y)?,
        }),
        ("touchend", [x, y]) => Command::Input(RawInput::TouchEnd {
            x: number(x)?,
            y: number(y)?,
        }),
        ("list", []) => Command::List,
        ("show", []) => Command::Show,
        ("quit" | "exit", []) => Command::Quit,
        _ => bail!("unrecognised command {line:?}"),
    };

    Ok(Some(command))
}

fn number(raw: &str) -> Result<f32> {
    raw.parse::<f32>()
        .with_context(|| format!("expected a number, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(
            parse_line("next").unwrap(),
            Some(Command::Input(RawInput::NextButton))
        );
        assert_eq!(
            parse_line("  key ArrowLeft ").unwrap(),
            Some(Command::Input(RawInput::Key("ArrowLeft".into())))
        );
        assert_eq!(
            parse_line("hash #ep2:3").unwrap(),
            Some(Command::Input(RawInput::FragmentChanged("#ep2:3".into())))
        );
        assert_eq!(
            parse_line("click 10 400").unwrap(),
            Some(Command::Input(RawInput::Click {
                x: 10.0,
                width: 400.0
            }))
        );
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(parse_line("jump").is_err());
        assert!(parse_line("touchend 1").is_err());
        assert!(parse_line("click left 400").is_err());
    }
}
