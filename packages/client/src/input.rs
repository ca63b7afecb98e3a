//! Typed line → input events.
//!
//! Plain text is sent as one `char` event per character followed by `enter`.
//! A leading `/` starts a command naming a single key; `//` escapes a literal
//! slash.

use tsudoi_server::infrastructure::dto::websocket::{InputEventDto, KeyDto};

use crate::error::InputParseError;

pub const HELP: &str = "\
Commands:
  <text>          type text, then press Enter
  //<text>        type text starting with '/'
  (empty line)    press Enter
  /tab /back      move focus forward / backward
  /left /right    switch between buttons
  /up /down       scroll history (after /esc)
  /pgup /pgdn     scroll history by a page
  /esc            leave the input field
  /enter /bs      press Enter / Backspace
  /resize W H     report a new terminal size
  /quit           disconnect (Ctrl+C)
  /help           show this help";

/// What a typed line asks the client to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Events(Vec<InputEventDto>),
    Help,
}

pub fn parse_line(line: &str) -> Result<ParsedLine, InputParseError> {
    if let Some(text) = line.strip_prefix("//") {
        return Ok(ParsedLine::Events(type_text(&format!("/{}", text))));
    }
    let Some(command) = line.strip_prefix('/') else {
        return Ok(ParsedLine::Events(type_text(line)));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let key = match name {
        "help" => return Ok(ParsedLine::Help),
        "resize" => {
            let width = parts.next().and_then(|w| w.parse().ok());
            let height = parts.next().and_then(|h| h.parse().ok());
            return match (width, height, parts.next()) {
                (Some(width), Some(height), None) => Ok(ParsedLine::Events(vec![
                    InputEventDto::Resize { width, height },
                ])),
                _ => Err(InputParseError::InvalidResize),
            };
        }
        "tab" => KeyDto::Tab,
        "back" => KeyDto::BackTab,
        "enter" => KeyDto::Enter,
        "esc" => KeyDto::Esc,
        "up" => KeyDto::Up,
        "down" => KeyDto::Down,
        "left" => KeyDto::Left,
        "right" => KeyDto::Right,
        "pgup" => KeyDto::PageUp,
        "pgdn" => KeyDto::PageDown,
        "bs" => KeyDto::Backspace,
        "quit" => KeyDto::CtrlC,
        other => return Err(InputParseError::UnknownCommand(other.to_string())),
    };
    Ok(ParsedLine::Events(vec![press(key)]))
}

fn press(key: KeyDto) -> InputEventDto {
    InputEventDto::Key { key, ch: None }
}

fn type_text(text: &str) -> Vec<InputEventDto> {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| InputEventDto::Key {
            key: KeyDto::Char,
            ch: Some(ch),
        })
        .chain(std::iter::once(press(KeyDto::Enter)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_event(ch: char) -> InputEventDto {
        InputEventDto::Key {
            key: KeyDto::Char,
            ch: Some(ch),
        }
    }

    #[test]
    fn test_plain_text_is_typed_then_confirmed() {
        // テスト項目: 通常のテキストは 1 文字ずつの char イベントと Enter になる
        // given (前提条件):
        let line = "hi";

        // when (操作):
        let parsed = parse_line(line).unwrap();

        // then (期待する結果):
        assert_eq!(
            parsed,
            ParsedLine::Events(vec![char_event('h'), char_event('i'), press(KeyDto::Enter)])
        );
    }

    #[test]
    fn test_empty_line_presses_enter() {
        // テスト項目: 空行は Enter のみを送る
        // given / when:
        let parsed = parse_line("").unwrap();

        // then (期待する結果):
        assert_eq!(parsed, ParsedLine::Events(vec![press(KeyDto::Enter)]));
    }

    #[test]
    fn test_key_commands() {
        // テスト項目: スラッシュコマンドが対応するキーイベントになる
        // given (前提条件):
        let cases = [
            ("/tab", KeyDto::Tab),
            ("/back", KeyDto::BackTab),
            ("/esc", KeyDto::Esc),
            ("/pgdn", KeyDto::PageDown),
            ("/bs", KeyDto::Backspace),
            ("/quit", KeyDto::CtrlC),
        ];

        for (line, key) in cases {
            // when (操作):
            let parsed = parse_line(line).unwrap();

            // then (期待する結果):
            assert_eq!(parsed, ParsedLine::Events(vec![press(key)]), "{line}");
        }
    }

    #[test]
    fn test_double_slash_types_literal_slash() {
        // テスト項目: "//" で始まる行は先頭の "/" を含むテキストとして送られる
        // given / when:
        let parsed = parse_line("//me").unwrap();

        // then (期待する結果):
        assert_eq!(
            parsed,
            ParsedLine::Events(vec![
                char_event('/'),
                char_event('m'),
                char_event('e'),
                press(KeyDto::Enter)
            ])
        );
    }

    #[test]
    fn test_resize_command() {
        // テスト項目: /resize は幅と高さを持つリサイズイベントになり、不正な引数はエラーになる
        // given / when / then:
        assert_eq!(
            parse_line("/resize 120 40").unwrap(),
            ParsedLine::Events(vec![InputEventDto::Resize {
                width: 120,
                height: 40
            }])
        );
        assert_eq!(parse_line("/resize 120"), Err(InputParseError::InvalidResize));
        assert_eq!(parse_line("/resize a b"), Err(InputParseError::InvalidResize));
    }

    #[test]
    fn test_unknown_command() {
        // テスト項目: 未知のコマンドはエラーになる
        // given / when:
        let result = parse_line("/dance");

        // then (期待する結果):
        assert_eq!(result, Err(InputParseError::UnknownCommand("dance".to_string())));
        assert_eq!(parse_line("/help"), Ok(ParsedLine::Help));
    }
}
