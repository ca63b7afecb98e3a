//! Frame formatting for client display.

use tsudoi_server::infrastructure::dto::websocket::{
    ChatFocusDto, ChatFrameDto, FrameDto, LoginFocusDto, LoginFrameDto, MessageDto,
};
use tsudoi_shared::time::format_clock_time;

const RULE: &str = "============================================================";

/// Lines taken by everything except the message history in a chat frame
const CHAT_CHROME_LINES: usize = 7;

/// Frame formatter for client display
pub struct FrameFormatter;

impl FrameFormatter {
    /// Render a frame as the block of text printed after each event
    pub fn format_frame(frame: &FrameDto) -> String {
        match frame {
            FrameDto::Login(login) => Self::format_login(login),
            FrameDto::Chat(chat) => Self::format_chat(chat),
            FrameDto::Closed { reason } => format!("\nConnection closed: {}\n", reason),
        }
    }

    /// Format the login form
    pub fn format_login(frame: &LoginFrameDto) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", RULE));
        output.push_str(&format!("Welcome, {}! Choose a room.\n", frame.user_name));
        output.push_str(&format!(
            "{} Room ID: [{}]\n",
            marker(frame.focus == LoginFocusDto::RoomId),
            frame.room_id_input
        ));
        output.push_str(&format!(
            "  {}  {}\n",
            button("Join", frame.focus == LoginFocusDto::Join),
            button("Quit", frame.focus == LoginFocusDto::Quit)
        ));
        if let Some(error) = &frame.error {
            output.push_str(&format!("! {}\n", error));
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the chat screen.
    ///
    /// Shows as many of the newest messages as fit in the reported terminal
    /// height, shifted back by the scroll offset.
    pub fn format_chat(frame: &ChatFrameDto) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", RULE));
        output.push_str(&format!(
            "#{} | {} online: {}\n",
            frame.room_id,
            frame.active_users.len(),
            frame.active_users.join(", ")
        ));
        output.push_str(&format!("{}\n", "-".repeat(RULE.len())));

        let visible = visible_messages(
            &frame.messages,
            frame.scroll_offset,
            usize::from(frame.terminal.height).saturating_sub(CHAT_CHROME_LINES),
        );
        if visible.is_empty() {
            output.push_str("(no messages yet)\n");
        }
        for message in visible {
            output.push_str(&Self::format_message(message, &frame.user_name));
        }

        output.push_str(&format!("{}\n", "-".repeat(RULE.len())));
        output.push_str(&format!(
            "{} > {}\n",
            marker(frame.focus == ChatFocusDto::MessageInput),
            frame.compose
        ));
        output.push_str(&format!(
            "  {}  {}{}\n",
            button("Send", frame.focus == ChatFocusDto::Send),
            button("Leave", frame.focus == ChatFocusDto::Leave),
            if frame.focus == ChatFocusDto::Unfocused {
                "  (scrolling history)"
            } else {
                ""
            }
        ));
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format one history line, marking the user's own messages
    pub fn format_message(message: &MessageDto, current_user: &str) -> String {
        let me_suffix = if message.author == current_user {
            " (me)"
        } else {
            ""
        };
        format!(
            "[{}] {}{}: {}\n",
            format_clock_time(message.timestamp),
            message.author,
            me_suffix,
            message.text
        )
    }
}

fn marker(focused: bool) -> &'static str {
    if focused { ">" } else { " " }
}

fn button(label: &str, selected: bool) -> String {
    if selected {
        format!("[ {} ]", label)
    } else {
        format!("  {}  ", label)
    }
}

fn visible_messages(messages: &[MessageDto], scroll_offset: usize, rows: usize) -> &[MessageDto] {
    let rows = rows.max(1);
    let end = messages.len().saturating_sub(scroll_offset);
    let start = end.saturating_sub(rows);
    &messages[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsudoi_server::infrastructure::dto::websocket::TerminalDto;

    fn message(author: &str, text: &str, timestamp: i64) -> MessageDto {
        MessageDto {
            author: author.to_string(),
            text: text.to_string(),
            timestamp,
        }
    }

    fn chat_frame(messages: Vec<MessageDto>, scroll_offset: usize, height: u16) -> ChatFrameDto {
        ChatFrameDto {
            user_name: "alice".to_string(),
            room_id: "public".to_string(),
            messages,
            active_users: vec!["alice".to_string(), "bob".to_string()],
            compose: "draft".to_string(),
            focus: ChatFocusDto::MessageInput,
            scroll_offset,
            terminal: TerminalDto { width: 80, height },
        }
    }

    #[test]
    fn test_format_login_with_error() {
        // テスト項目: ログイン画面にユーザー名・入力中のルーム ID・エラーが表示される
        // given (前提条件):
        let frame = LoginFrameDto {
            user_name: "alice".to_string(),
            room_id_input: "ghost".to_string(),
            focus: LoginFocusDto::RoomId,
            error: Some("room not found".to_string()),
            terminal: TerminalDto {
                width: 80,
                height: 24,
            },
        };

        // when (操作):
        let result = FrameFormatter::format_login(&frame);

        // then (期待する結果):
        assert!(result.contains("Welcome, alice!"));
        assert!(result.contains("> Room ID: [ghost]"));
        assert!(result.contains("! room not found"));
        assert!(result.contains("  Join  "));
    }

    #[test]
    fn test_format_login_selected_button() {
        // テスト項目: ボタンにフォーカスがあるとき選択中のボタンが強調される
        // given (前提条件):
        let frame = LoginFrameDto {
            user_name: "alice".to_string(),
            room_id_input: String::new(),
            focus: LoginFocusDto::Quit,
            error: None,
            terminal: TerminalDto {
                width: 80,
                height: 24,
            },
        };

        // when (操作):
        let result = FrameFormatter::format_login(&frame);

        // then (期待する結果):
        assert!(result.contains("[ Quit ]"));
        assert!(!result.contains("[ Join ]"));
        assert!(!result.contains("\n! "));
    }

    #[test]
    fn test_format_chat_shows_roster_and_messages() {
        // テスト項目: チャット画面にルーム名・参加者・メッセージ・入力欄が表示される
        // given (前提条件): 1970-01-01 01:02 UTC
        let frame = chat_frame(vec![message("bob", "hi", 3_720_000)], 0, 24);

        // when (操作):
        let result = FrameFormatter::format_chat(&frame);

        // then (期待する結果):
        assert!(result.contains("#public | 2 online: alice, bob"));
        assert!(result.contains("[01:02 UTC] bob: hi"));
        assert!(result.contains("> > draft"));
    }

    #[test]
    fn test_format_chat_empty_history() {
        // テスト項目: メッセージがない場合はその旨が表示される
        // given (前提条件):
        let frame = chat_frame(Vec::new(), 0, 24);

        // when (操作):
        let result = FrameFormatter::format_chat(&frame);

        // then (期待する結果):
        assert!(result.contains("(no messages yet)"));
    }

    #[test]
    fn test_format_chat_respects_height_and_scroll() {
        // テスト項目: 端末の高さに収まる件数だけ、スクロール位置に応じて表示される
        // given (前提条件): 高さ 10 → 履歴は 3 行
        let messages: Vec<MessageDto> = (0..6)
            .map(|i| message("bob", &format!("m{}", i), 0))
            .collect();
        let latest = chat_frame(messages.clone(), 0, 10);
        let scrolled = chat_frame(messages, 2, 10);

        // when (操作):
        let latest = FrameFormatter::format_chat(&latest);
        let scrolled = FrameFormatter::format_chat(&scrolled);

        // then (期待する結果):
        assert!(!latest.contains("m2"));
        assert!(latest.contains("m3") && latest.contains("m5"));
        assert!(scrolled.contains("m1") && scrolled.contains("m3"));
        assert!(!scrolled.contains("m4"));
    }

    #[test]
    fn test_format_own_message() {
        // テスト項目: 自分のメッセージには (me) が付く
        // given (前提条件):
        let own = message("alice", "yo", 0);

        // when (操作):
        let result = FrameFormatter::format_message(&own, "alice");

        // then (期待する結果):
        assert_eq!(result, "[00:00 UTC] alice (me): yo\n");
    }

    #[test]
    fn test_format_closed_frame() {
        // テスト項目: 切断フレームには理由が表示される
        // given / when:
        let result = FrameFormatter::format_frame(&FrameDto::Closed {
            reason: "bye".to_string(),
        });

        // then (期待する結果):
        assert_eq!(result, "\nConnection closed: bye\n");
    }
}
