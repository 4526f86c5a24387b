//! Line-oriented terminal front end.
//!
//! ```text
//! > set customer_id 42
//! > select status
//! > press Create
//! ```

use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::actions::FormAction;
use crate::controller::FormSyncClient;
use crate::domain::{OrderQueryKind, OrderStatus};
use crate::error::ConsoleError;
use crate::form::{Field, FormState, ResultsTable};

pub const USAGE: &str = "\
commands:
  set <field> <value>   type into a field (value may be empty)
  select <option>       choose the order search option: customer_id | status | product_id | none
  press <button>        run an action and wait for it, e.g. `press Create Item`
  spawn <button>        run an action in the background
  show                  print the form
  help                  print this text
  quit                  leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Field, String),
    Select(Option<OrderQueryKind>),
    Press(FormAction),
    Spawn(FormAction),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ConsoleError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let command = match verb {
        "set" => {
            let (name, value) = split_word(rest.trim_start());
            if name.is_empty() {
                return Err(ConsoleError::MissingArgument("set"));
            }
            let field = Field::from_name(name).ok_or_else(|| ConsoleError::UnknownField(name.to_string()))?;
            if field.is_read_only() {
                return Err(ConsoleError::ReadOnlyField(name.to_string()));
            }
            if field == Field::QueryOption && !value.is_empty() && OrderQueryKind::from_param(value).is_none() {
                return Err(ConsoleError::UnknownQueryOption(value.to_string()));
            }
            Command::Set(field, value.to_string())
        }
        "select" => match rest.trim() {
            "" => return Err(ConsoleError::MissingArgument("select")),
            "none" => Command::Select(None),
            option => Command::Select(Some(
                OrderQueryKind::from_param(option)
                    .ok_or_else(|| ConsoleError::UnknownQueryOption(option.to_string()))?,
            )),
        },
        "press" => Command::Press(parse_button("press", rest)?),
        "spawn" => Command::Spawn(parse_button("spawn", rest)?),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Splits off the first word; the remainder loses exactly one separating space.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (text, ""),
    }
}

fn parse_button(verb: &'static str, rest: &str) -> Result<FormAction, ConsoleError> {
    let label = rest.trim();
    if label.is_empty() {
        return Err(ConsoleError::MissingArgument(verb));
    }
    FormAction::from_button(label).ok_or_else(|| ConsoleError::UnknownButton(label.to_string()))
}

/// Renders both sub-forms and any result tables.
pub fn render(state: &FormState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Order ==");
    for field in [Field::OrderId, Field::CustomerId, Field::TrackingId, Field::Status, Field::CreatedTime] {
        let _ = writeln!(out, "  {:<13} {}", field.name(), state.get(field));
    }
    let _ = writeln!(out, "  {:<13} {}", "message", state.order.flash_message);
    render_table(&mut out, "Order results", &state.order_results);

    let _ = writeln!(out, "== Item ==");
    for field in [Field::ItemId, Field::ItemOrderId, Field::ProductId, Field::Quantity, Field::Price] {
        let _ = writeln!(out, "  {:<13} {}", field.name(), state.get(field));
    }
    let _ = writeln!(out, "  {:<13} {}", "message", state.item.flash_message_item);
    render_table(&mut out, "Item results", &state.item_results);

    out
}

fn render_table(out: &mut String, title: &str, table: &ResultsTable) {
    if table.is_rendered() {
        let _ = writeln!(out, "-- {title} --");
        let _ = write!(out, "{table}");
    }
}

async fn execute(controller: &FormSyncClient, command: Command) -> String {
    match command {
        Command::Set(field, value) => {
            controller.edit(|state| state.set(field, value)).await;
            String::new()
        }
        Command::Select(option) => {
            controller.edit(|state| state.order_search.option = option).await;
            String::new()
        }
        Command::Press(action) => render(&controller.dispatch(action).await),
        Command::Spawn(action) => {
            drop(controller.spawn(action));
            format!("{} running in background\n", action.button_id())
        }
        Command::Show => render(&controller.snapshot().await),
        Command::Help => {
            let statuses: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
            format!("{USAGE}\norder statuses: {}\n", statuses.join(", "))
        }
        Command::Quit => String::new(),
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(controller: FormSyncClient) -> anyhow::Result<()> {
    run_with(&controller, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Drives the console over any line source and sink.
///
/// A bad line, including one that is not UTF-8, is reported and skipped.
/// Only end of input, `quit` or an I/O error ends the loop.
pub async fn run_with<R, W>(controller: &FormSyncClient, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.split(b'\n');

    writer.write_all(USAGE.as_bytes()).await?;
    writer.flush().await?;

    while let Some(raw) = lines.next_segment().await? {
        let output = match decode_line(raw).and_then(|line| parse_command(&line)) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "Console command");
                execute(controller, command).await
            }
            Err(e) => {
                warn!(error = %e, "Rejected console input");
                format!("error: {e}\n{USAGE}")
            }
        };
        writer.write_all(output.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}

fn decode_line(mut raw: Vec<u8>) -> Result<String, ConsoleError> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8(raw).map_err(|_| ConsoleError::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;
    use crate::form::{apply, Outcome};
    use crate::mock_framework::create_mock_controller;

    #[test]
    fn set_keeps_the_raw_value() {
        assert_eq!(
            parse_command("set customer_id 42").unwrap(),
            Some(Command::Set(Field::CustomerId, "42".into()))
        );
        assert_eq!(
            parse_command("set tracking_id  T 1").unwrap(),
            Some(Command::Set(Field::TrackingId, " T 1".into()))
        );
        assert_eq!(
            parse_command("set price").unwrap(),
            Some(Command::Set(Field::Price, String::new()))
        );
    }

    #[test]
    fn flash_fields_cannot_be_typed_into() {
        assert_eq!(
            parse_command("set flash_message hi"),
            Err(ConsoleError::ReadOnlyField("flash_message".into()))
        );
    }

    #[test]
    fn press_accepts_labels() {
        assert_eq!(
            parse_command("press Retrieve Item").unwrap(),
            Some(Command::Press(FormAction::RetrieveItem))
        );
        assert_eq!(
            parse_command("spawn create-btn").unwrap(),
            Some(Command::Spawn(FormAction::CreateOrder))
        );
    }

    #[test]
    fn select_parses_query_options() {
        assert_eq!(
            parse_command("select status").unwrap(),
            Some(Command::Select(Some(OrderQueryKind::Status)))
        );
        assert_eq!(parse_command("select none").unwrap(), Some(Command::Select(None)));
        assert_eq!(
            parse_command("select colour"),
            Err(ConsoleError::UnknownQueryOption("colour".into()))
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("fly"), Err(ConsoleError::UnknownCommand("fly".into())));
        assert_eq!(parse_command("press"), Err(ConsoleError::MissingArgument("press")));
        assert_eq!(parse_command("press Launch"), Err(ConsoleError::UnknownButton("Launch".into())));
        assert_eq!(parse_command("set nope 1"), Err(ConsoleError::UnknownField("nope".into())));
    }

    #[test]
    fn render_shows_fields_and_tables() {
        let record = ItemRecord {
            id: "11".into(),
            order_id: "7".into(),
            product_id: "301".into(),
            quantity: "2".into(),
            price: "12.5".into(),
        };
        let state = apply(FormState::default(), Outcome::ItemsListed(Ok(vec![record])));
        let text = render(&state);

        assert!(text.contains("  status        PLACED"));
        assert!(text.contains("  price         12.5"));
        assert!(text.contains("-- Item results --"));
        assert!(!text.contains("-- Order results --"));
    }

    #[test]
    fn set_query_option_goes_through_the_field() {
        assert_eq!(
            parse_command("set query_option product_id").unwrap(),
            Some(Command::Set(Field::QueryOption, "product_id".into()))
        );
        assert_eq!(
            parse_command("set query_option colour"),
            Err(ConsoleError::UnknownQueryOption("colour".into()))
        );
    }

    #[tokio::test]
    async fn test_loop_survives_bad_lines_and_stops_at_quit() {
        let (controller, mut receiver) = create_mock_controller(4);
        let input: &[u8] =
            b"fly\nset customer_id \xff\xfe\r\nset customer_id 42\r\nset query_option status\nshow\npress Clear\nquit\nshow\n";
        let mut output = Vec::new();

        run_with(&controller, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(USAGE));
        assert!(text.contains("error: Unknown command: fly"));
        assert!(text.contains("error: Input is not valid UTF-8"));
        assert_eq!(text.matches(USAGE).count(), 3);
        assert!(text.contains("  customer_id   42\n"));
        // `show` and `press Clear` each print the form; the `show` after `quit` never runs.
        assert_eq!(text.matches("== Order ==").count(), 2);

        let state = controller.snapshot().await;
        assert_eq!(state.get(Field::CustomerId), "");
        assert_eq!(state.order_search.option, Some(OrderQueryKind::Status));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_loop_ends_at_end_of_input() {
        let (controller, _receiver) = create_mock_controller(4);
        let input: &[u8] = b"set tracking_id T-1";
        let mut output = Vec::new();

        run_with(&controller, input, &mut output).await.unwrap();

        assert_eq!(controller.snapshot().await.get(Field::TrackingId), "T-1");
        assert_eq!(String::from_utf8(output).unwrap(), USAGE);
    }
}
