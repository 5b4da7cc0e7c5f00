use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::str::FromStr;
use tabled::{builder::Builder, settings::Style, Table, Tabled};
use tracing::{debug, warn};

use crate::components::{
    desk::{
        dashboard::VehicleFines,
        desk::Desk,
        format::{format_currency, format_percent},
    },
    error::{DeskError, Result},
    records::{
        aggregate::{self, Summary},
        form::FormSession,
        record::Record,
        store::RecordStore,
    },
};

mod help;
use help::{get_general_help, CommandHelp, COMMAND_HELP};

/// Represents different output format options for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Standard, // Plain text format with human-readable output
    JSON,     // Structured JSON format for programmatic consumption
    Table,    // ASCII table format for aligned columnar display
}

impl FromStr for OutputFormat {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "text" => Ok(OutputFormat::Standard),
            "json" => Ok(OutputFormat::JSON),
            "table" => Ok(OutputFormat::Table),
            _ => Err(DeskError::Config(format!("unknown output format '{}'", s))),
        }
    }
}

/// Represents all shell commands with their parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List {
        kind: String,
    },
    Get {
        kind: String,
        id: String,
    },
    Search {
        kind: String,
        query: String,
    },
    Create {
        kind: String,
        values: Vec<(String, String)>,
    },
    Edit {
        kind: String,
        id: String,
        values: Vec<(String, String)>,
    },
    Delete {
        kind: String,
        id: String,
    },
    Summary {
        kind: String,
    },
    Overview,
    Recent {
        kind: String,
    },
    Top {
        kind: String,
        field: String,
        limit: Option<usize>,
    },
    Breakdown {
        kind: String,
        field: String,
    },
    VehicleFines {
        plate: Option<String>,
    },
    Help {
        command: Option<String>,
    },
}

/// Command types used for output formatting decisions.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
enum CommandBasic {
    List,
    Get,
    Search,
    Create,
    Edit,
    Delete,
    Summary,
    Overview,
    Recent,
    Top,
    Breakdown,
    VehicleFines,
    Help,
}

impl Command {
    fn basic(&self) -> CommandBasic {
        match self {
            Command::List { .. } => CommandBasic::List,
            Command::Get { .. } => CommandBasic::Get,
            Command::Search { .. } => CommandBasic::Search,
            Command::Create { .. } => CommandBasic::Create,
            Command::Edit { .. } => CommandBasic::Edit,
            Command::Delete { .. } => CommandBasic::Delete,
            Command::Summary { .. } => CommandBasic::Summary,
            Command::Overview => CommandBasic::Overview,
            Command::Recent { .. } => CommandBasic::Recent,
            Command::Top { .. } => CommandBasic::Top,
            Command::Breakdown { .. } => CommandBasic::Breakdown,
            Command::VehicleFines { .. } => CommandBasic::VehicleFines,
            Command::Help { .. } => CommandBasic::Help,
        }
    }

    fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Create { .. } | Command::Edit { .. } | Command::Delete { .. }
        )
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// User-facing outcome of a command, shown as a toast by the front-end.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(description: &str) -> Self {
        Notification {
            title: "Success".to_string(),
            description: description.to_string(),
            variant: Variant::Default,
        }
    }

    pub fn error(description: &str) -> Self {
        Notification {
            title: "Error".to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }
}

/// What a successful command produced, before formatting.
struct Outcome {
    message: String,
    data: Option<serde_json::Value>,
    rows: Option<Vec<Vec<String>>>, // Header row first
}

/// Represents the result of a command execution including metadata.
#[derive(Serialize, Debug)]
struct CommandResult {
    executed_command: CommandBasic,
    success: bool,
    message: String,
    notification: Option<Notification>,
    data: Option<serde_json::Value>,
    #[serde(skip)]
    rows: Option<Vec<Vec<String>>>,
    timestamp: String, // ISO 8601 timestamp of execution
}

/// Used for displaying command execution status in table format
#[derive(Tabled)]
struct StatusTable {
    status: String,
    message: String,
    timestamp: String,
}

lazy_static! {
    static ref ASSIGNMENT: Regex = Regex::new(r#"(\w+)\s*=\s*(?:"([^"]*)"|(\S+))"#).unwrap();
    static ref SET_KEYWORD: Regex = Regex::new(r"(?i)\s+SET(?:\s+|$)").unwrap();
    static ref SEARCH_SYNTAX: Regex =
        Regex::new(r"(?is)^SEARCH\s+(\S+)\s+MATCH(?: (.*))?$").unwrap();
}

/// Command interpreter over a [`Desk`].
#[derive(Debug)]
pub struct Shell<'a> {
    desk: &'a mut Desk,
    recent_limit: usize,
    notifications: Vec<Notification>, // From the last `execute` call
}

impl<'a> Shell<'a> {
    pub fn new(desk: &'a mut Desk) -> Self {
        Shell {
            desk,
            recent_limit: 4,
            notifications: Vec::new(),
        }
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Executes a command string and returns formatted output.
    ///
    /// Syntax errors reject the whole input. Once parsed, every command runs;
    /// a failing command is reported in its result without stopping the rest.
    pub fn execute(&mut self, input: &str, format: Option<OutputFormat>) -> Result<String> {
        let format = format.unwrap_or(OutputFormat::Standard);
        self.notifications.clear();

        let result = self.parse_commands(input).and_then(|commands| {
            let results: Vec<CommandResult> = commands
                .into_iter()
                .map(|cmd| self.run(cmd, format))
                .collect();
            self.format_results(&results, format)
        });

        match result {
            Ok(output) => Ok(output),
            Err(e) => {
                self.notifications.push(Notification::error(&e.to_string()));
                match format {
                    OutputFormat::Standard => Err(e),
                    OutputFormat::JSON => Ok(json!({
                        "success": false,
                        "error": e.to_string(),
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })
                    .to_string()),
                    OutputFormat::Table => {
                        let results = vec![StatusTable {
                            status: String::from("ERROR"),
                            message: e.to_string(),
                            timestamp: chrono::Utc::now().to_rfc3339(),
                        }];
                        Ok(Table::new(results).with(Style::ascii()).to_string())
                    }
                }
            }
        }
    }

    fn run(&mut self, command: Command, format: OutputFormat) -> CommandResult {
        debug!(command = ?command, "executing");
        let basic = command.basic();
        let mutation = command.is_mutation();

        let (success, outcome, notification) = match self.dispatch(command, format) {
            Ok(outcome) => {
                let notification = mutation.then(|| Notification::success(&outcome.message));
                (true, outcome, notification)
            }
            Err(e) => {
                warn!(command = ?basic, error = %e, "command failed");
                let outcome = Outcome {
                    message: e.to_string(),
                    data: None,
                    rows: None,
                };
                (false, outcome, Some(Notification::error(&e.to_string())))
            }
        };

        if let Some(n) = &notification {
            self.notifications.push(n.clone());
        }

        CommandResult {
            executed_command: basic,
            success,
            message: outcome.message,
            notification,
            data: outcome.data,
            rows: outcome.rows,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    fn dispatch(&mut self, command: Command, format: OutputFormat) -> Result<Outcome> {
        match command {
            Command::List { kind } => {
                let store = self.desk.store(&kind)?;
                Ok(records_outcome(store, store.list().iter().collect()))
            }
            Command::Get { kind, id } => {
                let store = self.desk.store(&kind)?;
                let record = store
                    .get(&id)
                    .ok_or_else(|| DeskError::not_found(&store.kind().name, &id))?;
                Ok(records_outcome(store, vec![record]))
            }
            Command::Search { kind, query } => {
                let store = self.desk.store(&kind)?;
                Ok(records_outcome(store, store.search(&query)))
            }
            Command::Create { kind, values } => {
                let store = self.desk.store_mut(&kind)?;
                let mut session = FormSession::start(store.kind().clone(), None);
                for (field, value) in &values {
                    session.set_field(field, value)?;
                }
                let record = session.commit(store)?;
                Ok(mutation_outcome(
                    format!("{} {} added successfully", store.kind().label, record.id),
                    &record,
                ))
            }
            Command::Edit { kind, id, values } => {
                let store = self.desk.store_mut(&kind)?;
                let current = store
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| DeskError::not_found(&store.kind().name, &id))?;
                let mut session = FormSession::start(store.kind().clone(), Some(&current));
                for (field, value) in &values {
                    session.set_field(field, value)?;
                }
                let record = session.commit(store)?;
                Ok(mutation_outcome(
                    format!("{} {} updated successfully", store.kind().label, record.id),
                    &record,
                ))
            }
            Command::Delete { kind, id } => {
                let store = self.desk.store_mut(&kind)?;
                let record = store.delete_by_id(&id)?;
                Ok(mutation_outcome(
                    format!("{} {} deleted successfully", store.kind().label, record.id),
                    &record,
                ))
            }
            Command::Summary { kind } => {
                let summary = Summary::compute(self.desk.store(&kind)?);
                let mut pairs = vec![("Total".to_string(), summary.total.to_string())];
                for status in &summary.by_status {
                    pairs.push((status.status.clone(), status.count.to_string()));
                }
                for field_sum in &summary.sums {
                    pairs.push((
                        format!("Sum of {}", field_sum.field),
                        field_sum.total.to_string(),
                    ));
                }
                Ok(pairs_outcome(pairs, json!(summary)))
            }
            Command::Overview => {
                let overview = self.desk.overview();
                let pairs = vec![
                    ("Total fines", overview.total_fines.to_string()),
                    ("Active violations", overview.active_violations.to_string()),
                    ("Outstanding amount", format_currency(overview.outstanding_amount)),
                    ("Collection rate", overview.collection_rate.clone()),
                    ("Toll revenue", format_currency(overview.toll_revenue)),
                    ("Active tolls", overview.active_tolls.to_string()),
                    ("Tolls in maintenance", overview.tolls_in_maintenance.to_string()),
                    ("Registered vehicles", overview.registered_vehicles.to_string()),
                    ("Suspended vehicles", overview.suspended_vehicles.to_string()),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
                Ok(pairs_outcome(pairs, json!(overview)))
            }
            Command::Recent { kind } => {
                let store = self.desk.store(&kind)?;
                Ok(records_outcome(
                    store,
                    aggregate::recent(store.list(), self.recent_limit),
                ))
            }
            Command::Top { kind, field, limit } => {
                let store = self.desk.store(&kind)?;
                let limit = limit.unwrap_or(self.recent_limit);
                Ok(records_outcome(
                    store,
                    aggregate::top_by(store.list(), &field, limit),
                ))
            }
            Command::Breakdown { kind, field } => {
                let store = self.desk.store(&kind)?;
                let shares = aggregate::breakdown(store.list(), &field);
                let total: usize = shares.iter().map(|s| s.count).sum();

                let mut rows = vec![vec![field.clone(), "Count".to_string(), "Share".to_string()]];
                for share in &shares {
                    rows.push(vec![
                        share.value.clone(),
                        share.count.to_string(),
                        format_percent(share.count as f64, total as f64),
                    ]);
                }
                let message = if shares.is_empty() {
                    format!("No values for '{}' in {}", field, store.kind().name)
                } else {
                    rows[1..]
                        .iter()
                        .map(|r| format!("{}: {} ({})", r[0], r[1], r[2]))
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                Ok(Outcome {
                    message,
                    data: Some(json!({ "data": shares })),
                    rows: Some(rows),
                })
            }
            Command::VehicleFines { plate } => {
                let ledger = match plate {
                    Some(plate) => vec![self.desk.vehicle_fines(&plate)],
                    None => self.desk.fine_ledger(),
                };
                Ok(vehicle_fines_outcome(&ledger))
            }
            Command::Help { command } => {
                let message = match command {
                    Some(cmd) => COMMAND_HELP
                        .get(cmd.as_str())
                        .map(|help| format_command_help(help, format))
                        .transpose()?
                        .unwrap_or_else(|| {
                            format!(
                                "Unknown command: {}. Use HELP to see available commands.",
                                cmd
                            )
                        }),
                    None => format_general_help(format)?,
                };
                Ok(Outcome {
                    message,
                    data: None,
                    rows: None,
                })
            }
        }
    }

    /// Formats multiple command results according to the specified output format
    fn format_results(&self, results: &[CommandResult], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Standard => Ok(results
                .iter()
                .map(|r| r.message.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::JSON => serde_json::to_string_pretty(&json!({
                "results": results,
                "count": results.len(),
                "success": results.iter().all(|r| r.success),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
            .map_err(|e| DeskError::Render(e.to_string())),
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok("No results".to_string());
                }

                let mut sections = Vec::new();
                let mut statuses = Vec::new();
                for result in results {
                    match (&result.rows, result.executed_command) {
                        (_, CommandBasic::Help) if result.success => {
                            flush_statuses(&mut statuses, &mut sections);
                            sections.push(result.message.clone());
                        }
                        (Some(rows), _) => {
                            flush_statuses(&mut statuses, &mut sections);
                            sections.push(render_rows(rows));
                        }
                        (None, _) => statuses.push(StatusTable {
                            status: if result.success { "SUCCESS" } else { "ERROR" }.to_string(),
                            message: result.message.clone(),
                            timestamp: result.timestamp.clone(),
                        }),
                    }
                }
                flush_statuses(&mut statuses, &mut sections);
                Ok(sections.join("\n"))
            }
        }
    }

    /// Parses input string into a vector of commands
    fn parse_commands(&self, input: &str) -> Result<Vec<Command>> {
        let mut parsed_commands = Vec::new();

        for segment in split_chain(input) {
            let segment = segment.trim_start();
            if segment.trim().is_empty() {
                continue;
            }
            parsed_commands.push(self.parse_command(segment)?);
        }

        Ok(parsed_commands)
    }

    fn parse_command(&self, segment: &str) -> Result<Command> {
        let tokens: Vec<&str> = segment.split_whitespace().collect();
        let args = &tokens[1..];

        match tokens[0].to_uppercase().as_str() {
            "LIST" => {
                let kind = expect_args(args, 1, "LIST <collection>")?;
                Ok(Command::List {
                    kind: kind[0].to_string(),
                })
            }
            "GET" => {
                let args = expect_args(args, 2, "GET <collection> <id>")?;
                Ok(Command::Get {
                    kind: args[0].to_string(),
                    id: args[1].to_string(),
                })
            }
            "SEARCH" => {
                let captures = SEARCH_SYNTAX
                    .captures(segment)
                    .ok_or_else(|| syntax_error("SEARCH <collection> MATCH <query>"))?;
                Ok(Command::Search {
                    kind: captures[1].to_string(),
                    query: captures
                        .get(2)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                })
            }
            "CREATE" => {
                let syntax = "CREATE <collection> SET field = value ...";
                let (head, values) = parse_assignments(segment, 1, syntax)?;
                Ok(Command::Create {
                    kind: head[0].clone(),
                    values,
                })
            }
            "EDIT" => {
                let syntax = "EDIT <collection> <id> SET field = value ...";
                let (head, values) = parse_assignments(segment, 2, syntax)?;
                Ok(Command::Edit {
                    kind: head[0].clone(),
                    id: head[1].clone(),
                    values,
                })
            }
            "DELETE" => {
                let syntax = "DELETE FROM <collection> <id>";
                let args = expect_args(args, 3, syntax)?;
                if args[0].to_uppercase() != "FROM" {
                    return Err(syntax_error(syntax));
                }
                Ok(Command::Delete {
                    kind: args[1].to_string(),
                    id: args[2].to_string(),
                })
            }
            "SUMMARY" => {
                let args = expect_args(args, 1, "SUMMARY <collection>")?;
                Ok(Command::Summary {
                    kind: args[0].to_string(),
                })
            }
            "OVERVIEW" => {
                expect_args(args, 0, "OVERVIEW")?;
                Ok(Command::Overview)
            }
            "RECENT" => {
                let args = expect_args(args, 1, "RECENT <collection>")?;
                Ok(Command::Recent {
                    kind: args[0].to_string(),
                })
            }
            "TOP" => {
                let syntax = "TOP <collection> BY <field> [limit]";
                if !(args.len() == 3 || args.len() == 4) || args[1].to_uppercase() != "BY" {
                    return Err(syntax_error(syntax));
                }
                let limit = match args.get(3) {
                    Some(raw) => Some(raw.parse::<usize>().map_err(|_| syntax_error(syntax))?),
                    None => None,
                };
                Ok(Command::Top {
                    kind: args[0].to_string(),
                    field: args[2].to_string(),
                    limit,
                })
            }
            "BREAKDOWN" => {
                let syntax = "BREAKDOWN <collection> BY <field>";
                let args = expect_args(args, 3, syntax)?;
                if args[1].to_uppercase() != "BY" {
                    return Err(syntax_error(syntax));
                }
                Ok(Command::Breakdown {
                    kind: args[0].to_string(),
                    field: args[2].to_string(),
                })
            }
            "VEHICLE_FINES" => {
                if args.len() > 1 {
                    return Err(syntax_error("VEHICLE_FINES [plate]"));
                }
                Ok(Command::VehicleFines {
                    plate: args.first().map(|p| p.to_string()),
                })
            }
            "HELP" => {
                let command = args.first().map(|c| c.to_uppercase());
                if let Some(cmd) = &command {
                    if !COMMAND_HELP.contains_key(cmd.as_str()) {
                        return Err(DeskError::Parse(format!(
                            "Unknown command: {}. Use HELP to see available commands.",
                            cmd
                        )));
                    }
                }
                Ok(Command::Help { command })
            }
            _ => Err(DeskError::Parse(format!("Unknown command: {}", tokens[0]))),
        }
    }
}

fn syntax_error(syntax: &str) -> DeskError {
    DeskError::Parse(format!("Invalid syntax. Expected: {}", syntax))
}

fn expect_args<'t>(args: &'t [&'t str], count: usize, syntax: &str) -> Result<&'t [&'t str]> {
    if args.len() == count {
        Ok(args)
    } else {
        Err(syntax_error(syntax))
    }
}

/// Splits chained commands on a standalone `AND` (any case) outside double
/// quotes. A `SEARCH ... MATCH` segment takes the rest of the input as its
/// query, so nothing can be chained after it.
fn split_chain(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if i == start && SEARCH_SYNTAX.is_match(input[start..].trim_start()) {
            break;
        }
        if bytes[i] == b'"' {
            in_quotes = !in_quotes;
        } else if !in_quotes
            && bytes[i].is_ascii_whitespace()
            && bytes
                .get(i + 1..i + 4)
                .map_or(false, |word| word.eq_ignore_ascii_case(b"AND"))
            && bytes.get(i + 4).map_or(false, |b| b.is_ascii_whitespace())
        {
            parts.push(&input[start..i]);
            start = i + 5;
            i = start;
            continue;
        }
        i += 1;
    }

    parts.push(&input[start..]);
    parts
}

/// Splits `<COMMAND> <head...> SET a = 1 b = "two words"` into the head
/// arguments and the field assignments.
fn parse_assignments(
    segment: &str,
    head_args: usize,
    syntax: &str,
) -> Result<(Vec<String>, Vec<(String, String)>)> {
    let (head, rest) = match SET_KEYWORD.find(segment) {
        Some(m) => (&segment[..m.start()], &segment[m.end()..]),
        None => (segment, ""),
    };

    let head: Vec<String> = head.split_whitespace().skip(1).map(String::from).collect();
    if head.len() != head_args {
        return Err(syntax_error(syntax));
    }

    let leftover = ASSIGNMENT.replace_all(rest, "");
    if !leftover.trim().is_empty() {
        return Err(DeskError::Parse(format!(
            "Expected field = value pairs after SET, found '{}'",
            leftover.trim()
        )));
    }

    let values = ASSIGNMENT
        .captures_iter(rest)
        .map(|c| {
            let value = c.get(2).or_else(|| c.get(3)).map(|m| m.as_str()).unwrap_or("");
            (c[1].to_string(), value.to_string())
        })
        .collect();

    Ok((head, values))
}

fn records_outcome(store: &RecordStore, records: Vec<&Record>) -> Outcome {
    let kind = store.kind();

    let message = if records.is_empty() {
        format!("No matching records in {}", kind.name)
    } else {
        records
            .iter()
            .map(|record| {
                let values = record
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Record {}: {{{}}}", record.id, values)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut header = vec!["ID".to_string()];
    header.extend(kind.fields.iter().map(|f| f.name.clone()));
    let mut rows = vec![header];
    for record in &records {
        let mut row = vec![record.id.clone()];
        row.extend(kind.fields.iter().map(|f| {
            record
                .get_field(&f.name)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "NULL".to_string())
        }));
        rows.push(row);
    }

    Outcome {
        message,
        data: Some(json!({ "data": records })),
        rows: Some(rows),
    }
}

fn mutation_outcome(message: String, record: &Record) -> Outcome {
    Outcome {
        message,
        data: Some(json!({ "record": record })),
        rows: None,
    }
}

fn pairs_outcome(pairs: Vec<(String, String)>, data: serde_json::Value) -> Outcome {
    let message = pairs
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n");
    let mut rows = vec![vec!["Metric".to_string(), "Value".to_string()]];
    rows.extend(pairs.into_iter().map(|(k, v)| vec![k, v]));

    Outcome {
        message,
        data: Some(data),
        rows: Some(rows),
    }
}

fn vehicle_fines_outcome(ledger: &[VehicleFines]) -> Outcome {
    let mut rows = vec![vec![
        "Plate".to_string(),
        "Active Fines".to_string(),
        "Total Fines".to_string(),
        "Last Violation".to_string(),
    ]];
    for entry in ledger {
        rows.push(vec![
            entry.plate.clone(),
            entry.active_fines.to_string(),
            format_currency(entry.total_fines),
            entry.last_violation_label().to_string(),
        ]);
    }

    let message = ledger
        .iter()
        .map(|entry| {
            format!(
                "{}: {} active fines, {} total, last violation {}",
                entry.plate,
                entry.active_fines,
                format_currency(entry.total_fines),
                entry.last_violation_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Outcome {
        message,
        data: Some(json!({ "data": ledger })),
        rows: Some(rows),
    }
}

fn render_rows(rows: &[Vec<String>]) -> String {
    let mut builder = Builder::new();
    for row in rows {
        builder.push_record(row.clone());
    }
    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

fn flush_statuses(statuses: &mut Vec<StatusTable>, sections: &mut Vec<String>) {
    if !statuses.is_empty() {
        let rows = std::mem::take(statuses);
        sections.push(Table::new(rows).with(Style::ascii()).to_string());
    }
}

/// Formats help text according to the specified output format.
fn format_command_help(help: &CommandHelp, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Standard => Ok(format!(
            "Syntax: {}\n\nDescription:\n{}\n\nExamples:\n{}\n",
            help.syntax,
            help.description,
            help.examples
                .iter()
                .map(|ex| format!("  {}", ex))
                .collect::<Vec<_>>()
                .join("\n")
        )),
        OutputFormat::JSON => {
            serde_json::to_string_pretty(&help).map_err(|e| DeskError::Render(e.to_string()))
        }
        OutputFormat::Table => {
            let mut builder = Builder::new();
            builder.push_record(["Syntax", help.syntax.as_str()]);
            builder.push_record(["Description", help.description.as_str()]);
            let examples = help.examples.join("\n");
            builder.push_record(["Examples", examples.as_str()]);
            Ok(builder.build().with(Style::ascii()).to_string())
        }
    }
}

/// Formats the general help menu that lists all available commands.
fn format_general_help(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Standard => Ok(get_general_help()),
        OutputFormat::JSON => {
            let commands: Vec<&str> = COMMAND_HELP.keys().copied().collect();
            serde_json::to_string_pretty(&commands).map_err(|e| DeskError::Render(e.to_string()))
        }
        OutputFormat::Table => {
            let mut builder = Builder::new();
            builder.push_record(["Command", "Description"]);
            for (cmd, help) in COMMAND_HELP.iter() {
                builder.push_record([*cmd, help.description.as_str()]);
            }
            Ok(builder.build().with(Style::ascii()).to_string())
        }
    }
}
