use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CommandHelp {
    pub syntax: String,
    pub description: String,
    pub examples: Vec<String>,
}

fn help(syntax: &str, description: &str, examples: &[&str]) -> CommandHelp {
    CommandHelp {
        syntax: syntax.to_string(),
        description: description.to_string(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
    }
}

lazy_static! {
    pub static ref COMMAND_HELP: BTreeMap<&'static str, CommandHelp> = {
        let mut m = BTreeMap::new();

        m.insert(
            "LIST",
            help(
                "LIST <collection>",
                "Lists every record of a collection in insertion order",
                &["LIST fines", "LIST vehicles"],
            ),
        );

        m.insert(
            "GET",
            help(
                "GET <collection> <id>",
                "Shows a single record",
                &["GET fines F001"],
            ),
        );

        m.insert(
            "SEARCH",
            help(
                "SEARCH <collection> MATCH <query>",
                "Case-insensitive substring search over the collection's searchable fields. \
                 Everything after the space following MATCH is the query, whitespace and AND included, \
                 so SEARCH always ends a chain",
                &["SEARCH fines MATCH speeding", "SEARCH tolls MATCH highway 2"],
            ),
        );

        m.insert(
            "CREATE",
            help(
                "CREATE <collection> SET field1 = value1 [field2 = value2 ...]",
                "Creates a record through a form session. Required fields must be non-empty, \
                 numeric fields must parse. The next sequential id is assigned",
                &[
                    r#"CREATE fines SET vehicleNumber = "JKL-000" violationType = Speeding amount = 200 location = "Main St""#,
                    r#"CREATE tolls SET name = "River Gate" location = "Route 9" rate = 2.75 type = Bridge"#,
                ],
            ),
        );

        m.insert(
            "EDIT",
            help(
                "EDIT <collection> <id> SET field1 = value1 [field2 = value2 ...]",
                "Edits a record through a form session pre-filled with its current values",
                &[
                    "EDIT fines F001 SET status = Paid",
                    r#"EDIT vehicles V002 SET status = Active phone = "(555) 000-1111""#,
                ],
            ),
        );

        m.insert(
            "DELETE",
            help(
                "DELETE FROM <collection> <id>",
                "Deletes a record. Its id is never handed out again",
                &["DELETE FROM tolls T004"],
            ),
        );

        m.insert(
            "SUMMARY",
            help(
                "SUMMARY <collection>",
                "Totals, per-status counts and sums of the collection's numeric fields",
                &["SUMMARY fines", "SUMMARY tolls"],
            ),
        );

        m.insert(
            "OVERVIEW",
            help(
                "OVERVIEW",
                "Dashboard metrics across fines, tolls and vehicles",
                &["OVERVIEW"],
            ),
        );

        m.insert(
            "RECENT",
            help(
                "RECENT <collection>",
                "Most recently added records, newest first",
                &["RECENT fines"],
            ),
        );

        m.insert(
            "TOP",
            help(
                "TOP <collection> BY <field> [limit]",
                "Records ranked by a numeric field, highest first",
                &["TOP tolls BY dailyRevenue 3"],
            ),
        );

        m.insert(
            "BREAKDOWN",
            help(
                "BREAKDOWN <collection> BY <field>",
                "Count and share of each distinct value of a field",
                &["BREAKDOWN fines BY violationType", "BREAKDOWN vehicles BY status"],
            ),
        );

        m.insert(
            "VEHICLE_FINES",
            help(
                "VEHICLE_FINES [plate]",
                "Active fines, fine total and last violation per vehicle, joined from the fines",
                &["VEHICLE_FINES ABC-123", "VEHICLE_FINES"],
            ),
        );

        m.insert(
            "HELP",
            help(
                "HELP [command]",
                "Shows help information for all commands or a specific command",
                &["HELP", "HELP CREATE"],
            ),
        );

        m
    };
}

pub fn get_general_help() -> String {
    "Available commands:\n\
     LIST          - List the records of a collection\n\
     GET           - Show a single record\n\
     SEARCH        - Search a collection\n\
     CREATE        - Create a record\n\
     EDIT          - Edit a record\n\
     DELETE        - Delete a record\n\
     SUMMARY       - Collection statistics\n\
     OVERVIEW      - Dashboard metrics\n\
     RECENT        - Latest records of a collection\n\
     TOP           - Records ranked by a numeric field\n\
     BREAKDOWN     - Distribution of a field's values\n\
     VEHICLE_FINES - Fines joined per vehicle\n\
     \n\
     Collections: fines, tolls, vehicles. Chain commands with AND (any case).\n\
     Use 'HELP <command>' for detailed information about a specific command."
        .to_string()
}
