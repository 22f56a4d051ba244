use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// One line of desk-operator input, already typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        start: Date,
        end: Date,
        kind: Option<String>,
    },
    Rent {
        student_id: i32,
        instrument_id: i32,
        start: Date,
        end: Date,
        delivery: Option<OffsetDateTime>,
        notes: Option<String>,
    },
    Terminate {
        student_id: i32,
        instrument_id: i32,
        start: Date,
    },
    Help,
    Quit,
}

fn parse_date(text: &str) -> Result<Date, String> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|_| format!("'{text}' is not a date (expected YYYY-MM-DD)"))
}

fn parse_id(text: &str, what: &str) -> Result<i32, String> {
    text.parse::<i32>()
        .map_err(|_| format!("'{text}' is not a {what} id"))
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err("empty command".to_owned());
        };

        match word.to_ascii_lowercase().as_str() {
            "list" => {
                let start = parse_date(words.next().ok_or("list needs a start date")?)?;
                let end = parse_date(words.next().ok_or("list needs an end date")?)?;
                let kind = words.next().map(str::to_owned);
                Ok(Command::List { start, end, kind })
            }
            "rent" => {
                let student_id = parse_id(words.next().ok_or("rent needs a student id")?, "student")?;
                let instrument_id =
                    parse_id(words.next().ok_or("rent needs an instrument id")?, "instrument")?;
                let start = parse_date(words.next().ok_or("rent needs a start date")?)?;
                let end = parse_date(words.next().ok_or("rent needs an end date")?)?;
                let delivery = words
                    .next()
                    .map(|text| {
                        OffsetDateTime::parse(text, &Rfc3339).map_err(|_| {
                            format!("'{text}' is not a delivery time (expected RFC 3339)")
                        })
                    })
                    .transpose()?;
                let notes = words.collect::<Vec<_>>().join(" ");
                let notes = (!notes.is_empty()).then_some(notes);
                Ok(Command::Rent {
                    student_id,
                    instrument_id,
                    start,
                    end,
                    delivery,
                    notes,
                })
            }
            "terminate" => {
                let student_id =
                    parse_id(words.next().ok_or("terminate needs a student id")?, "student")?;
                let instrument_id = parse_id(
                    words.next().ok_or("terminate needs an instrument id")?,
                    "instrument",
                )?;
                let start = parse_date(words.next().ok_or("terminate needs a start date")?)?;
                Ok(Command::Terminate {
                    student_id,
                    instrument_id,
                    start,
                })
            }
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}'; try 'help'")),
        }
    }
}
