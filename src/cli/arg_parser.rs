use crate::core::analysis::{ReceiptAnalysis, SplitError};
use crate::core::settlement::{ItemAllocation, Person};
use crate::utils;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;

// Everything the engine needs for one bill, bundled in a session file:
// the extracted receipt, the people splitting it, and the item allocations.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    pub receipt: ReceiptAnalysis,
    pub people: Vec<Person>,
    #[serde(default)]
    pub allocations: Vec<ItemAllocation>,
    // Abbreviation-to-person-id mappings remembered across --assign flags,
    // so the same shorthand keeps meaning the same person.
    #[serde(skip)]
    pub mapped_abbreviations: HashMap<String, String>,
}

impl Session {
    pub fn load(path: &str) -> Result<Session, SplitError> {
        let contents = fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&contents)?;

        // Duplicate person ids are undefined behavior for the engine, so
        // they are rejected here at the boundary.
        let person_ids: Vec<&str> = session.people.iter().map(|p| p.id.as_str()).collect();
        utils::is_string_vec_unique(
            &person_ids,
            SplitError::DuplicatePeopleError(
                "The session file lists the same person id more than once. Please disambiguate."
                    .into(),
            ),
        )?;

        Ok(session)
    }
}

// Super-basic parsing, advanced parsing packages are not needed
pub fn parse_args() -> Result<(Session, Option<Decimal>), SplitError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        return Err(SplitError::InvalidArgument(format!(
            "You have not specified a session file to settle. Usage: \
            fairsplit <session.json> [--assign 'Item,Ab,Cd'] [--total <amount>]"
        )));
    }

    let mut session = Session::load(&args[1])?;
    let mut total_override: Option<Decimal> = None;
    let mut curr_arg: Option<&str> = None;
    for (arg_idx, arg) in args[2..].iter().enumerate() {
        match curr_arg {
            None => {
                if arg.starts_with("--") {
                    curr_arg = Some(&arg[2..]);
                } else if arg.starts_with("-") {
                    curr_arg = Some(&arg[1..]);
                } else {
                    return Err(SplitError::InvalidArgument(format!(
                        "Argument {} is expected (in this case) to be a flag, \
                        and must be prefixed with a dash (-) or a double dash (--). Currently, \
                        it is {}",
                        arg_idx + 1,
                        arg
                    )));
                }
            }
            Some("assign") | Some("a") => {
                session.parse_assignment(arg)?;
                curr_arg = None;
            }
            Some("total") | Some("t") => {
                total_override = Some(arg.parse()?);
                curr_arg = None;
            }
            Some(flag) => {
                return Err(SplitError::InvalidArgument(format!(
                    "Unknown flag: {}. Supported flags are --assign (-a) and --total (-t).",
                    flag
                )));
            }
        }
    }
    if let Some(flag) = curr_arg {
        return Err(SplitError::InvalidArgument(format!(
            "The flag {} is missing its value.",
            flag
        )));
    }

    Ok((session, total_override))
}
