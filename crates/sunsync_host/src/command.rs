//! Recognising game commands that would fight the synchronizer.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, multispace1};
use nom::combinator::opt;
use nom::{IResult, Parser};

/// `true` for `time set …` and `time add …`, with or without a leading
/// `/` and the `minecraft:` namespace. Case and surrounding whitespace are
/// ignored.
pub fn command_changes_game_time(command: &str) -> bool {
    let normalized = command.trim().to_lowercase();
    time_change_prefix(&normalized).is_ok()
}

fn time_change_prefix(input: &str) -> IResult<&str, &str> {
    (
        opt(char('/')),
        opt(tag("minecraft:")),
        tag("time"),
        multispace1,
        alt((tag("set"), tag("add"))),
    )
        .map(|(_, _, _, _, action)| action)
        .parse(input)
}
