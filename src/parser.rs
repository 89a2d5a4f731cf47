use std::str::from_utf8;

use nom::{
    bytes::complete::take_till1,
    character::complete::{i32, space1},
    combinator::{all_consuming, map, opt, rest},
    sequence::{preceded, terminated, tuple},
    IResult,
};
use rayon::prelude::*;

use crate::{error::IngestError, record::CourseRecord};

// Tokens end where `space1` separators begin.
fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ' || c == '\t')(input)
}

// courseID crn credits room instructor...
fn course_line(input: &str) -> IResult<&str, CourseRecord> {
    map(
        all_consuming(tuple((
            terminated(field, space1),
            terminated(i32, space1),
            terminated(i32, space1),
            field,
            opt(preceded(space1, rest)),
        ))),
        |(course_id, crn, credits, room, instructor)| {
            CourseRecord::new(
                crn,
                course_id,
                credits,
                room,
                instructor.unwrap_or_default(),
            )
        },
    )(input)
}

/// Parses one line. Blank lines yield `Ok(None)`; `line` is the 1-based
/// number used in error reports.
pub fn parse_line(text: &str, line: usize) -> Result<Option<CourseRecord>, IngestError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match course_line(trimmed) {
        Ok((_, record)) => Ok(Some(record)),
        Err(_) => Err(IngestError::MalformedLine {
            line,
            content: trimmed.to_owned(),
        }),
    }
}

/// Splits `chunk` into lines, tagging each with its 1-based line number
/// offset by `first_line - 1`.
fn split_lines(chunk: &[u8], first_line: usize) -> Vec<(usize, &[u8])> {
    let mut lines = Vec::new();
    let mut start = 0;
    memchr::memchr_iter(b'\n', chunk).for_each(|end| {
        lines.push((first_line + lines.len(), &chunk[start..end]));
        start = end + 1;
    });
    if start < chunk.len() {
        lines.push((first_line + lines.len(), &chunk[start..]));
    }
    lines
}

/// Parses every line of `chunk` in parallel and returns the records in line
/// order. The first malformed line (by position) is reported.
pub fn parse_chunk(chunk: &[u8], first_line: usize) -> Result<Vec<CourseRecord>, IngestError> {
    let parsed: Vec<Result<Option<CourseRecord>, IngestError>> = split_lines(chunk, first_line)
        .into_par_iter()
        .map(|(line, bytes)| {
            let text = from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 { line })?;
            parse_line(text, line)
        })
        .collect();

    let mut records = Vec::with_capacity(parsed.len());
    for result in parsed {
        if let Some(record) = result? {
            records.push(record);
        }
    }
    Ok(records)
}
