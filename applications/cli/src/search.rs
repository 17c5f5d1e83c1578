//! Library search program
//!
//! Lists the sample library, sorts it by duration, lists it again, then
//! reads one title from input and reports the first match.

use crate::error::Result;
use medialib_core::{sample, MediaLibrary};
use std::io::{BufRead, Write};

/// Run the library program, reading the query from `input`
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let mut library: MediaLibrary = sample::library_media()?.into_iter().collect();

    writeln!(out, "Media library:")?;
    writeln!(out, "{}", library.describe())?;

    library.sort_by_duration();
    writeln!(out)?;
    writeln!(out, "Sorted by duration:")?;
    writeln!(out, "{}", library.describe())?;

    writeln!(out)?;
    write!(out, "Enter a title to search: ")?;
    out.flush()?;

    let query = read_query(input)?;
    tracing::info!(query = %query, "Searching library");

    match library.find_by_title(&query) {
        Some(media) => writeln!(out, "Found: {}", media.describe())?,
        None => writeln!(out, "No content found with title \"{}\"", query)?,
    }

    Ok(())
}

/// Read one line, without its line terminator
///
/// End of input yields an empty query.
pub fn read_query<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
