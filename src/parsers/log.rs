use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::record::parse_record;
use crate::models::RawRecord;

/// Open a session log and iterate over its decodable records, in file order
///
/// Lines that are not valid UTF-8 or not a JSON object are skipped. A read
/// error partway through ends the iteration. The file handle is dropped with
/// the iterator.
pub fn read_records(path: &Path) -> io::Result<impl Iterator<Item = RawRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    Ok(reader
        .split(b'\n')
        .map_while(Result::ok)
        .filter_map(|bytes| std::str::from_utf8(&bytes).ok().and_then(parse_record)))
}
