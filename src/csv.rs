use std::io::{self, BufRead};
use std::mem;

use log::{debug, error};

use crate::collection::TreeCollection;
use crate::error::Error;
use crate::record::{Borough, Health, Status, TreeRecord};




/**
 * Number of fields on a valid census line. Lines with any other field count
 * are skipped outright.
 */
pub const FIELD_COUNT: usize = 41;

// column indexes of the nine fields this program stores
const COL_ID: usize = 0;
const COL_DIAMETER: usize = 3;
const COL_STATUS: usize = 6;
const COL_HEALTH: usize = 7;
const COL_SPECIES: usize = 9;
const COL_ZIP: usize = 25;
const COL_BOROUGH: usize = 29;
const COL_X: usize = 39;
const COL_Y: usize = 40;




/**
 * Split one line of the census file into its fields. Straight or smart
 * double quotes delimit a field that may itself contain commas. Whitespace
 * between fields is dropped; whitespace inside a quoted or already-started
 * field is preserved. The final field is trimmed and dropped when empty.
 */
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut next_word = String::new();
    let mut inside_quotes = false;
    let mut inside_entry = false;

    for next_char in line.chars() {
        match next_char {
            '"' | '\u{201C}' | '\u{201D}' => {
                if inside_quotes {
                    inside_quotes = false;
                    inside_entry = false;
                } else {
                    inside_quotes = true;
                    inside_entry = true;
                }
            }
            ',' if !inside_quotes => {
                inside_entry = false;
                entries.push(mem::take(&mut next_word));
            }
            c if c.is_whitespace() => {
                if inside_quotes || inside_entry {
                    next_word.push(c);
                }
            }
            c => {
                next_word.push(c);
                inside_entry = true;
            }
        }
    }
    if !next_word.is_empty() {
        entries.push(next_word.trim().to_owned());
    }
    entries
}




/**
 * Validate one tokenized line against the fixed census schema and build the
 * record it describes. Text fields are lowercased before storage.
 */
pub fn parse_record(fields: &[String]) -> Result<TreeRecord, Error> {
    if fields.len() != FIELD_COUNT {
        return Err(Error::SchemaViolation(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let id = parse_number::<u32>(&fields[COL_ID], "tree id")?;
    let diameter = parse_number::<u32>(&fields[COL_DIAMETER], "trunk diameter")?;
    let status = parse_domain(&fields[COL_STATUS], Status::from_name, "status")?;
    let health = parse_domain(&fields[COL_HEALTH], Health::from_name, "health")?;
    let species = fields[COL_SPECIES].to_lowercase();
    let zip = parse_number::<u32>(&fields[COL_ZIP], "zip code")?;
    let borough = Borough::from_name(&fields[COL_BOROUGH]).ok_or_else(|| {
        Error::SchemaViolation(format!("unknown borough '{}'", fields[COL_BOROUGH]))
    })?;
    let x = parse_number::<f64>(&fields[COL_X], "x coordinate")?;
    let y = parse_number::<f64>(&fields[COL_Y], "y coordinate")?;

    TreeRecord::new(id, diameter, status, health, &species, zip, borough, x, y)
}

fn parse_number<T: std::str::FromStr>(field: &str, what: &str) -> Result<T, Error> {
    field
        .parse()
        .map_err(|_| Error::SchemaViolation(format!("unreadable {} '{}'", what, field)))
}

fn parse_domain<T>(
    field: &str,
    from_name: fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>, Error> {
    if field.is_empty() {
        Ok(None)
    } else {
        from_name(field)
            .map(Some)
            .ok_or_else(|| Error::SchemaViolation(format!("unknown {} '{}'", what, field)))
    }
}




/**
 * What happened to the lines of a census file. `loaded` counts records now
 * in the collection; everything else was left out, each line for exactly one
 * of the listed reasons.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadStats {
    pub lines: usize,
    pub loaded: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub integrity_errors: usize,
}




/**
 * Read a census file into the collection, one record per line. Lines that
 * violate the schema are skipped and the file keeps loading; integrity
 * violations are surfaced in the log and the statistics but never ingested.
 * Only an I/O failure aborts the load.
 */
pub fn read_census<R: BufRead>(reader: R, collection: &mut TreeCollection) -> io::Result<LoadStats> {
    let mut stats = LoadStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;

        match parse_record(&split_csv_line(&line)) {
            Ok(record) => match collection.insert(record) {
                Ok(true) => stats.loaded += 1,
                Ok(false) => {
                    stats.duplicates += 1;
                    debug!("line {}: duplicate record, not stored", stats.lines);
                }
                Err(violation) => {
                    stats.integrity_errors += 1;
                    error!("line {}: {}", stats.lines, violation);
                }
            },
            Err(violation) => {
                stats.skipped += 1;
                debug!("line {}: {}", stats.lines, violation);
            }
        }
    }
    Ok(stats)
}
