use std::io::{self, Write};

use crate::collection::TreeCollection;
use crate::record::Borough;




/**
 * Print the query report for one species query: the list of matching
 * species, then the popularity table for the whole city and for each
 * borough in the fixed order. The caller supplies the match list so the
 * report agrees with the match test it already ran.
 */
pub fn write_report<W: Write>(
    out: &mut W,
    collection: &TreeCollection,
    query: &str,
    matches: &[String],
) -> io::Result<()> {
    writeln!(out, "\nAll matching species: ")?;
    for name in matches {
        writeln!(out, "   {}", name)?;
    }

    writeln!(out, "\nPopularity in the city: ")?;
    writeln!(
        out,
        "{}",
        table_row("NYC", collection.count_by_species(query), collection.total())
    )?;
    for borough in &Borough::ALL {
        writeln!(
            out,
            "{}",
            table_row(
                borough.name(),
                collection.count_by_species_borough(query, borough.name()),
                collection.count_by_borough(borough.name()),
            )
        )?;
    }
    Ok(())
}




/**
 * One line of the popularity table: label, matching count, total count in
 * parentheses, and the percentage of the total that matches. The percentage
 * is 0 when the total is 0.
 */
fn table_row(label: &str, matches: usize, total: usize) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        100.0 * matches as f64 / total as f64
    };
    format!(
        "   {:<15}:{:>10}({}){:>7.2}%",
        label,
        group_digits(matches),
        group_digits(total),
        percentage
    )
}




/**
 * Format a count with comma-grouped thousands.
 */
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{group_digits, table_row, write_report};
    use crate::collection::TreeCollection;
    use crate::record::{Borough, TreeRecord};

    #[test]
    fn digits_group_in_threes() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(683788), "683,788");
        assert_eq!(group_digits(12345678), "12,345,678");
    }

    #[test]
    fn rows_guard_against_a_zero_total() {
        assert_eq!(table_row("Queens", 0, 0), "   Queens         :         0(0)   0.00%");
    }

    #[test]
    fn rows_show_counts_and_percentage() {
        assert_eq!(table_row("NYC", 1500, 6000), "   NYC            :     1,500(6,000)  25.00%");
    }

    #[test]
    fn report_lists_matches_then_the_city_and_borough_rows() {
        let mut collection = TreeCollection::new();
        for (id, species, borough) in [
            (1, "oak", Borough::Manhattan),
            (2, "oaktree", Borough::Bronx),
            (3, "pine", Borough::Manhattan),
        ] {
            let record =
                TreeRecord::new(id, 6, None, None, species, 10001, borough, 0.0, 0.0).unwrap();
            collection.insert(record).unwrap();
        }

        let matches = collection.matching_species("oak");
        let mut out = Vec::new();
        write_report(&mut out, &collection, "oak", &matches).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("All matching species: \n   oak\n   oaktree\n"));
        assert!(text.contains("   NYC            :         2(3)  66.67%"));
        assert!(text.contains("   Manhattan      :         1(2)  50.00%"));
        assert!(text.contains("   Bronx          :         1(1) 100.00%"));
        assert!(text.contains("   Staten Island  :         0(0)   0.00%"));
    }
}
