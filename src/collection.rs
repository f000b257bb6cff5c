use std::collections::HashMap;

use crate::bst::Bst;
use crate::error::Error;
use crate::record::{Borough, TreeRecord};




/**
 * The full census: an ordered tree of street tree records plus aggregates
 * maintained on insert — running per-borough totals, the distinct species
 * names in first-seen order, and an id registry backing the integrity check.
 * The collection is populated once from the dataset and read-only for the
 * rest of the process; nothing removes records, so the aggregates only ever
 * grow with the tree.
 */
pub struct TreeCollection {
    tree: Bst<TreeRecord>,
    borough_count: [usize; 5],
    species: Vec<String>,
    ids: HashMap<u32, String>,
}




// ============================================================================
impl TreeCollection {

    pub fn new() -> Self {
        Self {
            tree: Bst::new(),
            borough_count: [0; 5],
            species: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /**
     * Total number of records stored, citywide. O(1).
     */
    pub fn total(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn contains(&self, record: &TreeRecord) -> bool {
        self.tree.contains(record)
    }

    /**
     * The record ordering first by species name, or `EmptyCollection`.
     */
    pub fn first(&self) -> Result<&TreeRecord, Error> {
        self.tree.first()
    }

    /**
     * The record ordering last by species name, or `EmptyCollection`.
     */
    pub fn last(&self) -> Result<&TreeRecord, Error> {
        self.tree.last()
    }

    /**
     * Distinct species names seen so far, in first-seen order.
     */
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /**
     * Store a record. Returns Ok(false) without touching the tree or the
     * aggregates when a record comparing equal by (species, id) is already
     * stored. Reusing an id under a different species name is a
     * data-integrity violation and is refused before placement; ids are
     * globally unique per species.
     */
    pub fn insert(&mut self, record: TreeRecord) -> Result<bool, Error> {
        if let Some(stored) = self.ids.get(&record.id()) {
            if !stored.eq_ignore_ascii_case(record.species()) {
                return Err(Error::IntegrityViolation {
                    id: record.id(),
                    stored: stored.clone(),
                    offered: record.species().to_owned(),
                });
            }
        }

        let id = record.id();
        let borough = record.borough();
        let species = record.species().to_owned();

        let inserted = self.tree.insert(record);
        if inserted {
            self.borough_count[borough.index()] += 1;
            if !self.species.iter().any(|name| name.eq_ignore_ascii_case(&species)) {
                self.species.push(species.clone());
            }
            self.ids.insert(id, species);
        }
        Ok(inserted)
    }

    /**
     * All distinct species names that contain the query as a substring,
     * case-insensitively, in first-seen order. An empty query matches every
     * species. O(S) over the distinct-species list; recomputed per query.
     */
    pub fn matching_species(&self, query: &str) -> Vec<String> {
        let query = query.to_ascii_lowercase();

        self.species
            .iter()
            .filter(|name| name.to_ascii_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /**
     * Number of stored records whose species name contains the query as a
     * substring. One full in-order traversal per matching species name:
     * every node is visited once per probe, whatever the comparison outcome.
     */
    pub fn count_by_species(&self, query: &str) -> usize {
        self.matching_species(query)
            .iter()
            .map(|name| self.count_matching(name, None))
            .sum()
    }

    /**
     * Number of stored records in the named borough, from the running
     * counters. O(B) over the five boroughs; an unknown name counts 0.
     */
    pub fn count_by_borough(&self, name: &str) -> usize {
        Borough::from_name(name).map_or(0, |borough| self.borough_count[borough.index()])
    }

    /**
     * Number of stored records whose species name contains the query as a
     * substring and which stand in the named borough. Same traversal
     * strategy as `count_by_species`; an unknown borough counts 0.
     */
    pub fn count_by_species_borough(&self, query: &str, boro_name: &str) -> usize {
        let borough = match Borough::from_name(boro_name) {
            Some(borough) => borough,
            None => return 0,
        };

        self.matching_species(query)
            .iter()
            .map(|name| self.count_matching(name, Some(borough)))
            .sum()
    }

    fn count_matching(&self, name: &str, borough: Option<Borough>) -> usize {
        self.tree
            .iter()
            .filter(|record| record.has_species(name))
            .filter(|record| borough.map_or(true, |b| record.borough() == b))
            .count()
    }
}




// ============================================================================
impl Default for TreeCollection {
    fn default() -> Self {
        Self::new()
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::TreeCollection;
    use crate::error::Error;
    use crate::record::{Borough, TreeRecord};

    fn record(id: u32, species: &str, borough: Borough) -> TreeRecord {
        TreeRecord::new(id, 6, None, None, species, 10001, borough, 0.0, 0.0).unwrap()
    }

    fn oak_collection() -> TreeCollection {
        let mut collection = TreeCollection::new();
        collection.insert(record(1, "oak", Borough::Manhattan)).unwrap();
        collection.insert(record(2, "Oaktree", Borough::Bronx)).unwrap();
        collection.insert(record(3, "pine", Borough::Manhattan)).unwrap();
        collection
    }

    #[test]
    fn matching_species_finds_substring_matches_in_first_seen_order() {
        let collection = oak_collection();
        assert_eq!(collection.matching_species("oak"), ["oak", "Oaktree"]);
        assert_eq!(collection.matching_species("OAK"), ["oak", "Oaktree"]);
        assert_eq!(collection.matching_species("maple"), Vec::<String>::new());
    }

    #[test]
    fn count_by_species_sums_over_all_matching_names() {
        let collection = oak_collection();
        assert_eq!(collection.count_by_species("oak"), 2);
        assert_eq!(collection.count_by_species("pine"), 1);
        assert_eq!(collection.count_by_species("maple"), 0);
    }

    #[test]
    fn count_by_borough_reads_the_running_counters() {
        let collection = oak_collection();
        assert_eq!(collection.count_by_borough("manhattan"), 2);
        assert_eq!(collection.count_by_borough("Bronx"), 1);
        assert_eq!(collection.count_by_borough("queens"), 0);
        assert_eq!(collection.count_by_borough("jersey"), 0);
    }

    #[test]
    fn count_by_species_and_borough_applies_both_filters() {
        let collection = oak_collection();
        assert_eq!(collection.count_by_species_borough("oak", "manhattan"), 1);
        assert_eq!(collection.count_by_species_borough("oak", "bronx"), 1);
        assert_eq!(collection.count_by_species_borough("pine", "bronx"), 0);
        assert_eq!(collection.count_by_species_borough("oak", "jersey"), 0);
    }

    #[test]
    fn empty_query_matches_every_species() {
        let collection = oak_collection();
        assert_eq!(collection.count_by_species(""), collection.total());
        assert_eq!(collection.matching_species("").len(), 3);
    }

    #[test]
    fn empty_collection_answers_zero_and_fails_first() {
        let collection = TreeCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.count_by_species("anything"), 0);
        assert_eq!(collection.count_by_borough("bronx"), 0);
        assert!(matches!(collection.first(), Err(Error::EmptyCollection)));
        assert!(matches!(collection.last(), Err(Error::EmptyCollection)));
    }

    #[test]
    fn stored_records_are_members_and_species_accumulate_in_order() {
        let collection = oak_collection();
        assert!( collection.contains(&record(1, "oak", Borough::Manhattan)));
        assert!(!collection.contains(&record(4, "oak", Borough::Manhattan)));
        assert_eq!(collection.species(), ["oak", "Oaktree", "pine"]);
    }

    #[test]
    fn duplicate_records_are_rejected_without_touching_aggregates() {
        let mut collection = oak_collection();
        assert_eq!(collection.insert(record(1, "oak", Borough::Manhattan)), Ok(false));
        assert_eq!(collection.total(), 3);
        assert_eq!(collection.count_by_borough("manhattan"), 2);
    }

    #[test]
    fn id_reuse_across_species_is_an_integrity_violation() {
        let mut collection = oak_collection();
        let result = collection.insert(record(1, "pine", Borough::Queens));
        assert!(matches!(result, Err(Error::IntegrityViolation { id: 1, .. })));
        assert_eq!(collection.total(), 3);
        assert_eq!(collection.count_by_borough("queens"), 0);
    }

    #[test]
    fn borough_counts_sum_to_the_total() {
        let mut collection = TreeCollection::new();
        let boroughs = Borough::ALL;
        for id in 1..=25u32 {
            let borough = boroughs[(id % 5) as usize];
            collection.insert(record(id, "honeylocust", borough)).unwrap();
        }
        let summed: usize = Borough::ALL.iter().map(|b| collection.count_by_borough(b.name())).sum();
        assert_eq!(summed, collection.total());
    }

    #[test]
    fn first_and_last_follow_species_then_id() {
        let collection = oak_collection();
        assert_eq!(collection.first().unwrap().id(), 1);
        assert_eq!(collection.last().unwrap().id(), 3);
    }
}
