use std::cmp::Ordering;

use crate::error::Error;




/**
 * Life status of a recorded tree. The census leaves the field empty for some
 * rows; an absent status is modeled as `None` at the record level.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead,
    Stump,
}

impl Status {
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("alive") {
            Some(Status::Alive)
        } else if name.eq_ignore_ascii_case("dead") {
            Some(Status::Dead)
        } else if name.eq_ignore_ascii_case("stump") {
            Some(Status::Stump)
        } else {
            None
        }
    }
}




/**
 * Observed health of a living tree; absent for dead trees and stumps.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Good,
    Fair,
    Poor,
}

impl Health {
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("good") {
            Some(Health::Good)
        } else if name.eq_ignore_ascii_case("fair") {
            Some(Health::Fair)
        } else if name.eq_ignore_ascii_case("poor") {
            Some(Health::Poor)
        } else {
            None
        }
    }
}




/**
 * One of the five boroughs. `ALL` lists them in the fixed order the query
 * report uses.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Borough {
    Manhattan,
    Bronx,
    Brooklyn,
    Queens,
    StatenIsland,
}




// ============================================================================
impl Borough {

    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    /**
     * Case-insensitive lookup by the borough's full name.
     */
    pub fn from_name(name: &str) -> Option<Self> {
        Borough::ALL
            .iter()
            .find(|borough| borough.name().eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /**
     * Position in `ALL`; indexes the collection's per-borough counters.
     */
    pub(crate) fn index(self) -> usize {
        match self {
            Borough::Manhattan => 0,
            Borough::Bronx => 1,
            Borough::Brooklyn => 2,
            Borough::Queens => 3,
            Borough::StatenIsland => 4,
        }
    }
}




/**
 * A single street tree record from the census. Immutable once constructed;
 * the constructor enforces the field domains. Records order by species name
 * (case-insensitive) first and id second, and two records are equal exactly
 * when both keys agree.
 */
#[derive(Clone, Debug)]
pub struct TreeRecord {
    id: u32,
    diameter: u32,
    status: Option<Status>,
    health: Option<Health>,
    species: String,
    zip: u32,
    borough: Borough,
    x: f64,
    y: f64,
}




// ============================================================================
impl TreeRecord {

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        diameter: u32,
        status: Option<Status>,
        health: Option<Health>,
        species: &str,
        zip: u32,
        borough: Borough,
        x: f64,
        y: f64,
    ) -> Result<Self, Error> {
        if id == 0 {
            return Err(Error::InvalidArgument("tree id must be positive".into()));
        }
        if species.is_empty() {
            return Err(Error::InvalidArgument("species name must be non-empty".into()));
        }
        if zip > 99999 {
            return Err(Error::InvalidArgument(format!("zip code {} is out of range", zip)));
        }
        Ok(Self {
            id,
            diameter,
            status,
            health,
            species: species.to_owned(),
            zip,
            borough,
            x,
            y,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn health(&self) -> Option<Health> {
        self.health
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn zip(&self) -> u32 {
        self.zip
    }

    pub fn borough(&self) -> Borough {
        self.borough
    }

    pub fn location(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /**
     * Case-insensitive species-name comparison against another record,
     * ignoring ids.
     */
    pub fn same_species_as(&self, other: &TreeRecord) -> bool {
        self.species.eq_ignore_ascii_case(&other.species)
    }

    /**
     * Case-insensitive species-name comparison against a bare name.
     */
    pub fn has_species(&self, name: &str) -> bool {
        self.species.eq_ignore_ascii_case(name)
    }
}




/**
 * Case-insensitive lexicographic comparison of species names.
 */
fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}




// ============================================================================
impl Ord for TreeRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_names(&self.species, &other.species).then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for TreeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TreeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TreeRecord {}
