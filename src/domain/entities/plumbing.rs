//! Plumbing fixture entities
//!
//! Fixture counts per population and the restroom layout they imply.

use serde::Serialize;

/// Fixtures placed in one restroom of one sex within a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RestroomLayout {
    pub accessible_stalls: u64,
    pub standard_stalls: u64,
    pub urinals: u64,
    pub lavatories: u64,
}

/// Per-cluster layout for both sexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClusterLayout {
    pub male: RestroomLayout,
    pub female: RestroomLayout,
}

/// Required fixtures for one population (students or staff)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlumbingFixtureSet {
    pub wc_male: u64,
    pub wc_female: u64,
    pub lav_male: u64,
    pub lav_female: u64,
    pub clusters: u64,
    pub layout: ClusterLayout,
    /// Restroom floor area across all clusters
    pub sf: u64,
}

/// Plumbing results for the whole building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlumbingDetail {
    pub student: PlumbingFixtureSet,
    pub staff: PlumbingFixtureSet,
    pub drinking_fountains: u64,
    pub total_sf: u64,
    /// Copied from the edition profile
    pub gender_neutral: bool,
}
