pub mod evidence;
pub mod location;
pub mod places;

pub use evidence::{EvidenceCounts, EvidenceRecord, EvidenceStore, InMemoryEvidenceStore};
pub use location::{Coordinates, LocationProvider};
pub use places::{PlacesProvider, PlacesQuery, Venue};
