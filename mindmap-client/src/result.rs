use crate::error::FetchError;
use mindmap_core::MapResult;

/// A map plus where it came from.
///
/// Callers that don't care use [`FetchOutcome::into_map`] and get the same
/// value either way.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Decoded from the workflow service response
    Live(MapResult),
    /// Generated locally because the live call failed
    Fallback { map: MapResult, reason: FetchError },
}

impl FetchOutcome {
    pub fn map(&self) -> &MapResult {
        match self {
            FetchOutcome::Live(map) => map,
            FetchOutcome::Fallback { map, .. } => map,
        }
    }

    pub fn into_map(self) -> MapResult {
        match self {
            FetchOutcome::Live(map) => map,
            FetchOutcome::Fallback { map, .. } => map,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Live(_) => None,
            FetchOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}
