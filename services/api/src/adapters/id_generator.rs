//! services/api/src/adapters/id_generator.rs
//!
//! Random identifiers for new submissions.

use receipt_processor_core::ports::IdGenerator;
use uuid::Uuid;

/// Issues random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_v4_and_unique() {
        let generator = UuidV4Generator;
        let ids: HashSet<Uuid> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.get_version_num() == 4));
    }
}
