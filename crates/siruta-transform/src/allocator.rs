use siruta_ingest::IdRegistry;

/// Assigns stable surrogate identifiers.
///
/// Lookup order: registry code first, then business code, then a freshly
/// minted id. The mint counter is seeded past the largest id in the prior
/// export, so new ids never collide with reused ones even when the prior
/// export has gaps.
#[derive(Debug)]
pub struct IdAllocator {
    registry: IdRegistry,
    next_id: u32,
    reused: usize,
    minted: usize,
}

impl IdAllocator {
    pub fn new(registry: IdRegistry) -> Self {
        let next_id = registry.max_id() + 1;
        Self {
            registry,
            next_id,
            reused: 0,
            minted: 0,
        }
    }

    /// Resolve the identifier for an entity.
    ///
    /// The registry code is consulted before the business code: registry
    /// codes are the authoritative statistical identifier, business codes
    /// can in principle be reassigned upstream.
    pub fn allocate(&mut self, code: &str, registry_code: Option<&str>) -> u32 {
        if let Some(registry_code) = registry_code
            && let Some(id) = self.registry.registry_code_ids.get(registry_code)
        {
            self.reused += 1;
            return *id;
        }
        if let Some(id) = self.registry.code_ids.get(code) {
            self.reused += 1;
            return *id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.minted += 1;
        id
    }

    /// Number of identifiers carried over from the prior export.
    pub fn reused(&self) -> usize {
        self.reused
    }

    /// Number of identifiers minted this run.
    pub fn minted(&self) -> usize {
        self.minted
    }
}
