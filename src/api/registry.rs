//! Lazily built, per-client cache of method blocks.
//!
//! Blocks are keyed by [`BlockKind`] and constructed from a table of plain
//! constructor functions filled in at registry creation. The first `get`
//! for a kind builds the block under the write lock, so concurrent callers
//! racing on the same kind all observe the single instance that won.

use log::debug;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::blocks;
use super::client::BlockContext;
use super::BlockKind;
use crate::error::{Result, WgApiError};

type AnyBlock = Arc<dyn Any + Send + Sync>;

/// Builds one method block from the shared context
pub type Constructor = fn(Arc<BlockContext>) -> AnyBlock;

/// A typed group of API methods bound to one [`BlockKind`]
pub trait MethodBlock: Any + Send + Sync {
    const KIND: BlockKind;

    fn new(context: Arc<BlockContext>) -> Self
    where
        Self: Sized;
}

/// Type-erased constructor for any [`MethodBlock`]
pub fn constructor<B: MethodBlock>() -> Constructor {
    fn construct<B: MethodBlock>(context: Arc<BlockContext>) -> AnyBlock {
        Arc::new(B::new(context))
    }
    construct::<B>
}

pub struct MethodBlockRegistry {
    context: Arc<BlockContext>,
    constructors: HashMap<BlockKind, Constructor>,
    blocks: RwLock<HashMap<BlockKind, AnyBlock>>,
}

impl fmt::Debug for MethodBlockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<BlockKind> = self
            .blocks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        f.debug_struct("MethodBlockRegistry")
            .field("registered", &self.constructors.len())
            .field("built", &built)
            .finish()
    }
}

impl MethodBlockRegistry {
    /// Registry with every block this crate ships
    pub fn new(context: Arc<BlockContext>) -> Self {
        let mut registry = Self::empty(context);
        registry.register(BlockKind::Accounts, constructor::<blocks::Accounts>());
        registry.register(BlockKind::Servers, constructor::<blocks::Servers>());
        registry.register(BlockKind::Clans, constructor::<blocks::Clans>());
        registry.register(
            BlockKind::Authentication,
            constructor::<blocks::Authentication>(),
        );
        registry.register(BlockKind::ClanRatings, constructor::<blocks::ClanRatings>());
        registry.register(BlockKind::Stronghold, constructor::<blocks::Stronghold>());
        registry.register(BlockKind::TankAccounts, constructor::<blocks::TankAccounts>());
        registry.register(BlockKind::Encyclopedia, constructor::<blocks::Encyclopedia>());
        registry.register(BlockKind::ShipAccounts, constructor::<blocks::ShipAccounts>());
        registry.register(BlockKind::BlitzAccounts, constructor::<blocks::BlitzAccounts>());
        registry.register(
            BlockKind::ConsoleAccounts,
            constructor::<blocks::ConsoleAccounts>(),
        );
        registry
    }

    /// Registry without constructors; fill it with [`MethodBlockRegistry::register`]
    pub fn empty(context: Arc<BlockContext>) -> Self {
        Self {
            context,
            constructors: HashMap::new(),
            blocks: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(&mut self, kind: BlockKind, constructor: Constructor) {
        self.constructors.insert(kind, constructor);
    }

    pub fn is_registered(&self, kind: BlockKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    pub fn context(&self) -> Arc<BlockContext> {
        Arc::clone(&self.context)
    }

    /// Get the block for `kind`, constructing it on first use
    pub fn get_by_kind(&self, kind: BlockKind) -> Result<AnyBlock> {
        // Try to get existing block
        {
            let blocks = self.blocks.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(block) = blocks.get(&kind) {
                return Ok(Arc::clone(block));
            }
        }

        let constructor = self.constructors.get(&kind).ok_or_else(|| {
            WgApiError::configuration(format!("No method block registered for '{kind}'"))
        })?;

        let mut blocks = self.blocks.write().unwrap_or_else(PoisonError::into_inner);
        // Double-check in case another thread created it
        if let Some(block) = blocks.get(&kind) {
            return Ok(Arc::clone(block));
        }

        debug!("Constructing method block '{}'", kind);
        let block = constructor(Arc::clone(&self.context));
        blocks.insert(kind, Arc::clone(&block));
        Ok(block)
    }

    /// Typed variant of [`MethodBlockRegistry::get_by_kind`]
    pub fn get<B: MethodBlock>(&self) -> Result<Arc<B>> {
        self.get_by_kind(B::KIND)?.downcast::<B>().map_err(|_| {
            WgApiError::configuration(format!(
                "Method block registered for '{}' is not a {}",
                B::KIND,
                std::any::type_name::<B>()
            ))
        })
    }

    /// Number of blocks built so far
    pub fn len(&self) -> usize {
        self.blocks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::blocks::{Accounts, ClanRatings, Servers};
    use crate::api::http_client::{Transport, TransportResponse};
    use crate::api::region::Region;
    use crate::api::request::{ApiRequest, RequestUriBuilder};
    use crate::error::TransportError;
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn send(
            &self,
            _request: &ApiRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            Ok(TransportResponse {
                status: 200,
                body: br#"{"status":"ok","data":null}"#.to_vec(),
            })
        }
    }

    fn context() -> Arc<BlockContext> {
        let template = RequestUriBuilder::new()
            .with_region(Region::Ru)
            .with_application_id("demo");
        Arc::new(BlockContext::new(template, Arc::new(NoopTransport)))
    }

    #[test]
    fn test_same_kind_returns_cached_instance() {
        let registry = MethodBlockRegistry::new(context());
        assert!(registry.is_empty());

        let first = registry.get::<Accounts>().unwrap();
        let second = registry.get::<Accounts>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_different_kinds_are_distinct() {
        let registry = MethodBlockRegistry::new(context());
        let accounts = registry.get_by_kind(BlockKind::Accounts).unwrap();
        let servers = registry.get_by_kind(BlockKind::Servers).unwrap();
        assert!(!Arc::ptr_eq(&accounts, &servers));
        assert!(servers.downcast::<Servers>().is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unregistered_kind_is_configuration_error() {
        let mut registry = MethodBlockRegistry::empty(context());
        assert!(matches!(
            registry.get::<Accounts>(),
            Err(WgApiError::Configuration(_))
        ));

        registry.register(BlockKind::Accounts, constructor::<Accounts>());
        assert!(registry.get::<Accounts>().is_ok());
    }

    #[test]
    fn test_mismatched_constructor_is_configuration_error() {
        let mut registry = MethodBlockRegistry::empty(context());
        registry.register(BlockKind::Accounts, constructor::<ClanRatings>());
        assert!(matches!(
            registry.get::<Accounts>(),
            Err(WgApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_every_kind_is_registered_by_default() {
        let registry = MethodBlockRegistry::new(context());
        for kind in BlockKind::ALL {
            assert!(registry.is_registered(kind), "{kind} is not registered");
            assert!(registry.get_by_kind(kind).is_ok());
        }
    }

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let registry = Arc::new(MethodBlockRegistry::new(context()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get::<ClanRatings>().unwrap())
            })
            .collect();

        let blocks: Vec<Arc<ClanRatings>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for block in &blocks[1..] {
            assert!(Arc::ptr_eq(&blocks[0], block));
        }
        assert_eq!(registry.len(), 1);
    }
}
