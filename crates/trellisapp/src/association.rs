//! # Associations: Lazy, Cached Related Collections
//!
//! Related collections (a member's boards, cards, organizations, ...) are
//! fetched on first access from `/<owner path>/<owner key>/<relation>` and
//! cached on the owning resource for its lifetime.
//!
//! ## Options and Cache Keys
//!
//! [`AssociationOptions`] has one recognized key, `filter`. It is
//! normalized against the relation's declaration before anything else:
//! an absent filter becomes the relation's default, an illegal value is a
//! configuration error. The cache key is (owner key, relation, normalized
//! filter), so
//!
//! - a second call with the same options is served from the cache,
//! - a call with a different filter triggers an independent fetch,
//! - `filter(None)` and `filter(default)` share one entry,
//! - a resource re-baselined onto another owner key fetches afresh.
//!
//! There is no invalidation. The cache dies with the owning resource.

use std::collections::HashMap;
use std::ops::Deref;

use log::debug;

use crate::attributes::{registry, RelationSpec, ResourceKind, ResourceSpec};
use crate::client::Client;
use crate::error::{Result, TrellisError};
use crate::resource::Resource;
use crate::resources::ResourceType;

/// Options for fetching a related collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationOptions {
    pub filter: Option<String>,
}

impl AssociationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Resolve the filter to use for `relation`.
    ///
    /// Returns the relation's default when no filter was given, and `None`
    /// for relations that take no filter.
    pub fn resolve(&self, owner: ResourceKind, relation: &RelationSpec) -> Result<Option<&'static str>> {
        match self.filter.as_deref() {
            None => Ok(relation.default_filter),
            Some(filter) if !relation.accepts_filter() => Err(TrellisError::configuration(
                format!("`{owner}.{}` takes no filter, got `{filter}`", relation.name),
            )),
            Some(filter) => relation
                .filters
                .iter()
                .copied()
                .find(|legal| *legal == filter)
                .map(Some)
                .ok_or_else(|| {
                    TrellisError::configuration(format!(
                        "`{filter}` is not a valid filter for `{owner}.{}` (expected one of: {})",
                        relation.name,
                        relation.filters.join(", ")
                    ))
                }),
        }
    }
}

/// One fetched related collection, in server order.
#[derive(Debug, Clone)]
pub struct AssociationProxy {
    owner: ResourceKind,
    owner_key: String,
    relation: &'static RelationSpec,
    filter: Option<&'static str>,
    items: Vec<Resource>,
}

impl AssociationProxy {
    pub fn owner(&self) -> ResourceKind {
        self.owner
    }

    pub fn owner_key(&self) -> &str {
        &self.owner_key
    }

    pub fn relation(&self) -> &'static RelationSpec {
        self.relation
    }

    /// The normalized filter the collection was fetched with.
    pub fn filter(&self) -> Option<&'static str> {
        self.filter
    }

    pub fn items(&self) -> &[Resource] {
        &self.items
    }

    /// Copies of the items as their typed wrapper.
    ///
    /// Fails when `T` is not the relation's target type.
    pub fn typed<T: ResourceType>(&self) -> Result<Vec<T>> {
        if T::SPEC.kind != self.relation.target {
            return Err(TrellisError::configuration(format!(
                "`{}.{}` holds {}s, not {}s",
                self.owner, self.relation.name, self.relation.target, T::SPEC.kind
            )));
        }
        Ok(self.items.iter().cloned().map(T::from_resource).collect())
    }
}

impl Deref for AssociationProxy {
    type Target = [Resource];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Per-resource cache of fetched collections.
#[derive(Debug, Clone, Default)]
pub(crate) struct Associations {
    cache: HashMap<CacheKey, AssociationProxy>,
}

type CacheKey = (String, &'static str, Option<&'static str>);

impl Associations {
    pub(crate) fn fetch<C: Client + ?Sized>(
        &mut self,
        client: &C,
        owner: &'static ResourceSpec,
        owner_key: Option<&str>,
        relation: &str,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        let rel = owner.relation(relation).ok_or_else(|| {
            TrellisError::configuration(format!(
                "`{relation}` is not a relation of `{}`",
                owner.kind
            ))
        })?;
        let filter = options.resolve(owner.kind, rel)?;
        let owner_key = owner_key.ok_or_else(|| {
            TrellisError::configuration(format!(
                "{} has no `{}`; fetch it before reading `{}`",
                owner.kind, owner.natural_key, rel.name
            ))
        })?;
        let cache_key = (owner_key.to_string(), rel.name, filter);

        if !self.cache.contains_key(&cache_key) {
            let target = registry().spec(rel.target)?;
            let path = format!("/{}/{}/{}", owner.path, owner_key, rel.name);
            let query: Vec<(&str, &str)> = filter.map(|f| ("filter", f)).into_iter().collect();

            debug!("event=fetch relation={} path={path} filter={filter:?}", rel.name);
            let payload = client.get(&path, &query)?;
            let items = Resource::list_from_json(target, &payload)?;

            self.cache.insert(
                cache_key.clone(),
                AssociationProxy {
                    owner: owner.kind,
                    owner_key: owner_key.to_string(),
                    relation: rel,
                    filter,
                    items,
                },
            );
        } else {
            debug!("event=fetch relation={} status=cached filter={filter:?}", rel.name);
        }

        Ok(&self.cache[&cache_key])
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}
