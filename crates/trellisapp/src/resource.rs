//! # Resources: Field Protection and Change Tracking
//!
//! A [`Resource`] is the local image of one remote entity. It stores its
//! attributes as a tagged table (value, read-only flag via the `ResourceSpec`, dirty
//! flag) so the read-only guard is one check shared by every resource type.
//!
//! ## Lifecycle
//!
//! ```text
//! Unbound ──update_fields──▶ Bound ──set──▶ Dirty
//!                              ▲              │
//!                              └─────save─────┘
//! ```
//!
//! - **Unbound**: constructed, no identifier.
//! - **Bound**: identifier present, attributes populated from the server.
//! - **Dirty**: one or more writable attributes assigned locally since the
//!   last sync.
//!
//! ## Writes
//!
//! - [`Resource::set`] is the user path: it refuses read-only attributes and
//!   marks the attribute dirty.
//! - [`Resource::update_fields`] is the server path: it maps the payload
//!   through the `ResourceSpec` key table, bypasses the read-only guard and never
//!   marks anything dirty. Applying the same payload twice is a no-op.
//!
//! ## Partial Update
//!
//! [`Resource::save`] on a persisted resource sends exactly the `ResourceSpec`'s
//! `update_params` (for members: display name and bio), whatever else is
//! dirty. That mirrors the remote update endpoint, which accepts only those
//! fields; other dirty attributes are not transmitted.
//!
//! Every rejected operation leaves values and the changed set as they were.

use log::{debug, warn};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::association::{AssociationOptions, AssociationProxy, Associations};
use crate::attributes::{undeclared, AttrValue, AttributeSpec, ResourceKind, ResourceSpec};
use crate::client::Client;
use crate::error::{Result, TrellisError};
use crate::validation::{self, Violations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Unbound,
    Bound,
    Dirty,
}

/// What [`Resource::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The partial update was sent and the response applied.
    Updated,
    /// No identifier yet; nothing was sent.
    NotPersisted,
}

#[derive(Debug, Clone)]
struct Slot {
    spec: &'static AttributeSpec,
    value: AttrValue,
    dirty: bool,
}

#[derive(Debug, Clone)]
pub struct Resource {
    spec: &'static ResourceSpec,
    slots: Vec<Slot>,
    previously_changed: Vec<&'static str>,
    associations: Associations,
}

impl Resource {
    /// A new, unbound resource with every attribute unset.
    pub fn new(spec: &'static ResourceSpec) -> Self {
        Self {
            spec,
            slots: spec
                .attributes
                .iter()
                .map(|attr| Slot {
                    spec: attr,
                    value: AttrValue::Null,
                    dirty: false,
                })
                .collect(),
            previously_changed: Vec::new(),
            associations: Associations::default(),
        }
    }

    /// Deserialize one JSON object into a new bound resource.
    pub fn from_json(spec: &'static ResourceSpec, payload: &Value) -> Result<Self> {
        let mut resource = Self::new(spec);
        resource.update_fields(payload)?;
        Ok(resource)
    }

    /// Deserialize each element of a JSON array, keeping order.
    ///
    /// A lone object yields a one-element list.
    pub fn list_from_json(spec: &'static ResourceSpec, payload: &Value) -> Result<Vec<Self>> {
        match payload {
            Value::Array(items) => items.iter().map(|item| Self::from_json(spec, item)).collect(),
            Value::Object(_) => Ok(vec![Self::from_json(spec, payload)?]),
            other => Err(TrellisError::Payload(format!(
                "expected a list of {}s, got {}",
                spec.kind,
                json_type(other)
            ))),
        }
    }

    /// Fetch a single resource by opaque identifier or natural key.
    ///
    /// Both are accepted; the service tells them apart.
    pub fn find<C: Client + ?Sized>(
        client: &C,
        spec: &'static ResourceSpec,
        id_or_key: &str,
    ) -> Result<Self> {
        debug!("event=find kind={} key={id_or_key}", spec.kind);
        let payload = client.get(&format!("/{}/{}", spec.path, id_or_key), &[])?;
        Self::from_json(spec, &payload)
    }

    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    pub fn kind(&self) -> ResourceKind {
        self.spec.kind
    }

    /// Attribute specs paired with their current values, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static AttributeSpec, &AttrValue)> + '_ {
        self.slots.iter().map(|slot| (slot.spec, &slot.value))
    }

    pub fn get(&self, name: &str) -> Result<&AttrValue> {
        self.slot(name).map(|slot| &slot.value)
    }

    /// Text value of `name`; `None` when unset, not text, or undeclared.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).ok().and_then(AttrValue::as_text)
    }

    /// Assign a writable attribute and mark it changed.
    ///
    /// # Errors
    ///
    /// - `ReadOnlyAttribute` when the attribute is read-only.
    /// - `Configuration` when the name is undeclared or the value does not
    ///   fit the attribute's kind.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<()> {
        let value = value.into();
        let kind = self.spec.kind;
        let slot = self.slot_mut(name)?;

        if slot.spec.read_only {
            return Err(TrellisError::ReadOnlyAttribute {
                resource: kind.name(),
                attribute: name.to_string(),
            });
        }
        if !value.fits(slot.spec.kind) {
            return Err(TrellisError::configuration(format!(
                "{value:?} is not a valid value for `{kind}.{name}` ({:?})",
                slot.spec.kind
            )));
        }

        slot.value = value;
        slot.dirty = true;
        Ok(())
    }

    /// Apply a server payload.
    ///
    /// Each declared attribute is read from its remote key. Missing keys
    /// become `Null`; values of the wrong JSON type become `Null` and are
    /// logged. Read-only attributes are written too, and nothing is marked
    /// changed.
    pub fn update_fields(&mut self, payload: &Value) -> Result<&mut Self> {
        let fields = payload.as_object().ok_or_else(|| {
            TrellisError::Payload(format!(
                "expected a {} object, got {}",
                self.spec.kind,
                json_type(payload)
            ))
        })?;

        let kind = self.spec.kind;
        for slot in &mut self.slots {
            let attr = slot.spec;
            let raw = fields.get(attr.remote_key).unwrap_or(&Value::Null);
            slot.value = AttrValue::from_json(attr.kind, raw).unwrap_or_else(|| {
                warn!(
                    "event=field_mismatch kind={kind} attribute={} remote_key={} got={}",
                    attr.name,
                    attr.remote_key,
                    json_type(raw)
                );
                AttrValue::Null
            });
        }
        Ok(self)
    }

    /// Names of attributes changed since the last sync, in declaration order.
    pub fn changed(&self) -> Vec<&'static str> {
        self.slots
            .iter()
            .filter(|slot| slot.dirty)
            .map(|slot| slot.spec.name)
            .collect()
    }

    /// The changed set captured by the last successful [`save`](Self::save).
    pub fn previously_changed(&self) -> &[&'static str] {
        &self.previously_changed
    }

    pub fn is_dirty(&self) -> bool {
        self.slots.iter().any(|slot| slot.dirty)
    }

    pub fn id(&self) -> Option<&str> {
        non_blank(self.text(self.spec.identifier))
    }

    /// Persisted iff the identifier is non-empty.
    pub fn is_persisted(&self) -> bool {
        self.id().is_some()
    }

    pub fn natural_key(&self) -> Option<&str> {
        non_blank(self.text(self.spec.natural_key))
    }

    pub fn state(&self) -> ResourceState {
        if self.is_dirty() {
            ResourceState::Dirty
        } else if self.is_persisted() {
            ResourceState::Bound
        } else {
            ResourceState::Unbound
        }
    }

    /// `/<path>/<natural key>`, the address used for updates and relations.
    pub fn request_prefix(&self) -> Result<String> {
        let key = self.natural_key().ok_or_else(|| {
            TrellisError::configuration(format!(
                "{} has no `{}` to address it by",
                self.spec.kind, self.spec.natural_key
            ))
        })?;
        Ok(format!("/{}/{}", self.spec.path, key))
    }

    pub fn validate(&self) -> Violations {
        validation::validate(self)
    }

    /// Body of a partial update: the declared `update_params`.
    pub fn update_payload(&self) -> Value {
        let mut body = Map::new();
        for param in self.spec.update_params {
            let value = self
                .get(param.attribute)
                .map(AttrValue::to_json)
                .unwrap_or(Value::Null);
            body.insert(param.param.to_string(), value);
        }
        Value::Object(body)
    }

    /// Sync local changes with the service.
    ///
    /// Without an identifier nothing is sent: the changed set is captured
    /// into `previously_changed`, cleared, and `NotPersisted` returned.
    ///
    /// With one, enforced validation runs first, then the partial update is
    /// sent and its response applied through `update_fields`. Only after
    /// the request succeeds is the changed set captured and cleared.
    ///
    /// # Errors
    ///
    /// - `Validation` when a required or transmitted attribute is invalid.
    ///   No request is sent.
    /// - `Transport` as returned by the client. State is unchanged.
    pub fn save<C: Client + ?Sized>(&mut self, client: &C) -> Result<SaveOutcome> {
        if !self.is_persisted() {
            debug!("event=save kind={} status=skipped reason=unpersisted", self.spec.kind);
            self.commit_changes();
            return Ok(SaveOutcome::NotPersisted);
        }

        let (enforced, advisory) = validation::validate_for_save(self);
        if !enforced.is_empty() {
            return Err(TrellisError::Validation(enforced));
        }
        if !advisory.is_empty() {
            warn!(
                "event=save kind={} status=advisory violations=\"{advisory}\"",
                self.spec.kind
            );
        }

        let path = self.request_prefix()?;
        let response = client.put(&path, &self.update_payload())?;

        // Parse into a scratch copy so a malformed response leaves us intact.
        let mut synced = self.clone();
        synced.update_fields(&response)?;
        synced.commit_changes();
        *self = synced;

        debug!(
            "event=save kind={} path={path} status=ok changed={:?}",
            self.spec.kind, self.previously_changed
        );
        Ok(SaveOutcome::Updated)
    }

    /// Fetch (or return the cached) related collection `relation`.
    ///
    /// # Errors
    ///
    /// - `Configuration` for an unknown relation or an illegal filter, or
    ///   when the resource has no natural key yet. No request is sent.
    /// - `Transport` as returned by the client.
    pub fn association<C: Client + ?Sized>(
        &mut self,
        client: &C,
        relation: &str,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        let key = self.natural_key().map(str::to_string);
        self.associations
            .fetch(client, self.spec, key.as_deref(), relation, options)
    }

    fn commit_changes(&mut self) {
        self.previously_changed = self.changed();
        for slot in &mut self.slots {
            slot.dirty = false;
        }
    }

    fn slot(&self, name: &str) -> Result<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.spec.name == name)
            .ok_or_else(|| undeclared(self.spec.kind, name))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Slot> {
        let kind = self.spec.kind;
        self.slots
            .iter_mut()
            .find(|slot| slot.spec.name == name)
            .ok_or_else(|| undeclared(kind, name))
    }
}

/// Serializes as a map of local attribute names to values.
impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for slot in &self.slots {
            map.serialize_entry(slot.spec.name, &slot.value)?;
        }
        map.end()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
