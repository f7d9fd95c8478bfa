//! Identity-unique ordered collection for one contact category.
//!
//! # Responsibility
//! - Keep insertion order while rejecting same-identity duplicates.
//! - Expose read-only views; all structural changes go through this API.
//!
//! # Invariants
//! - No two stored entities satisfy `Entity::is_same_identity`.
//! - `add`/`set_entity`/`replace_all` check identity; `remove` and update
//!   targets are located by full equality.
//! - A failed operation leaves the list unchanged.

use crate::model::contact::{Entity, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Mutation rejected by a unique list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation would store two same-identity entities.
    Duplicate(EntityKind),
    /// No stored entity is fully equal to the given target.
    NotFound(EntityKind),
}

impl ListError {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Duplicate(kind) | Self::NotFound(kind) => *kind,
        }
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => write!(f, "duplicate {kind}: this {kind} already exists"),
            Self::NotFound(kind) => write!(f, "{kind} not found"),
        }
    }
}

impl Error for ListError {}

/// Ordered list of one entity category with identity uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueEntityList<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for UniqueEntityList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueEntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any stored entity has the same identity as `candidate`.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items
            .iter()
            .any(|item| item.is_same_identity(candidate))
    }

    /// Appends `entity`.
    ///
    /// # Errors
    /// - `ListError::Duplicate` when a same-identity entity is already stored.
    pub fn add(&mut self, entity: T) -> ListResult<()> {
        if self.contains(&entity) {
            return Err(ListError::Duplicate(T::KIND));
        }
        self.items.push(entity);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    /// - `ListError::NotFound` when no stored entity equals `target`.
    /// - `ListError::Duplicate` when `edited` shares identity with an entity
    ///   other than `target`.
    pub fn set_entity(&mut self, target: &T, edited: T) -> ListResult<()> {
        let index = self
            .position(target)
            .ok_or(ListError::NotFound(T::KIND))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.is_same_identity(&edited));
        if collides {
            return Err(ListError::Duplicate(T::KIND));
        }

        self.items[index] = edited;
        Ok(())
    }

    /// Removes and returns the first entity fully equal to `target`.
    ///
    /// # Errors
    /// - `ListError::NotFound` when only same-identity (or no) matches exist.
    pub fn remove(&mut self, target: &T) -> ListResult<T> {
        let index = self
            .position(target)
            .ok_or(ListError::NotFound(T::KIND))?;
        Ok(self.items.remove(index))
    }

    /// Replaces all entries with `entities`, keeping their order.
    ///
    /// # Errors
    /// - `ListError::Duplicate` when `entities` collide among themselves; the
    ///   current contents are kept in that case.
    pub fn replace_all(&mut self, entities: Vec<T>) -> ListResult<()> {
        if !all_unique(&entities) {
            return Err(ListError::Duplicate(T::KIND));
        }
        self.items = entities;
        Ok(())
    }

    /// Adopts the contents of another list, which already holds the invariant.
    pub fn replace_with(&mut self, other: &UniqueEntityList<T>) {
        self.items.clone_from(&other.items);
    }

    /// Read-only view in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|item| item == target)
    }
}

impl<'a, T: Entity> IntoIterator for &'a UniqueEntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn all_unique<T: Entity>(entities: &[T]) -> bool {
    entities.iter().enumerate().all(|(i, left)| {
        entities[i + 1..]
            .iter()
            .all(|right| !left.is_same_identity(right))
    })
}
