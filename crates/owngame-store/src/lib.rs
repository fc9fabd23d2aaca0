//! In-memory keyed store for Owngame.
//!
//! This crate is the bottom layer of the room system. It knows nothing
//! about rooms or players. It only maps string keys to values of one
//! concrete type and offers three primitives:
//!
//! - [`KeyedStore::put`]: insert only if the key is absent
//! - [`KeyedStore::get`]: snapshot read
//! - [`KeyedStore::alter`]: atomic read-modify-write through a
//!   transition function
//!
//! # How it fits in the stack
//!
//! ```text
//! RoomService (above)        ← create / check password / join
//!     ↕
//! Registries (above)         ← RoomRegistry, MembershipRegistry
//!     ↕
//! KeyedStore (this crate)    ← put / get / alter, per-key atomicity
//! ```
//!
//! The store is volatile: it lives as long as the process and is never
//! persisted.

mod store;

pub use store::KeyedStore;
