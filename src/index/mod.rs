//! Read-name index used to detect duplicates and match mates.
//!
//! [`HashIndex`](hash_index::HashIndex) is an open hash table with a fixed
//! bucket count chosen at construction. It maps a read name to the byte
//! offset of its record in file 1:
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert`  | O(chain) | rejects names already present |
//! | `lookup`  | O(chain) | full-name comparison after the digest |
//! | `remove`  | O(1) | needs a handle from `lookup` |
//!
//! ## Example
//!
//! ```rust
//! use fastq_validator::index::hash_index::HashIndex;
//!
//! let mut index = HashIndex::new(1009);
//! index.insert(b"read1", 0).unwrap();
//! assert!(index.insert(b"read1", 64).is_err());
//!
//! let handle = index.lookup(b"read1").unwrap();
//! let entry = index.remove(handle);
//! assert_eq!(entry.file_offset, 0);
//! assert!(index.is_empty());
//! ```

pub mod hash_index;
