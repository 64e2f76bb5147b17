use thiserror::Error;

/// Sentinel slot index terminating a collision chain
const NIL: u32 = u32::MAX;

/// Errors raised by [`HashIndex::insert`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("duplicate read name {name}")]
    DuplicateKey { name: String },

    #[error("index cannot hold more than {capacity} entries")]
    CapacityExceeded { capacity: usize },
}

/// String digest used to pick a bucket.
///
/// The sdbm recurrence `hash = c + (hash << 6) + (hash << 16) - hash`, i.e.
/// `hash * 65599 + c`, with 64-bit wraparound.
///
/// # Examples
///
/// ```
/// use fastq_validator::index::hash_index::digest;
///
/// assert_eq!(digest(b""), 0);
/// assert_eq!(digest(b"A"), 65);
/// assert_eq!(digest(b"AB"), 65 * 65599 + 66);
/// ```
#[must_use]
#[inline]
pub fn digest(name: &[u8]) -> u64 {
    name.iter().fold(0u64, |hash, &c| {
        u64::from(c)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}

/// A read waiting for its mate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    /// Canonical read name
    pub name: Box<[u8]>,

    /// Byte offset of the record's header line in the indexed file
    pub file_offset: u64,
}

impl IndexEntry {
    /// Read name as text, lossy for non-UTF-8 bytes
    #[must_use]
    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }
}

/// Position of a live entry, returned by [`HashIndex::lookup`].
///
/// Valid until the next mutation of the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHandle {
    bucket: usize,
    slot: u32,
    prev: u32,
}

#[derive(Debug)]
struct Slot {
    entry: IndexEntry,
    next: u32,
}

/// Open hash table of read names with a fixed number of buckets.
///
/// Each bucket heads a singly linked collision chain threaded through a slot
/// arena by `u32` indices. Freed slots are recycled through a free list, so
/// the arena never grows past the peak number of live entries.
///
/// Names are compared in full on every probe; the digest only selects the
/// chain.
#[derive(Debug)]
pub struct HashIndex {
    heads: Vec<u32>,
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
    name_bytes: usize,
}

impl HashIndex {
    /// Create an empty index with `bucket_count` chains (at least one)
    #[must_use]
    pub fn new(bucket_count: usize) -> Self {
        Self {
            heads: vec![NIL; bucket_count.max(1)],
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            name_bytes: 0,
        }
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[allow(clippy::cast_possible_truncation)] // Remainder is below bucket_count
    fn bucket_of(&self, name: &[u8]) -> usize {
        (digest(name) % self.heads.len() as u64) as usize
    }

    /// Walk the chain for `name`, returning the match and its predecessor
    fn find(&self, bucket: usize, name: &[u8]) -> Option<EntryHandle> {
        let mut prev = NIL;
        let mut cur = self.heads[bucket];
        while cur != NIL {
            let slot = &self.slots[cur as usize];
            if *slot.entry.name == *name {
                return Some(EntryHandle {
                    bucket,
                    slot: cur,
                    prev,
                });
            }
            prev = cur;
            cur = slot.next;
        }
        None
    }

    /// Insert a read name with the offset of its record.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::DuplicateKey` if `name` is already present, or
    /// `IndexError::CapacityExceeded` if the slot arena is exhausted.
    pub fn insert(&mut self, name: &[u8], file_offset: u64) -> Result<(), IndexError> {
        let bucket = self.bucket_of(name);

        // One walk both rejects duplicates and finds the tail to append to
        let mut tail = None;
        let mut cur = self.heads[bucket];
        while cur != NIL {
            let slot = &self.slots[cur as usize];
            if *slot.entry.name == *name {
                return Err(IndexError::DuplicateKey {
                    name: String::from_utf8_lossy(name).into_owned(),
                });
            }
            tail = Some(cur);
            cur = slot.next;
        }

        let entry = IndexEntry {
            name: name.into(),
            file_offset,
        };

        // Appending keeps chains in insertion order; lookups stay first-match.
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Slot { entry, next: NIL };
                slot
            }
            None => {
                let slot = u32::try_from(self.slots.len())
                    .ok()
                    .filter(|&s| s != NIL)
                    .ok_or(IndexError::CapacityExceeded {
                        capacity: NIL as usize,
                    })?;
                self.slots.push(Slot { entry, next: NIL });
                slot
            }
        };

        match tail {
            Some(tail) => self.slots[tail as usize].next = slot,
            None => self.heads[bucket] = slot,
        }

        self.len += 1;
        self.name_bytes += name.len();
        Ok(())
    }

    /// Find the live entry named exactly `name`
    #[must_use]
    pub fn lookup(&self, name: &[u8]) -> Option<EntryHandle> {
        self.find(self.bucket_of(name), name)
    }

    /// Entry behind a handle obtained from [`lookup`](Self::lookup)
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, handle: EntryHandle) -> &IndexEntry {
        &self.slots[handle.slot as usize].entry
    }

    /// Unlink the entry behind `handle` and hand it back.
    ///
    /// `handle` must come from [`lookup`](Self::lookup) on this index with no
    /// mutation in between.
    pub fn remove(&mut self, handle: EntryHandle) -> IndexEntry {
        let EntryHandle { bucket, slot, prev } = handle;
        let next = self.slots[slot as usize].next;
        if prev == NIL {
            self.heads[bucket] = next;
        } else {
            self.slots[prev as usize].next = next;
        }

        let entry = std::mem::take(&mut self.slots[slot as usize].entry);
        self.slots[slot as usize].next = NIL;
        self.free.push(slot);

        self.len -= 1;
        self.name_bytes -= entry.name.len();
        entry
    }

    /// Iterate live entries in bucket order
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> + '_ {
        self.heads.iter().flat_map(move |&head| {
            std::iter::successors((head != NIL).then_some(head), move |&cur| {
                let next = self.slots[cur as usize].next;
                (next != NIL).then_some(next)
            })
            .map(move |cur| &self.slots[cur as usize].entry)
        })
    }

    /// Approximate bytes held by the index
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.heads.capacity() * std::mem::size_of::<u32>()
            + self.slots.capacity() * std::mem::size_of::<Slot>()
            + self.free.capacity() * std::mem::size_of::<u32>()
            + self.name_bytes
    }
}
