use crate::{
    error::StoreError,
    prime::bucket_count_for,
    record::{crn_hash, CourseRecord},
};

type Chain = Vec<CourseRecord>;

/// Estimated course count used by [`CourseStore::default`].
pub const DEFAULT_ESTIMATED_COURSES: usize = 500;

/// Largest accepted estimate. CRNs are `i32`, so no real catalog is bigger.
pub const MAX_ESTIMATED_COURSES: usize = i32::MAX as usize;

/// Fixed-size separate-chaining table of course records keyed by CRN.
///
/// Buckets are materialized on first insertion and never resized. A record
/// whose CRN is already stored is dropped, so the first write wins.
#[derive(Debug, Clone)]
pub struct CourseStore {
    table: Vec<Option<Chain>>,
    len: usize,
}

impl CourseStore {
    /// Sizes the table to the smallest prime `>= ceil(estimated_count / 1.5)`.
    ///
    /// Estimates of zero or above [`MAX_ESTIMATED_COURSES`], and tables the
    /// allocator refuses, are reported as [`StoreError::InvalidCapacity`].
    pub fn new(estimated_count: usize) -> Result<Self, StoreError> {
        if estimated_count == 0 || estimated_count > MAX_ESTIMATED_COURSES {
            return Err(StoreError::InvalidCapacity(estimated_count));
        }
        let bucket_count = bucket_count_for(estimated_count);
        let mut table = Vec::new();
        table
            .try_reserve_exact(bucket_count)
            .map_err(|_| StoreError::InvalidCapacity(estimated_count))?;
        table.resize(bucket_count, None);
        Ok(Self { table, len: 0 })
    }

    #[inline]
    fn find_bucket(&self, crn: i32) -> usize {
        (crn_hash(crn) % self.table.len() as u64) as usize
    }

    pub fn insert(&mut self, record: CourseRecord) {
        let slot = self.find_bucket(record.crn());
        let chain = self.table[slot].get_or_insert_with(Vec::new);
        if chain.iter().any(|existing| *existing == record) {
            tracing::debug!(crn = record.crn(), "dropping duplicate course record");
            return;
        }
        chain.push(record);
        self.len += 1;
    }

    /// Looks up a record by scanning only the bucket its CRN hashes to.
    pub fn get(&self, crn: i32) -> Result<&CourseRecord, StoreError> {
        self.table[self.find_bucket(crn)]
            .iter()
            .flatten()
            .find(|record| record.crn() == crn)
            .ok_or(StoreError::NotFound { crn })
    }

    /// Looks up a record by walking every bucket. Always agrees with [`get`](Self::get).
    pub fn get_by_scan(&self, crn: i32) -> Result<&CourseRecord, StoreError> {
        self.records()
            .find(|record| record.crn() == crn)
            .ok_or(StoreError::NotFound { crn })
    }

    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored record, in bucket order and then insertion order.
    pub fn records(&self) -> impl Iterator<Item = &CourseRecord> + '_ {
        self.table.iter().flatten().flatten()
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self {
            table: vec![None; bucket_count_for(DEFAULT_ESTIMATED_COURSES)],
            len: 0,
        }
    }
}
