use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use xxhash_rust::xxh3::xxh3_64;

/// One course entry. Identity is the CRN alone: equality, hashing and
/// ordering ignore every other field.
#[derive(Debug, Clone, Default)]
pub struct CourseRecord {
    crn: i32,
    course_id: String,
    credits: i32,
    room: String,
    instructor: String,
}

// Longest decimal form of an i32: "-2147483648".
const CRN_DIGITS: usize = 11;

/// Digest used for bucket selection, taken over the decimal form of the CRN.
#[inline]
pub fn crn_hash(crn: i32) -> u64 {
    let mut digits = [0u8; CRN_DIGITS];
    let mut start = CRN_DIGITS;
    let mut rest = crn.unsigned_abs();
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    if crn < 0 {
        start -= 1;
        digits[start] = b'-';
    }
    xxh3_64(&digits[start..])
}

impl CourseRecord {
    pub const EMPTY: CourseRecord = CourseRecord {
        crn: 0,
        course_id: String::new(),
        credits: 0,
        room: String::new(),
        instructor: String::new(),
    };

    pub fn new(
        crn: i32,
        course_id: impl Into<String>,
        credits: i32,
        room: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            crn,
            course_id: course_id.into(),
            credits,
            room: room.into(),
            instructor: instructor.into(),
        }
    }

    #[inline]
    pub fn crn(&self) -> i32 {
        self.crn
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn set_crn(&mut self, crn: i32) {
        self.crn = crn;
    }

    pub fn set_course_id(&mut self, course_id: impl Into<String>) {
        self.course_id = course_id.into();
    }

    pub fn set_credits(&mut self, credits: i32) {
        self.credits = credits;
    }

    pub fn set_room(&mut self, room: impl Into<String>) {
        self.room = room.into();
    }

    pub fn set_instructor(&mut self, instructor: impl Into<String>) {
        self.instructor = instructor.into();
    }

    /// Stable per-CRN hash, identical for any two equal records.
    #[inline]
    pub fn key_hash(&self) -> u64 {
        crn_hash(self.crn)
    }
}

impl PartialEq for CourseRecord {
    fn eq(&self, other: &Self) -> bool {
        self.crn == other.crn
    }
}

impl Eq for CourseRecord {}

impl Hash for CourseRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crn.hash(state);
    }
}

impl PartialOrd for CourseRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CourseRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.crn.cmp(&other.crn)
    }
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course:{} CRN:{} Credits:{} Instructor:{} Room:{}",
            self.course_id, self.crn, self.credits, self.instructor, self.room
        )
    }
}
