use std::fmt;

use chrono::Local;
use uuid::Uuid;

/// Identifier substituted for every freshly generated id by [`FixedIdGenerator`].
///
/// Golden outputs compare against this value, so it never changes.
pub const TESTING_ID: &str = "20060102150405-1a2b3c4";

const SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Stable identifier of a node, unique within a document.
///
/// Ids are opaque to the engine: they are compared and copied, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is the fixed id handed out under deterministic testing.
    pub fn is_testing(&self) -> bool {
        self.0 == TESTING_ID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Source of fresh node ids, injected into the parser and the command engine.
pub trait IdGenerator {
    fn next_id(&mut self) -> NodeId;
}

/// Production generator: `YYYYMMDDHHMMSS-xxxxxxx`, local time plus seven
/// random base-36 characters taken from a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> NodeId {
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        NodeId(format!("{stamp}-{}", random_suffix()))
    }
}

fn random_suffix() -> String {
    let mut n = Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        out.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Hands out [`TESTING_ID`] for every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedIdGenerator;

impl IdGenerator for FixedIdGenerator {
    fn next_id(&mut self) -> NodeId {
        NodeId::new(TESTING_ID)
    }
}

/// Deterministic, distinct ids: `<stamp>-0000001`, `<stamp>-0000002`, ...
///
/// Useful when a fixture needs every parsed node to carry its own id.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    stamp: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self {
            stamp: stamp.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("20210130000000")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId(format!("{}-{:07}", self.stamp, self.next));
        self.next += 1;
        id
    }
}
