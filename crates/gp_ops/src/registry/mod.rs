//! Operation registry for looking up operation metadata by kind.

use crate::operation::Operation;

/// Static description of one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationInfo {
    /// The described operation.
    pub operation: Operation,
    /// Lowercase name.
    pub name: &'static str,
    /// Conventional symbol.
    pub symbol: &'static str,
    /// Number of inputs, counting the value being operated on.
    pub arity: usize,
    /// The operation that undoes this one.
    pub inverse: Operation,
}

impl OperationInfo {
    const fn of(operation: Operation) -> Self {
        OperationInfo {
            operation,
            name: operation.name(),
            symbol: operation.symbol(),
            arity: operation.arity(),
            inverse: operation.inverse(),
        }
    }
}

// Static instances for 'static lifetime references
static ADD: OperationInfo = OperationInfo::of(Operation::Add);
static SUBTRACT: OperationInfo = OperationInfo::of(Operation::Subtract);
static MULTIPLY: OperationInfo = OperationInfo::of(Operation::Multiply);
static DIVIDE: OperationInfo = OperationInfo::of(Operation::Divide);
static NEGATE: OperationInfo = OperationInfo::of(Operation::Negate);

/// Registry mapping `Operation` to its metadata.
///
/// Uses direct enum dispatch instead of a map lookup. Every entry is a
/// `static`, so the registry itself is zero-sized and lookups never borrow it.
#[derive(Clone, Copy, Debug)]
pub struct OperationRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl OperationRegistry {
    /// Create the registry of all operations.
    pub const fn new() -> Self {
        OperationRegistry { _private: () }
    }

    /// Get the metadata for an operation.
    pub fn get(&self, op: Operation) -> &'static OperationInfo {
        match op {
            Operation::Add => &ADD,
            Operation::Subtract => &SUBTRACT,
            Operation::Multiply => &MULTIPLY,
            Operation::Divide => &DIVIDE,
            Operation::Negate => &NEGATE,
        }
    }

    /// Metadata for the inverse of `op`.
    pub fn inverse(&self, op: Operation) -> &'static OperationInfo {
        self.get(op.inverse())
    }

    /// Get all registered operation kinds.
    pub fn kinds(&self) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter()
    }

    /// Iterate over every entry.
    pub fn iter(&self) -> impl Iterator<Item = &'static OperationInfo> + '_ {
        self.kinds().map(|op| self.get(op))
    }

    /// Get the number of registered operations.
    pub fn len(&self) -> usize {
        Operation::ALL.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
