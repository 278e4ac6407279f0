//! Generic dispatch toolkit.
//!
//! Re-exports the public surface of the workspace crates:
//!
//! - [`gp_dispatch`]: predicate-chain matching ([`pattern_match`],
//!   [`Matcher`]) and compile-time constant dispatch ([`match_constant`],
//!   [`constant_tags!`]).
//! - [`gp_ops`]: the symmetric operation registry ([`Operation::inverse`],
//!   [`Symmetric`]), reversible actions, and the undo [`Journal`].
//!
//! Logging goes through `tracing`. Call [`init_tracing`] once at startup to
//! print events; it is a no-op unless `RUST_LOG` is set.

use std::sync::Once;

pub use gp_dispatch::constant::{Here, There};
pub use gp_dispatch::{
    always, branches, constant_tags, match_constant, pattern_match, Arm, Branches, CaseList,
    ConstBool, ConstI64, ConstUsize, Constant, MatchError, Matcher, Nil, Select,
};
pub use gp_ops::{
    inverse_of, ActionPair, Add, Arithmetic, ArithmeticError, ContainerAction, ContainerError,
    ContainerOp, Divide, Inverse, Journal, Multiply, Negate, Operation, OperationInfo,
    OperationRegistry, ParseOperationError, Reversible, ReversibleOp, Sequence, Subtract,
    Symmetric, TaggedOp,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gp_dispatch=trace` or `RUST_LOG=gp_ops=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            match install_subscriber() {
                Ok(()) => tracing::debug!("tracing initialized"),
                Err(err) => tracing::debug!(%err, "tracing subscriber already installed"),
            }
        }
    });
}

/// Install the global `fmt` subscriber filtered by `RUST_LOG`.
fn install_subscriber() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::from_default_env();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init()
}
