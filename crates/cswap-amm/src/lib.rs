//! Constant-product market maker over confidential token ledgers
//!
//! ## How it works
//!
//! 1. **Public pricing, hidden balances**: swap pricing and liquidity-share
//!    accounting run entirely on cleartext reserve counters; the value
//!    itself moves through encrypted ledger balances underneath
//! 2. **Operator pulls**: the pool moves caller funds through time-boxed
//!    operator grants on both token ledgers, never through ambient trust
//! 3. **Atomic bookkeeping**: reserves are updated in the same call as the
//!    ledger movement they describe, so the public counters always equal
//!    the pool account's true encrypted holdings
//!
//! ```text
//! Caller                        LiquidityPool                Ledgers
//!   │                                │                          │
//!   │ add_liquidity / swap / remove  │                          │
//!   ├───────────────────────────────►│                          │
//!   │                                │ pull/push via            │
//!   │                                │ transfer_from            │
//!   │                                ├─────────────────────────►│
//!   │                                │                          │
//!   │                                │ update reserves + shares │
//!   │◄───────────────────────────────┤                          │
//!   │  minted shares / amount out    │                          │
//! ```

pub mod pool;
pub mod pricing;

pub use pool::{LiquidityPool, PoolError, SwapDirection};
pub use pricing::{swap_output, FEE_DENOMINATOR, FEE_NUMERATOR};
